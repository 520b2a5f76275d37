use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// IEC 61966-2-1 exact formula: sRGB to linear
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("gamma_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    // One entry per 8-bit channel value, so decoding never interpolates
    writeln!(file, "/// Lookup table for 8-bit sRGB to linear conversion").unwrap();
    writeln!(file, "/// Index: channel byte, Value: linear light").unwrap();
    writeln!(file, "pub static SRGB8_TO_LINEAR: [f32; 256] = [").unwrap();
    for i in 0..256 {
        let linear = srgb_to_linear_exact(i as f64 / 255.0);
        if i > 0 && i % 8 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {:.9},", linear as f32).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
