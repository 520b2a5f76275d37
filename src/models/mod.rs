pub mod config;
pub mod product;

pub use config::{AppConfig, ToneConfig};
pub use product::{Product, ProductAttributes};
