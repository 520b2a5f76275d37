//! Bundled data files and config, with optional on-disk overrides.
//!
//! The catalog, the color-name table and `config.yaml` are compiled into the
//! binary. `DATA_DIR` and `CONFIG_FILE` point at on-disk copies:
//!
//! - unset: only the bundled copy is read, the filesystem is never touched
//! - set but empty or missing: the bundled copy is written there first
//! - set and populated: on-disk files win, missing ones come from the binary

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Product catalog file name inside the data directory
pub const CATALOG_FILE: &str = "catalog.csv";

/// Color-name table file name inside the data directory
pub const COLOR_NAMES_FILE: &str = "color_names.csv";

const CONFIG_NAME: &str = "config.yaml";

#[derive(RustEmbed)]
#[folder = "data/"]
#[include = "*.csv"]
struct EmbeddedData;

#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

fn bundled_config() -> io::Result<Cow<'static, [u8]>> {
    EmbeddedConfig::get(CONFIG_NAME)
        .map(|f| f.data)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "config.yaml is not bundled"))
}

/// Write `data` to `path`, creating parent directories.
fn write_with_parents(path: &Path, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, data)
}

/// A directory counts as unpopulated when it holds nothing but `.gitkeep`.
fn is_unpopulated(dir: &Path) -> bool {
    match fs::read_dir(dir) {
        Ok(entries) => entries
            .flatten()
            .all(|entry| entry.file_name() == ".gitkeep"),
        Err(e) => e.kind() == io::ErrorKind::NotFound,
    }
}

/// Which bundled assets `init` extracts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Data,
    Config,
}

/// What `seed_if_configured` wrote
#[derive(Debug, Default)]
pub struct SeedReport {
    pub data_seeded: Vec<String>,
    pub config_seeded: bool,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.data_seeded.is_empty() && !self.config_seeded
    }
}

/// Paths written and skipped by `init`
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Resolves data files and config against the bundled copies
pub struct AssetLoader {
    data_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// `None` means bundled assets only for that location.
    pub fn new(data_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            data_dir,
            config_file,
        }
    }

    /// Create a loader from `DATA_DIR` and `CONFIG_FILE`
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("DATA_DIR").ok().map(PathBuf::from),
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
        )
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Read a data file, preferring the on-disk copy in `DATA_DIR`.
    pub fn read_data(&self, name: &str) -> io::Result<Cow<'static, [u8]>> {
        if let Some(path) = self.data_dir.as_ref().map(|dir| dir.join(name)) {
            if path.is_file() {
                tracing::trace!(path = %path.display(), "Reading data file from disk");
                return fs::read(&path).map(Cow::Owned);
            }
        }

        tracing::trace!(file = name, "Reading bundled data file");
        EmbeddedData::get(name).map(|f| f.data).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("Data file not found: {name}"),
            )
        })
    }

    /// Bundled and on-disk CSV file names, sorted and de-duplicated
    pub fn list_data(&self) -> Vec<String> {
        let mut files: BTreeSet<String> = EmbeddedData::iter().map(String::from).collect();

        let on_disk = self
            .data_dir
            .iter()
            .filter_map(|dir| fs::read_dir(dir).ok())
            .flat_map(|entries| entries.flatten())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.ends_with(".csv"));
        files.extend(on_disk);

        files.into_iter().collect()
    }

    /// Read `config.yaml`, preferring `CONFIG_FILE` when it exists.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        match self.config_file.as_deref() {
            Some(path) if path.is_file() => {
                tracing::trace!(path = %path.display(), "Reading config from disk");
                fs::read(path).map(Cow::Owned)
            }
            _ => {
                tracing::trace!("Reading bundled config");
                bundled_config()
            }
        }
    }

    pub fn read_config_string(&self) -> io::Result<String> {
        String::from_utf8(self.read_config()?.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Populate configured locations that are still empty.
    pub fn seed_if_configured(&self) -> io::Result<SeedReport> {
        let mut report = SeedReport::default();

        if let Some(dir) = self.data_dir.as_deref().filter(|dir| is_unpopulated(dir)) {
            for file in EmbeddedData::iter() {
                if let Some(asset) = EmbeddedData::get(&file) {
                    write_with_parents(&dir.join(file.as_ref()), &asset.data)?;
                    report.data_seeded.push(file.into_owned());
                }
            }
            tracing::info!(
                dir = %dir.display(),
                count = report.data_seeded.len(),
                "Seeded data directory"
            );
        }

        if let Some(path) = self.config_file.as_deref().filter(|path| !path.exists()) {
            write_with_parents(path, &bundled_config()?)?;
            report.config_seeded = true;
            tracing::info!(path = %path.display(), "Seeded config file");
        }

        Ok(report)
    }

    /// Extract bundled assets for the `init` command.
    ///
    /// Targets the configured paths, or `data/` and `config.yaml` in the
    /// working directory.
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut targets: Vec<(PathBuf, Cow<'static, [u8]>)> = Vec::new();

        for category in categories {
            match category {
                AssetCategory::Data => {
                    let dir = self.data_dir.as_deref().unwrap_or(Path::new("./data"));
                    for file in EmbeddedData::iter() {
                        if let Some(asset) = EmbeddedData::get(&file) {
                            targets.push((dir.join(file.as_ref()), asset.data));
                        }
                    }
                }
                AssetCategory::Config => {
                    let path = self
                        .config_file
                        .clone()
                        .unwrap_or_else(|| PathBuf::from(CONFIG_NAME));
                    targets.push((path, bundled_config()?));
                }
            }
        }

        let mut report = InitReport::default();
        for (path, data) in targets {
            let shown = path.display().to_string();
            if path.exists() && !force {
                report.skipped.push(shown);
            } else {
                write_with_parents(&path, &data)?;
                report.written.push(shown);
            }
        }

        Ok(report)
    }

    /// Names of the bundled assets in a category
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Data => EmbeddedData::iter().map(String::from).collect(),
            AssetCategory::Config => vec![CONFIG_NAME.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_only_reads_bundled_files() {
        let loader = AssetLoader::new(None, None);

        let catalog = loader.read_data(CATALOG_FILE).unwrap();
        assert!(catalog.starts_with(b"p_id,"));
        assert!(loader.read_data(COLOR_NAMES_FILE).is_ok());
        assert!(loader.read_config_string().unwrap().contains("top_products"));
    }

    #[test]
    fn test_missing_data_file_is_not_found() {
        let loader = AssetLoader::new(None, None);
        let err = loader.read_data("nope.csv").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_seed_creates_missing_locations() {
        let tmp = TempDir::new().unwrap();
        let data_dir = tmp.path().join("data");
        let config_file = tmp.path().join("conf").join("config.yaml");
        let loader = AssetLoader::new(Some(data_dir.clone()), Some(config_file.clone()));

        let report = loader.seed_if_configured().unwrap();

        assert!(report.config_seeded);
        assert!(report.data_seeded.contains(&CATALOG_FILE.to_string()));
        assert!(report.data_seeded.contains(&COLOR_NAMES_FILE.to_string()));
        assert!(data_dir.join(CATALOG_FILE).exists());
        assert!(config_file.exists());

        // Second run finds populated locations and leaves them alone
        let report = loader.seed_if_configured().unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_filesystem_overrides_embedded() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CATALOG_FILE), "p_id,name\n1,Only\n").unwrap();
        let loader = AssetLoader::new(Some(tmp.path().to_path_buf()), None);

        let catalog = loader.read_data(CATALOG_FILE).unwrap();
        assert_eq!(&*catalog, b"p_id,name\n1,Only\n");

        // Files absent from the override directory still come from the binary
        assert!(loader.read_data(COLOR_NAMES_FILE).is_ok());
        assert_eq!(loader.list_data(), vec![CATALOG_FILE, COLOR_NAMES_FILE]);
    }

    #[test]
    fn test_init_skips_existing_without_force() {
        let tmp = TempDir::new().unwrap();
        let config_file = tmp.path().join("config.yaml");
        fs::write(&config_file, "top_products: 3\n").unwrap();
        let loader = AssetLoader::new(Some(tmp.path().join("data")), Some(config_file.clone()));

        let report = loader
            .init(&[AssetCategory::Data, AssetCategory::Config], false)
            .unwrap();
        assert_eq!(report.written.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(fs::read_to_string(&config_file).unwrap(), "top_products: 3\n");

        let report = loader.init(&[AssetCategory::Config], true).unwrap();
        assert_eq!(report.written.len(), 1);
        assert_ne!(fs::read_to_string(&config_file).unwrap(), "top_products: 3\n");
    }
}
