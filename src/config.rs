use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Subdirectory of `CSV_PATH` holding one folder of page scans per book.
pub const INGEST_SUBDIR: &str = "for_ingest";

/// Credentials and paths for one run, read once from the settings file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub workbench_path: PathBuf,
    pub csv_path: PathBuf,
    pub image_viewer: String,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let entries = dotenvy::from_path_iter(path)
            .with_context(|| format!("failed to open settings file: {}", path.display()))?;

        let mut values = HashMap::new();
        for entry in entries {
            let (key, value) =
                entry.with_context(|| format!("failed to parse settings file: {}", path.display()))?;
            values.insert(key, value);
        }

        Self::from_map(&values).with_context(|| format!("invalid settings in {}", path.display()))
    }

    pub fn from_map(values: &HashMap<String, String>) -> Result<Self> {
        let require = |key: &str| -> Result<String> {
            values
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(ToOwned::to_owned)
                .with_context(|| format!("missing required setting {key}"))
        };

        Ok(Self {
            username: require("USERNAME")?,
            password: require("PASSWORD")?,
            host: require("HOST")?,
            workbench_path: PathBuf::from(require("WORKBENCH_PATH")?),
            csv_path: PathBuf::from(require("CSV_PATH")?),
            image_viewer: require("IMAGE_VIEWER")?,
        })
    }

    pub fn scan_root(&self) -> PathBuf {
        self.csv_path.join(INGEST_SUBDIR)
    }
}
