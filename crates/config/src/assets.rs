//! On-disk layout of the toolkit assets shipped next to the quickstart.
//!
//! The assets root holds `splunk/spl/*.txt` (macro and saved-search SPL) and
//! `data/` (sample JSONL exports and lookup CSVs).

use std::path::{Path, PathBuf};

use crate::constants::{DATA_DIR, SPL_DIR};
use crate::loader::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    root: PathBuf,
}

impl AssetLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The quickstart runs from its own directory inside the toolkit checkout,
    /// so the default root is the parent of the working directory.
    pub fn from_current_dir() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir()
            .map_err(|e| ConfigError::AssetsDirUnavailable(e.to_string()))?;
        let root = cwd.parent().map(Path::to_path_buf).unwrap_or(cwd);
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the SPL file for a named macro or saved search.
    pub fn spl_path(&self, name: &str) -> PathBuf {
        let mut path = self.root.clone();
        for part in SPL_DIR {
            path.push(part);
        }
        path.push(format!("{name}.txt"));
        path
    }

    /// Path of a file in the sample data directory.
    pub fn data_path(&self, file: &str) -> PathBuf {
        self.root.join(DATA_DIR).join(file)
    }
}
