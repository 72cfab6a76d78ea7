//! Named dataset partitions and their backing files

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Name of a dataset partition
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SplitName(String);

impl SplitName {
    /// The training split
    pub fn train() -> Self {
        Self("train".into())
    }

    /// The test split
    pub fn test() -> Self {
        Self("test".into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SplitName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for SplitName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SplitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A split and the file that backs it, relative to the dataset directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitFile {
    /// Split name
    pub split: SplitName,

    /// File name relative to the dataset directory
    pub file: PathBuf,
}

/// A split whose backing file has been resolved against a base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSplit {
    /// Split name
    pub split: SplitName,

    /// Path of the backing file
    pub path: PathBuf,
}

/// Fixed table from split name to backing file.
///
/// All files live in one subdirectory of the manual data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitTable {
    subdirectory: PathBuf,
    files: Vec<SplitFile>,
}

impl SplitTable {
    /// Create a split table, rejecting empty tables and repeated split names
    pub fn try_new<P: Into<PathBuf>>(subdirectory: P, files: Vec<SplitFile>) -> Result<Self> {
        if files.is_empty() {
            return Err(Error::InvalidArgument("a dataset must declare at least one split".into()));
        }
        for (i, entry) in files.iter().enumerate() {
            if files[..i].iter().any(|earlier| earlier.split == entry.split) {
                return Err(Error::InvalidArgument(format!(
                    "split '{}' declared more than once",
                    entry.split
                )));
            }
        }

        Ok(Self {
            subdirectory: subdirectory.into(),
            files,
        })
    }

    /// Split names in declaration order
    pub fn splits(&self) -> Vec<SplitName> {
        self.files.iter().map(|f| f.split.clone()).collect()
    }

    /// Resolve one split against a base directory. Performs no I/O.
    pub fn resolve(&self, base_dir: &Path, split: &str) -> Option<ResolvedSplit> {
        self.files
            .iter()
            .find(|f| f.split.as_str() == split)
            .map(|f| self.resolve_entry(base_dir, f))
    }

    /// Resolve every split against a base directory. Performs no I/O.
    pub fn resolve_all(&self, base_dir: &Path) -> Vec<ResolvedSplit> {
        self.files
            .iter()
            .map(|f| self.resolve_entry(base_dir, f))
            .collect()
    }

    fn resolve_entry(&self, base_dir: &Path, entry: &SplitFile) -> ResolvedSplit {
        ResolvedSplit {
            split: entry.split.clone(),
            path: base_dir.join(&self.subdirectory).join(&entry.file),
        }
    }
}

impl<'de> Deserialize<'de> for SplitTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Repr {
            subdirectory: PathBuf,
            files: Vec<SplitFile>,
        }

        let repr = Repr::deserialize(deserializer)?;
        Self::try_new(repr.subdirectory, repr.files).map_err(serde::de::Error::custom)
    }
}
