//! Dataset adapter trait and descriptive metadata

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::schema::Schema;
use crate::source::ExampleSource;
use crate::split::{ResolvedSplit, SplitName};

/// Semantic version of a dataset definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    /// Major version
    pub major: u32,
    /// Minor version
    pub minor: u32,
    /// Patch version
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts = s
            .split('.')
            .map(str::parse::<u32>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidArgument(format!("invalid version: {}", s)))?;

        match parts.as_slice() {
            [major, minor, patch] => Ok(Self::new(*major, *minor, *patch)),
            _ => Err(Error::InvalidArgument(format!("invalid version: {}", s))),
        }
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Descriptive envelope of a dataset. Carried along, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Registry name of the dataset
    pub name: String,

    /// Version of the dataset definition
    pub version: Version,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Project homepage
    #[serde(default)]
    pub homepage: String,

    /// BibTeX citation
    #[serde(default)]
    pub citation: String,

    /// How to obtain the files that must be placed in the manual directory
    #[serde(default)]
    pub manual_download_instructions: String,

    /// `(input, target)` field names for supervised use, if any
    #[serde(default)]
    pub supervised_keys: Option<(String, String)>,
}

impl DatasetInfo {
    /// Create an envelope with only a name and version
    pub fn new(name: &str, version: Version) -> Self {
        Self {
            name: name.to_string(),
            version,
            description: String::new(),
            homepage: String::new(),
            citation: String::new(),
            manual_download_instructions: String::new(),
            supervised_keys: None,
        }
    }

    /// Set the description
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.trim().to_string();
        self
    }

    /// Set the homepage
    pub fn homepage(mut self, homepage: &str) -> Self {
        self.homepage = homepage.to_string();
        self
    }

    /// Set the citation
    pub fn citation(mut self, citation: &str) -> Self {
        self.citation = citation.trim().to_string();
        self
    }

    /// Set the manual download instructions
    pub fn manual_download_instructions(mut self, instructions: &str) -> Self {
        self.manual_download_instructions = instructions.trim().to_string();
        self
    }
}

/// A dataset whose splits can be streamed as labeled examples.
///
/// Adapters are immutable once built; every call to
/// [`DatasetAdapter::generate`] starts an independent stream.
pub trait DatasetAdapter: Send + Sync {
    /// Descriptive envelope
    fn info(&self) -> &DatasetInfo;

    /// Schema of every record this adapter emits
    fn schema(&self) -> Arc<Schema>;

    /// Declared split names, in declaration order
    fn list_splits(&self) -> Vec<SplitName>;

    /// Resolve every split's backing file under `base_dir`. Performs no I/O.
    fn locate(&self, base_dir: &Path) -> Vec<ResolvedSplit>;

    /// Open a split under `base_dir` and stream its examples.
    ///
    /// Fails with [`Error::UnknownSplit`], [`Error::MissingInputFile`] or
    /// [`Error::SchemaMismatch`] before any example is produced.
    fn generate(&self, base_dir: &Path, split: &str) -> Result<Box<dyn ExampleSource>>;

    /// Name of the dataset
    fn name(&self) -> &str {
        &self.info().name
    }
}
