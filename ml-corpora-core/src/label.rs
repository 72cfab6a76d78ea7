//! Source-value to class-index normalization

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::INVALID_LABEL;

/// How a raw source column value becomes a class index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum LabelRule {
    /// Exact-match lookup; unlisted values map to [`INVALID_LABEL`]
    Table {
        /// Source value to class index
        values: BTreeMap<String, i64>,
    },

    /// The column already stores the class index as an integer
    Verbatim,
}

impl LabelRule {
    /// Build a lookup table rule from `(source value, class index)` pairs
    pub fn table<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        Self::Table {
            values: entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }

    /// Check that every class index the rule can produce fits `num_classes`
    pub fn validate(&self, num_classes: u32) -> Result<()> {
        if let LabelRule::Table { values } = self {
            for (source, &index) in values {
                if !(0..i64::from(num_classes)).contains(&index) {
                    return Err(Error::InvalidArgument(format!(
                        "label table maps '{}' to {}, outside 0..{}",
                        source, index, num_classes
                    )));
                }
            }
        }
        Ok(())
    }

    /// Map a raw source value to a class index.
    ///
    /// Table rules never fail. Verbatim rules fail with a description of the
    /// problem when the value is not an integer in `0..num_classes`.
    pub fn normalize(&self, raw: &str, num_classes: u32) -> std::result::Result<i64, String> {
        match self {
            LabelRule::Table { values } => Ok(values.get(raw).copied().unwrap_or(INVALID_LABEL)),
            LabelRule::Verbatim => {
                let index: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| format!("label '{}' is not an integer class index", raw))?;
                if (0..i64::from(num_classes)).contains(&index) {
                    Ok(index)
                } else {
                    Err(format!("label {} outside 0..{}", index, num_classes))
                }
            }
        }
    }
}
