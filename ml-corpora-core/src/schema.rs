//! Schema definition for labeled text examples

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Class index emitted when no valid label could be derived from the source
pub const INVALID_LABEL: i64 = -1;

/// Kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Free UTF-8 text
    Text,

    /// Categorical label with a fixed number of classes
    ClassLabel {
        /// Number of admissible classes; valid indices are `0..num_classes`
        num_classes: u32,
    },
}

impl FieldKind {
    /// Check whether `index` is admissible for this kind.
    ///
    /// Text fields admit no class index. The [`INVALID_LABEL`] sentinel is
    /// admissible for every class label.
    pub fn admits(&self, index: i64) -> bool {
        match self {
            FieldKind::Text => false,
            FieldKind::ClassLabel { num_classes } => {
                index == INVALID_LABEL || (0..i64::from(*num_classes)).contains(&index)
            }
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "Text"),
            FieldKind::ClassLabel { num_classes } => write!(f, "ClassLabel({})", num_classes),
        }
    }
}

/// A named field in a schema
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    /// Name of the field
    pub name: String,

    /// Kind of the field
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl Field {
    /// Create a new field
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }

    /// Create a free-text field
    pub fn text(name: &str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Create a class label field
    pub fn class_label(name: &str, num_classes: u32) -> Self {
        Self::new(name, FieldKind::ClassLabel { num_classes })
    }

    /// Get the name of this field
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the kind of this field
    pub fn kind(&self) -> FieldKind {
        self.kind
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.kind)
    }
}

/// An ordered set of uniquely named fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Field>", into = "Vec<Field>")]
pub struct Schema {
    /// Fields in declaration order
    fields: Vec<Field>,

    /// Field indices by name for faster lookup
    field_indices: HashMap<String, usize>,
}

impl Schema {
    /// Create a new schema, rejecting duplicate field names and empty label
    /// vocabularies
    pub fn try_new(fields: Vec<Field>) -> Result<Self> {
        let mut field_indices = HashMap::with_capacity(fields.len());
        for (i, field) in fields.iter().enumerate() {
            if let FieldKind::ClassLabel { num_classes: 0 } = field.kind {
                return Err(Error::InvalidArgument(format!(
                    "class label '{}' must declare at least one class",
                    field.name
                )));
            }
            if field_indices.insert(field.name.clone(), i).is_some() {
                return Err(Error::DuplicateField(field.name.clone()));
            }
        }

        Ok(Self {
            fields,
            field_indices,
        })
    }

    /// Get all fields in this schema
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Get a field by name
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.index_of(name).map(|i| &self.fields[i])
    }

    /// Get the index of a field by name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Get the number of fields in this schema
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if this schema is empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over field names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(Field::name)
    }
}

impl TryFrom<Vec<Field>> for Schema {
    type Error = Error;

    fn try_from(fields: Vec<Field>) -> Result<Self> {
        Self::try_new(fields)
    }
}

impl From<Schema> for Vec<Field> {
    fn from(schema: Schema) -> Self {
        schema.fields
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Schema: {} fields", self.fields.len())?;
        for field in &self.fields {
            writeln!(f, "  {}", field)?;
        }
        Ok(())
    }
}
