//! Output examples produced by corpus adapters

use std::fmt;
use std::sync::Arc;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::schema::{FieldKind, Schema, INVALID_LABEL};

/// A single field value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Text copied from a source column
    Text(String),

    /// Class index, or [`INVALID_LABEL`]
    Label(i64),
}

impl Value {
    /// Get the text of this value, if it is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Label(_) => None,
        }
    }

    /// Get the class index of this value, if it is a label
    pub fn as_label(&self) -> Option<i64> {
        match self {
            Value::Label(l) => Some(*l),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Label(l) => write!(f, "{}", l),
        }
    }
}

/// One labeled example: a value for every field of its schema, in schema order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    schema: Arc<Schema>,
    values: Vec<Value>,
}

impl Record {
    /// Create a record, checking every value against its field's kind
    pub fn try_new(schema: Arc<Schema>, values: Vec<Value>) -> Result<Self> {
        if values.len() != schema.len() {
            return Err(Error::InvalidArgument(format!(
                "record has {} values, schema declares {} fields",
                values.len(),
                schema.len()
            )));
        }

        for (field, value) in schema.fields().iter().zip(&values) {
            let fits = match (field.kind, value) {
                (FieldKind::Text, Value::Text(_)) => true,
                (kind @ FieldKind::ClassLabel { .. }, Value::Label(l)) => kind.admits(*l),
                _ => false,
            };
            if !fits {
                return Err(Error::InvalidArgument(format!(
                    "value {} does not fit field {}",
                    value, field
                )));
            }
        }

        Ok(Self { schema, values })
    }

    /// Get the schema of this record
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Get a value by field name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schema.index_of(name).map(|i| &self.values[i])
    }

    /// Get a text value by field name
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_text)
    }

    /// Get a label value by field name
    pub fn label(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_label)
    }

    /// Whether every label field holds a real class index.
    ///
    /// Records carrying the [`INVALID_LABEL`] sentinel are still emitted by
    /// the generators; consumers decide whether to drop them.
    pub fn has_valid_label(&self) -> bool {
        self.values
            .iter()
            .all(|v| v.as_label().map_or(true, |l| l != INVALID_LABEL))
    }

    /// Iterate over `(field name, value)` pairs in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.schema.names().zip(self.values.iter())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Field;

    fn schema() -> Arc<Schema> {
        Arc::new(
            Schema::try_new(vec![Field::text("question"), Field::class_label("label", 2)]).unwrap(),
        )
    }

    #[test]
    fn test_accessors() {
        let record = Record::try_new(
            schema(),
            vec![Value::Text("Is X effective?".into()), Value::Label(1)],
        )
        .unwrap();

        assert_eq!(record.text("question"), Some("Is X effective?"));
        assert_eq!(record.label("label"), Some(1));
        assert_eq!(record.label("question"), None);
        assert_eq!(record.get("missing"), None);
        assert!(record.has_valid_label());
    }

    #[test]
    fn test_sentinel_is_accepted_but_flagged() {
        let record =
            Record::try_new(schema(), vec![Value::Text(String::new()), Value::Label(INVALID_LABEL)])
                .unwrap();
        assert!(!record.has_valid_label());
    }

    #[test]
    fn test_out_of_range_label_rejected() {
        let result = Record::try_new(schema(), vec![Value::Text("q".into()), Value::Label(2)]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let result = Record::try_new(schema(), vec![Value::Label(0), Value::Label(0)]);
        assert!(result.is_err());

        let result = Record::try_new(schema(), vec![Value::Text("q".into())]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_in_schema_order() {
        let record =
            Record::try_new(schema(), vec![Value::Text("q".into()), Value::Label(0)]).unwrap();
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"question":"q","label":0}"#
        );
    }
}
