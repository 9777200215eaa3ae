use crate::Value;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the identity field assigned by the persistence layer.
pub const ID: &str = "id";

static NULL: Value = Value::Null;

/// A mapping from field name to value.
///
/// Fields keep their insertion order. A missing field reads as
/// [`Value::Null`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Record {
        Record::default()
    }

    /// The record's identity, or `Null` before the record is created.
    pub fn id(&self) -> &Value {
        self.get(ID)
    }

    pub fn get(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&NULL)
    }

    pub fn get_mut(&mut self, field: &str) -> Option<&mut Value> {
        self.fields.get_mut(field)
    }

    /// Sets `field`, returning the previous value (`Null` if unset).
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Value {
        self.fields
            .insert(field.into(), value.into())
            .unwrap_or_default()
    }

    /// Removes `field` entirely, returning its value.
    pub fn remove(&mut self, field: &str) -> Value {
        self.fields.shift_remove(field).unwrap_or_default()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Overwrites each field present in `changes`.
    pub fn merge(&mut self, changes: Record) {
        for (field, value) in changes.fields {
            self.fields.insert(field, value);
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (field, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {value}")?;
        }
        f.write_str("}")
    }
}
