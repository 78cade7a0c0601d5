use super::{Primitive, Value};
use crate::Result;

use indexmap::IndexMap;

/// Property values keyed by property name, in declaration order.
///
/// This is what a mapped model is loaded from and what it hands back when its
/// values are written to an item.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRecord {
    values: IndexMap<String, Value>,
}

impl ValueRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` from a Rust value.
    pub fn insert<T: Primitive>(&mut self, name: impl Into<String>, value: T) -> &mut Self {
        self.values.insert(name.into(), value.into_value());
        self
    }

    pub fn insert_value(&mut self, name: impl Into<String>, value: Value) -> &mut Self {
        self.values.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Removes `name` and returns its value, or `Value::Null` if it was not
    /// set.
    pub fn take(&mut self, name: &str) -> Value {
        self.values.shift_remove(name).unwrap_or_default()
    }

    /// Removes `name` and converts it into `T`.
    ///
    /// A missing property converts from `Value::Null`, which succeeds for
    /// nullable and list types only.
    pub fn take_as<T: Primitive>(&mut self, name: &str) -> Result<T> {
        T::load(self.take(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, Value)> for ValueRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValueRecord {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
