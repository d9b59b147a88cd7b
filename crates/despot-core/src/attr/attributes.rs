use super::Value;

use indexmap::IndexMap;
use std::ops;

/// An ordered, string-keyed attribute mapping.
///
/// Used for incoming untrusted attributes, configured defaults, and the
/// mapper's filtered output. Iteration follows insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    attrs: IndexMap<String, Value>,
}

impl Attributes {
    pub fn new() -> Self {
        Self {
            attrs: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            attrs: IndexMap::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.attrs.get_mut(key)
    }

    /// Sets `key`, replacing any current value and returning it.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attrs.insert(key.into(), value.into())
    }

    /// Removes `key`, keeping the surviving attributes in insertion order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.attrs.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.attrs.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.attrs.keys().map(|key| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.attrs.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.attrs.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl IntoIterator for Attributes {
    type Item = (String, Value);

    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a Value);

    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attrs: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl Extend<(String, Value)> for Attributes {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.attrs.extend(iter);
    }
}

impl From<IndexMap<String, Value>> for Attributes {
    fn from(attrs: IndexMap<String, Value>) -> Self {
        Self { attrs }
    }
}

impl From<Attributes> for Value {
    fn from(src: Attributes) -> Self {
        Self::Object(src.attrs)
    }
}

impl ops::Index<&str> for Attributes {
    type Output = Value;

    fn index(&self, key: &str) -> &Self::Output {
        match self.attrs.get(key) {
            Some(ret) => ret,
            None => panic!("no attribute for key `{key}`"),
        }
    }
}
