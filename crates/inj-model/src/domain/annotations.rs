use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Annotation set of a single scope (one namespace, or one pod), based on [`BTreeMap`].
///
/// Keys are unique, order carries no meaning. Values may be empty strings;
/// an empty value and an absent key are treated the same by the resolver.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotations(pub BTreeMap<String, String>);

impl Annotations {
    /// Create an empty annotation set.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Number of annotations present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no annotations are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert or overwrite an annotation.
    ///
    /// Returns `self` for chaining.
    pub fn insert<K, V>(&mut self, key: K, val: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), val.into());
        self
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Iterate through all annotations as `(&str, &str)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Annotations
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Annotations;

    #[test]
    fn new_is_empty() {
        let ann = Annotations::new();
        assert!(ann.is_empty());
        assert_eq!(ann.len(), 0);
        assert!(ann.get("anything").is_none());
    }

    #[test]
    fn insert_and_get() {
        let mut ann = Annotations::new();
        ann.insert("a/key", "value").insert("b/key", "other");

        assert_eq!(ann.len(), 2);
        assert_eq!(ann.get("a/key"), Some("value"));
        assert_eq!(ann.get("b/key"), Some("other"));
        assert!(ann.get("c/key").is_none());
    }

    #[test]
    fn insert_overwrites_existing_key() {
        let mut ann = Annotations::new();
        ann.insert("a/key", "first");
        ann.insert("a/key", "second");

        assert_eq!(ann.len(), 1);
        assert_eq!(ann.get("a/key"), Some("second"));
    }

    #[test]
    fn empty_value_is_kept_distinct_from_absent_key() {
        let ann: Annotations = [("a/key", "")].into_iter().collect();

        assert_eq!(ann.get("a/key"), Some(""));
        assert!(ann.get("b/key").is_none());
    }

    #[test]
    fn from_iterator_collects_pairs() {
        let ann: Annotations = [("x", "1"), ("y", "2")].into_iter().collect();

        let pairs: Vec<_> = ann.iter().collect();
        assert_eq!(pairs, vec![("x", "1"), ("y", "2")]);
    }

    #[test]
    fn serde_transparent_roundtrip() {
        let ann: Annotations = [("a/key", "value")].into_iter().collect();

        let json = serde_json::to_string(&ann).unwrap();
        assert_eq!(json, r#"{"a/key":"value"}"#);

        let back: Annotations = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ann);
    }
}
