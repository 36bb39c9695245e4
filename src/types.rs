//! Shared types passed between the scanner, codec and orchestration layers.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::path::PathBuf;

/// A classified directory entry, alive for the duration of one encode step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// Directory path joined with the entry name
    pub source_path: PathBuf,
    /// Extension including the leading dot, as listed (e.g. `.png`)
    pub extension: String,
    pub mime_type: &'static str,
    /// True for SVG, the only text-representable format
    pub is_vector_format: bool,
}

/// Identifier → data URI mapping produced by a codification call.
///
/// Iteration follows insertion order. Inserting an identifier that is already
/// present replaces its value but keeps its original position, so two files
/// that camel-case to the same name resolve to whichever was processed last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ImageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, returning the previous data URI for `identifier` if any.
    pub fn insert(&mut self, identifier: String, data_uri: String) -> Option<String> {
        if let Some(&pos) = self.index.get(&identifier) {
            return Some(std::mem::replace(&mut self.entries[pos].1, data_uri));
        }
        self.index.insert(identifier.clone(), self.entries.len());
        self.entries.push((identifier, data_uri));
        None
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.index
            .get(identifier)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn contains_key(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for ImageMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for ImageMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (identifier, data_uri) in &self.entries {
            map.serialize_entry(identifier, data_uri)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut map = ImageMap::new();
        map.insert("zebra".into(), "z".into());
        map.insert("apple".into(), "a".into());
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["zebra", "apple"]);
    }

    #[test]
    fn duplicate_identifier_overwrites_in_place() {
        let mut map = ImageMap::new();
        map.insert("icon".into(), "first".into());
        map.insert("logo".into(), "logo".into());
        let previous = map.insert("icon".into(), "second".into());

        assert_eq!(previous.as_deref(), Some("first"));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("icon"), Some("second"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["icon", "logo"]);
    }

    #[test]
    fn serializes_as_ordered_object() {
        let mut map = ImageMap::new();
        map.insert("b".into(), "data:b".into());
        map.insert("a".into(), "data:a".into());
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"b":"data:b","a":"data:a"}"#);
    }

    #[test]
    fn empty_map() {
        let map = ImageMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get("anything"), None);
        assert!(!map.contains_key("anything"));
    }
}
