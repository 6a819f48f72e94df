//! Map element
//!
//! An ordered sequence of pairs, written `(a=1;b=2)`. Insertion order is preserved and
//! duplicate keys are kept; [Map::get] resolves duplicates last-wins for callers that want
//! that policy.

use super::super::traits::AstNode;
use super::pair::Pair;
use super::value::Value;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Map {
    pub entries: Vec<Pair>,
}

impl Map {
    pub fn new(entries: Vec<Pair>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Pair] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the last entry whose key text equals `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .rev()
            .find(|pair| pair.key.as_str() == key)
            .map(|pair| pair.value())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|pair| pair.key.as_str())
    }
}

impl AstNode for Map {
    fn node_type(&self) -> &'static str {
        "Map"
    }

    fn display_label(&self) -> String {
        match self.entries.len() {
            1 => "1 entry".to_string(),
            n => format!("{} entries", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modl::ast::{Key, Primitive};

    fn pair(key: &str, value: i64) -> Pair {
        Pair::new(
            Key::PlainString(key.into()),
            Value::Primitive(Primitive::Integer(value)),
        )
    }

    #[test]
    fn test_get_is_last_wins() {
        let map = Map::new(vec![pair("a", 1), pair("b", 2), pair("a", 3)]);
        assert_eq!(map.len(), 3);
        assert_eq!(
            map.get("a").and_then(|v| v.as_primitive()).and_then(|p| p.as_i64()),
            Some(3)
        );
        assert!(map.get("c").is_none());
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_label() {
        assert_eq!(Map::default().display_label(), "0 entries");
        assert_eq!(Map::new(vec![pair("a", 1)]).display_label(), "1 entry");
    }
}
