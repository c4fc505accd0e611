use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute names read by the converters, without the `data_` prefix.
pub struct Attr;

impl Attr {
    pub const PREFIX: &'static str = "data_";
    /// Reserved key carrying the origin tag.
    pub const ORIGIN: &'static str = "data_origin";

    pub const REF: &'static str = "ref";
    pub const KEY: &'static str = "key";
    pub const ROLE: &'static str = "role";
    pub const TARGET: &'static str = "target";
    pub const ID: &'static str = "id";
    pub const TYPE: &'static str = "type";
    pub const REND: &'static str = "rend";

    pub fn key(name: &str) -> String {
        format!("{}{name}", Self::PREFIX)
    }
}

/// Ordered attribute map keyed by the full prefixed name (`data_ref`).
///
/// Accessors take the bare name (`ref`) and add the prefix. Keys that do not
/// follow the convention are kept and round-tripped but are unreachable
/// through the accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&Attr::key(name)).map(String::as_str)
    }

    /// The value if present and not blank.
    pub fn get_non_blank(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.trim().is_empty())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(&Attr::key(name))
    }

    /// Sets a value; an existing key keeps its position.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(Attr::key(name), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.shift_remove(&Attr::key(name))
    }

    /// Iterates over `(prefixed key, value)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    /// Collects bare names, adding the prefix.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (Attr::key(&k.into()), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_apply_prefix() {
        let mut attrs = Attributes::new();
        attrs.set(Attr::REF, "gnd:1");
        assert_eq!(attrs.get(Attr::REF), Some("gnd:1"));
        assert_eq!(attrs.iter().next(), Some(("data_ref", "gnd:1")));
    }

    #[test]
    fn set_on_existing_key_keeps_order() {
        let mut attrs: Attributes = [("ref", "a"), ("role", "author"), ("key", "k")]
            .into_iter()
            .collect();
        attrs.set(Attr::ROLE, "scribe");
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["data_ref", "data_role", "data_key"]);
        assert_eq!(attrs.get(Attr::ROLE), Some("scribe"));
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut attrs: Attributes = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(attrs.remove("b"), Some("2".to_string()));
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["data_a", "data_c"]);
    }

    #[test]
    fn blank_values_are_not_non_blank() {
        let attrs: Attributes = [("ref", "  ")].into_iter().collect();
        assert!(attrs.contains(Attr::REF));
        assert_eq!(attrs.get_non_blank(Attr::REF), None);
    }
}
