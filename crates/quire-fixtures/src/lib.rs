//! quire-fixtures
//!
//! Builders for theme documents used by the test suites, and the shallow
//! dictionary merge they are built on.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use serde_json::{Map, Value, json};

/// Shallow merge of key/value collections.
///
/// ```
/// use std::collections::HashMap;
/// use quire_fixtures::Merge;
///
/// let base = HashMap::from([("a", "foo")]);
/// let update = HashMap::from([("a", "fee"), ("b", "foo")]);
///
/// let merged = base.merged(update);
/// assert_eq!(merged, HashMap::from([("a", "fee"), ("b", "foo")]));
/// ```
pub trait Merge: Sized {
    /// Insert every entry of `other` into `self`, replacing values under
    /// keys that already exist.
    fn merge(&mut self, other: Self);

    /// `self` with `other` merged over it.
    fn merged(mut self, other: Self) -> Self {
        self.merge(other);
        self
    }
}

impl<K, V, S> Merge for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn merge(&mut self, other: Self) {
        self.extend(other);
    }
}

impl<K: Ord, V> Merge for BTreeMap<K, V> {
    fn merge(&mut self, other: Self) {
        self.extend(other);
    }
}

impl Merge for Map<String, Value> {
    fn merge(&mut self, other: Self) {
        self.extend(other);
    }
}

/// Objects merge key by key (one level deep); anything else is replaced.
impl Merge for Value {
    fn merge(&mut self, other: Self) {
        match (self, other) {
            (Value::Object(base), Value::Object(update)) => base.merge(update),
            (base, update) => *base = update,
        }
    }
}

/// A fully populated paragraph object with every field valid.
pub fn sample_paragraph() -> Map<String, Value> {
    [
        ("alignment", json!("left")),
        ("firstLineHeadIndent", json!(0)),
        ("headIndent", json!(0)),
        ("tailIndent", json!(0)),
        ("lineBreakMode", json!("wordWrapping")),
        ("maximumLineHeight", json!(10)),
        ("minimumLineHeight", json!(10)),
        ("lineHeightMultiple", json!(2)),
        ("lineSpacing", json!(12)),
        ("paragraphSpacing", json!(24)),
        ("paragraphSpacingBefore", json!(32)),
        ("writingDirection", json!("natural")),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect()
}

/// Wrap a paragraph object as `{"defaults": {"paragraph": ...}}`.
pub fn theme_document(paragraph: Map<String, Value>) -> Value {
    json!({ "defaults": { "paragraph": paragraph } })
}

/// The sample paragraph with `overrides` merged over it, as a full document.
pub fn sample_document(overrides: Map<String, Value>) -> Value {
    theme_document(sample_paragraph().merged(overrides))
}

/// The sample document with a single field replaced.
pub fn sample_document_with(key: &str, value: impl Into<Value>) -> Value {
    let mut overrides = Map::new();
    overrides.insert(key.to_string(), value.into());
    sample_document(overrides)
}
