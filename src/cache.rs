//! Per-instance loaded-relation cache

use indexmap::IndexMap;
use serde_json::Value;

/// Store of materialized relation values owned by one model instance
///
/// Value resolution consults the cache before anything else, so each relation
/// is materialized at most once per instance. The cache is mutated only
/// through `&mut` access; nothing here is shared.
///
/// # Examples
///
/// ```
/// use dynamic_relations::RelationCache;
/// use serde_json::json;
///
/// let mut cache = RelationCache::new();
/// cache.set("comments", json!([{"id": 1}]));
///
/// assert!(cache.is_loaded("comments"));
/// assert_eq!(cache.get("comments"), Some(&json!([{"id": 1}])));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RelationCache {
	loaded: IndexMap<String, Value>,
}

impl RelationCache {
	/// Create an empty cache
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether `name` holds a materialized value
	pub fn is_loaded(&self, name: &str) -> bool {
		self.loaded.contains_key(name)
	}

	/// Materialized value stored under `name`
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.loaded.get(name)
	}

	/// Store a materialized value under `name`, replacing any previous one
	pub fn set(&mut self, name: impl Into<String>, value: Value) {
		self.loaded.insert(name.into(), value);
	}

	/// Drop the value stored under `name`, returning it if present
	pub fn unset(&mut self, name: &str) -> Option<Value> {
		self.loaded.shift_remove(name)
	}

	/// Drop every cached value
	pub fn clear(&mut self) {
		self.loaded.clear();
	}

	/// Names with materialized values, in insertion order
	pub fn loaded_names(&self) -> impl Iterator<Item = &str> {
		self.loaded.keys().map(String::as_str)
	}

	/// Number of cached relations
	pub fn len(&self) -> usize {
		self.loaded.len()
	}

	/// Whether the cache is empty
	pub fn is_empty(&self) -> bool {
		self.loaded.is_empty()
	}
}
