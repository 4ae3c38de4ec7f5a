//! Per-model relation configuration tables
//!
//! Relation configuration is an explicit value object composed into each
//! concrete model type, not inherited static state. A model declares which
//! relation names resolve dynamically and, per relation, may override the
//! foreign key, the relationship kind, the target entity and the name a
//! caller uses to reach it. Unset entries fall back to documented defaults.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::kind::RelationKind;

/// Default namespace qualifying derived target entity names
pub const DEFAULT_NAMESPACE: &str = "app";

fn default_namespace() -> String {
	DEFAULT_NAMESPACE.to_string()
}

/// Declarative relation tables for one model type
///
/// No validation is performed on table contents; an unknown entity
/// identifier or key name only surfaces when the host later fails to
/// construct the relationship.
///
/// # Examples
///
/// ```
/// use dynamic_relations::{RelationConfig, RelationKind};
///
/// let config = RelationConfig::new("Post")
///     .dynamic_relations(["comments", "user_languages"])
///     .rename("languages", "user_languages")
///     .kind_override("author", RelationKind::BelongsTo)
///     .key_override("comments", "post_uuid");
///
/// assert!(config.dynamic_relations.contains("comments"));
/// assert_eq!(config.renames["languages"], "user_languages");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationConfig {
	/// Model type name; the default foreign key is derived from it
	pub model_name: String,

	/// Namespace prepended to derived target entity names, as
	/// `namespace.ModelName`. Derived names stay unqualified when empty.
	#[serde(default = "default_namespace")]
	pub namespace: String,

	/// Registry of relation names resolved dynamically, matched exactly
	#[serde(default)]
	pub dynamic_relations: IndexSet<String>,

	/// Per-relation foreign key overrides
	#[serde(default)]
	pub key_overrides: IndexMap<String, String>,

	/// Per-relation relationship kind overrides
	#[serde(default)]
	pub kind_overrides: IndexMap<String, RelationKind>,

	/// Per-relation target entity overrides
	#[serde(default)]
	pub target_overrides: IndexMap<String, String>,

	/// Alias to canonical relation name rewrites
	#[serde(default)]
	pub renames: IndexMap<String, String>,
}

impl RelationConfig {
	/// Create an empty configuration for the named model type
	pub fn new(model_name: impl Into<String>) -> Self {
		Self {
			model_name: model_name.into(),
			namespace: default_namespace(),
			dynamic_relations: IndexSet::new(),
			key_overrides: IndexMap::new(),
			kind_overrides: IndexMap::new(),
			target_overrides: IndexMap::new(),
			renames: IndexMap::new(),
		}
	}

	/// Set the namespace used to qualify derived target entity names
	///
	/// # Examples
	///
	/// ```
	/// use dynamic_relations::RelationConfig;
	///
	/// let config = RelationConfig::new("Post").namespace("blog");
	/// assert_eq!(config.namespace, "blog");
	/// ```
	pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = namespace.into();
		self
	}

	/// Register a single relation name as dynamic
	pub fn dynamic_relation(mut self, name: impl Into<String>) -> Self {
		self.dynamic_relations.insert(name.into());
		self
	}

	/// Register several relation names as dynamic
	pub fn dynamic_relations<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.dynamic_relations.extend(names.into_iter().map(Into::into));
		self
	}

	/// Override the foreign key used for one relation
	pub fn key_override(mut self, name: impl Into<String>, key: impl Into<String>) -> Self {
		self.key_overrides.insert(name.into(), key.into());
		self
	}

	/// Override the relationship kind used for one relation
	pub fn kind_override(mut self, name: impl Into<String>, kind: RelationKind) -> Self {
		self.kind_overrides.insert(name.into(), kind);
		self
	}

	/// Override the target entity identifier for one relation
	pub fn target_override(mut self, name: impl Into<String>, entity: impl Into<String>) -> Self {
		self.target_overrides.insert(name.into(), entity.into());
		self
	}

	/// Rewrite `alias` to `canonical` when callers request it
	pub fn rename(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
		self.renames.insert(alias.into(), canonical.into());
		self
	}
}
