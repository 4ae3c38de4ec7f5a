//! Relation name resolution
//!
//! Pure lookups against one model type's configuration tables: alias
//! rewriting, dynamic-registry membership, and the foreign key, relationship
//! kind and target entity a requested name resolves to. No I/O happens here.

use once_cell::sync::OnceCell;

use crate::config::RelationConfig;
use crate::inflection;
use crate::kind::RelationKind;

/// Resolves requested relation names using the configuration tables of one
/// model type
///
/// # Examples
///
/// ```
/// use dynamic_relations::{RelationConfig, RelationResolver};
///
/// let resolver = RelationResolver::new(
///     RelationConfig::new("Post").dynamic_relation("comments"),
/// );
///
/// assert!(resolver.is_dynamic("comments"));
/// assert_eq!(resolver.target_entity("comments"), "app.Comment");
/// assert_eq!(resolver.relation_key("comments"), "post_id");
/// ```
#[derive(Debug, Clone)]
pub struct RelationResolver {
	config: RelationConfig,
	default_key: OnceCell<String>,
}

impl RelationResolver {
	/// Create a resolver over the given configuration
	pub fn new(config: RelationConfig) -> Self {
		Self {
			config,
			default_key: OnceCell::new(),
		}
	}

	/// The configuration this resolver reads from
	pub fn config(&self) -> &RelationConfig {
		&self.config
	}

	/// Rewrite a recognized alias to its canonical relation name
	///
	/// Lookup is by key in the rename table; unrecognized names pass through
	/// unchanged.
	pub fn translate_name<'a>(&'a self, name: &'a str) -> &'a str {
		self.config
			.renames
			.get(name)
			.map(String::as_str)
			.unwrap_or(name)
	}

	/// Exact-match membership test against the dynamic-relation registry
	pub fn is_dynamic(&self, name: &str) -> bool {
		self.config.dynamic_relations.contains(name)
	}

	/// Foreign key used for `name`
	///
	/// Falls back to the default key when no override is declared.
	pub fn relation_key(&self, name: &str) -> &str {
		self.config
			.key_overrides
			.get(name)
			.map(String::as_str)
			.unwrap_or_else(|| self.default_key())
	}

	/// Default foreign key, `snake_case(model_name) + "_id"`
	///
	/// Computed on first use and reused for the resolver's lifetime.
	pub fn default_key(&self) -> &str {
		self.default_key
			.get_or_init(|| format!("{}_id", inflection::snake_case(&self.config.model_name)))
	}

	/// Relationship kind used for `name`
	///
	/// Falls back to [`RelationKind::HasMany`] when no override is declared.
	pub fn relation_kind(&self, name: &str) -> RelationKind {
		self.config
			.kind_overrides
			.get(name)
			.copied()
			.unwrap_or_default()
	}

	/// Target entity identifier for `name`
	///
	/// An override wins outright; otherwise the name is derived as the
	/// singularized PascalCase form of the relation name, qualified by the
	/// configured namespace when one is set.
	pub fn target_entity(&self, name: &str) -> String {
		if let Some(target) = self.config.target_overrides.get(name) {
			return target.clone();
		}
		let derived = inflection::singularize(&inflection::pascal_case(name));
		if self.config.namespace.is_empty() {
			derived
		} else {
			format!("{}.{derived}", self.config.namespace)
		}
	}
}
