//! # Dynamic Relations
//!
//! Configuration-driven relation resolution for ORM-style models.
//!
//! Instead of one handwritten accessor per relationship, a model declares its
//! relation names in per-type configuration tables and resolves them at
//! runtime by name lookup:
//!
//! - **Configuration tables** ([`RelationConfig`]): the dynamic-name
//!   registry plus per-relation overrides for foreign key, relationship
//!   kind, target entity, and caller-facing aliases
//! - **Name resolution** ([`RelationResolver`]): alias rewriting and
//!   derivation of target entity (`namespace.Singular`) and default foreign
//!   key (`snake_case(model) + "_id"`)
//! - **Dispatch and interception** ([`DynamicRelations`]): unknown-method
//!   and unknown-property entry points that route dynamic names through the
//!   host's relationship construction
//! - **At-most-once materialization** ([`RelationCache`]): resolved values
//!   are stored per instance and never recomputed
//!
//! The crate layers on a host [`Model`] contract and never executes queries
//! itself; relationship construction and data fetching stay with the host.
//!
//! ## Quick Start
//!
//! ```
//! use dynamic_relations::{
//!     DynamicRelations, MethodValue, Model, Relation, RelationCache, RelationConfig,
//!     RelationKind, RelationResult,
//! };
//! use serde_json::{Value, json};
//!
//! struct HasManyComments {
//!     target: String,
//!     key: String,
//! }
//!
//! impl Relation for HasManyComments {
//!     fn kind(&self) -> RelationKind {
//!         RelationKind::HasMany
//!     }
//!     fn target_entity(&self) -> &str {
//!         &self.target
//!     }
//!     fn key(&self) -> &str {
//!         &self.key
//!     }
//!     fn get_results(&self) -> RelationResult<Value> {
//!         Ok(json!([{"id": 1, "body": "first!"}]))
//!     }
//! }
//!
//! struct Post {
//!     relations: RelationCache,
//! }
//!
//! impl Model for Post {
//!     fn build_relation(
//!         &self,
//!         _kind: RelationKind,
//!         target_entity: &str,
//!         key: &str,
//!     ) -> RelationResult<Box<dyn Relation>> {
//!         Ok(Box::new(HasManyComments {
//!             target: target_entity.to_string(),
//!             key: key.to_string(),
//!         }))
//!     }
//!     fn call_relation_method(&self, _name: &str) -> Option<RelationResult<MethodValue>> {
//!         None
//!     }
//!     fn relations(&self) -> &RelationCache {
//!         &self.relations
//!     }
//!     fn relations_mut(&mut self) -> &mut RelationCache {
//!         &mut self.relations
//!     }
//! }
//!
//! let accessor = DynamicRelations::new(RelationConfig::new("Post").dynamic_relation("comments"));
//! let mut post = Post {
//!     relations: RelationCache::new(),
//! };
//!
//! let comments = accessor.get(&mut post, "comments").unwrap().unwrap();
//! assert_eq!(comments, json!([{"id": 1, "body": "first!"}]));
//! assert!(post.relation_loaded("comments"));
//! ```

pub mod accessor;
pub mod cache;
pub mod config;
pub mod error;
pub mod inflection;
pub mod kind;
pub mod model;
pub mod relation;
pub mod resolver;

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::accessor::DynamicRelations;
	pub use crate::cache::RelationCache;
	pub use crate::config::RelationConfig;
	pub use crate::error::{RelationError, RelationResult};
	pub use crate::kind::RelationKind;
	pub use crate::model::Model;
	pub use crate::relation::{MethodValue, Relation};
	pub use crate::resolver::RelationResolver;
}

pub use accessor::DynamicRelations;
pub use cache::RelationCache;
pub use config::{DEFAULT_NAMESPACE, RelationConfig};
pub use error::{RelationError, RelationResult};
pub use kind::RelationKind;
pub use model::Model;
pub use relation::{MethodValue, Relation};
pub use resolver::RelationResolver;
