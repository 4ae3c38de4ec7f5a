//! Relation descriptor contract

use serde_json::Value;

use crate::error::RelationResult;
use crate::kind::RelationKind;

/// An unexecuted relationship query produced by host relationship
/// construction
///
/// Descriptors are polymorphic over relationship kinds; the only operation
/// the resolution layer relies on is [`get_results`](Relation::get_results),
/// which runs the underlying fetch and yields the materialized value.
/// Ownership of query execution stays with the host.
pub trait Relation {
	/// Kind of relationship this descriptor represents
	fn kind(&self) -> RelationKind;

	/// Target entity identifier, e.g. `app.Comment`
	fn target_entity(&self) -> &str;

	/// Foreign/local key the relationship joins on
	fn key(&self) -> &str;

	/// Execute the underlying fetch and return the materialized value
	fn get_results(&self) -> RelationResult<Value>;
}

/// What a relation method call produced
///
/// Relation methods are expected to return a descriptor; the `Value` arm
/// carries anything else, and value resolution rejects it with
/// [`InvalidRelationshipContract`](crate::RelationError::InvalidRelationshipContract).
pub enum MethodValue {
	/// A relation descriptor ready for materialization
	Relation(Box<dyn Relation>),
	/// A plain, non-relation value
	Value(Value),
}

impl MethodValue {
	/// Whether this is a relation descriptor
	pub const fn is_relation(&self) -> bool {
		matches!(self, Self::Relation(_))
	}

	/// The plain value, when this is not a descriptor
	pub fn as_value(&self) -> Option<&Value> {
		match self {
			Self::Relation(_) => None,
			Self::Value(value) => Some(value),
		}
	}
}

impl std::fmt::Debug for MethodValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Relation(relation) => f
				.debug_struct("Relation")
				.field("kind", &relation.kind())
				.field("target_entity", &relation.target_entity())
				.field("key", &relation.key())
				.finish(),
			Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
		}
	}
}
