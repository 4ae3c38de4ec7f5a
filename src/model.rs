//! Host model contract

use crate::cache::RelationCache;
use crate::error::RelationResult;
use crate::kind::RelationKind;
use crate::relation::{MethodValue, Relation};

/// Contract a host model type fulfils so its relations can be resolved
/// dynamically
///
/// The resolution layer never executes queries itself; everything that
/// touches data goes through this trait. `build_relation` is the generic
/// relationship-construction operation named by kind, and
/// `call_relation_method` stands in for "a method of that exact name exists
/// on the model": instead of reflective method lookup, a model answers by
/// name and returns `None` for names it does not define.
pub trait Model {
	/// Build a relation descriptor joining `target_entity` on `key`, using
	/// the construction operation named by `kind`
	///
	/// Errors raised by the host's entity machinery (an unregistered target,
	/// a failed connection) pass through the resolution layer untouched.
	fn build_relation(
		&self,
		kind: RelationKind,
		target_entity: &str,
		key: &str,
	) -> RelationResult<Box<dyn Relation>>;

	/// Invoke the ordinary relation method named `name`, if this model
	/// defines one
	///
	/// `None` means no such method exists; the caller then falls back to its
	/// own default behavior.
	fn call_relation_method(&self, name: &str) -> Option<RelationResult<MethodValue>>;

	/// Loaded-relation cache for this instance
	fn relations(&self) -> &RelationCache;

	/// Mutable access to the loaded-relation cache
	fn relations_mut(&mut self) -> &mut RelationCache;

	/// Whether `name` is already materialized in the relation cache
	fn relation_loaded(&self, name: &str) -> bool {
		self.relations().is_loaded(name)
	}
}
