//! Dynamic relation dispatch and interception
//!
//! `DynamicRelations` is the entry point a host wires its unknown-name
//! fallbacks into: [`call`](DynamicRelations::call) for unknown method calls
//! and [`get`](DynamicRelations::get) for unknown property reads. Dynamic
//! names are dispatched through the host's relationship construction; other
//! names fall back to the instance's relation cache and ordinary relation
//! methods, and resolved values are materialized at most once per instance.

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::RelationConfig;
use crate::error::{RelationError, RelationResult};
use crate::model::Model;
use crate::relation::{MethodValue, Relation};
use crate::resolver::RelationResolver;

/// Dispatch proxy and interception entry points for one model type
///
/// Composes a [`RelationResolver`] and drives the host [`Model`] contract.
/// Concrete model types hold one `DynamicRelations` per type configuration;
/// instances only carry their own [`RelationCache`](crate::RelationCache).
#[derive(Debug, Clone)]
pub struct DynamicRelations {
	resolver: RelationResolver,
}

impl DynamicRelations {
	/// Create an accessor over the given configuration
	pub fn new(config: RelationConfig) -> Self {
		Self {
			resolver: RelationResolver::new(config),
		}
	}

	/// The name resolver backing this accessor
	pub fn resolver(&self) -> &RelationResolver {
		&self.resolver
	}

	/// Unknown-method-call interception
	///
	/// A fixed set of introspection helper names (`has_dynamic_relation`,
	/// `dynamic_relation_kind`, `dynamic_relation_key`,
	/// `dynamic_relation_target`, each taking the relation name as first
	/// argument) is answered directly from the resolver. Every other name
	/// goes through [`relation`](Self::relation) dispatch.
	pub fn call<M: Model>(
		&self,
		model: &mut M,
		name: &str,
		args: &[Value],
	) -> RelationResult<MethodValue> {
		if let Some(answer) = self.introspect(name, args) {
			return Ok(MethodValue::Value(answer));
		}
		self.relation(model, name)
	}

	/// Unknown-property-read interception
	///
	/// Dynamic names resolve through [`relation_value`](Self::relation_value);
	/// any other name yields `Ok(None)` so the host can fall back to its
	/// default attribute resolution.
	pub fn get<M: Model>(&self, model: &mut M, name: &str) -> RelationResult<Option<Value>> {
		if self.is_dynamic_name(name) {
			self.relation_value(model, name)
		} else {
			Ok(None)
		}
	}

	/// Whether `name`, after alias translation, is registered as dynamic
	pub fn is_dynamic_name(&self, name: &str) -> bool {
		self.resolver.is_dynamic(self.resolver.translate_name(name))
	}

	/// Dispatch a requested relation name, possibly an alias
	///
	/// Dynamic names return a freshly built descriptor. Non-dynamic names
	/// fall back to the instance's relation cache, then to an ordinary
	/// relation method of that exact name; when neither applies the name is
	/// undefined.
	pub fn relation<M: Model>(&self, model: &mut M, name: &str) -> RelationResult<MethodValue> {
		if self.is_dynamic_name(name) {
			return Ok(MethodValue::Relation(self.build_dynamic(model, name)?));
		}
		if model.relation_loaded(name) {
			trace!(relation = name, "relation cache hit");
			let value = model.relations().get(name).cloned().unwrap_or(Value::Null);
			return Ok(MethodValue::Value(value));
		}
		match self.materialize_from_method(model, name)? {
			Some(value) => Ok(MethodValue::Value(value)),
			None => Err(RelationError::NotFound(name.to_string())),
		}
	}

	/// Resolve a relation name to its materialized value
	///
	/// The value is computed at most once per instance: a cache hit returns
	/// the stored value without re-invoking relationship construction.
	/// `Ok(None)` means the name is neither dynamic nor an ordinary relation
	/// method, mirroring the host's behavior for unresolved attributes.
	pub fn relation_value<M: Model>(
		&self,
		model: &mut M,
		name: &str,
	) -> RelationResult<Option<Value>> {
		if let Some(value) = model.relations().get(name) {
			trace!(relation = name, "relation cache hit");
			return Ok(Some(value.clone()));
		}
		if self.is_dynamic_name(name) {
			let descriptor = self.build_dynamic(model, name)?;
			return self.materialize(model, name, descriptor).map(Some);
		}
		self.materialize_from_method(model, name)
	}

	/// Build the descriptor for a dynamic relation
	///
	/// Target entity and key resolve against the canonical name; the kind
	/// lookup keeps the requested name so a kind override declared for an
	/// alias still wins.
	fn build_dynamic<M: Model>(&self, model: &M, name: &str) -> RelationResult<Box<dyn Relation>> {
		let canonical = self.resolver.translate_name(name);
		let kind = self.resolver.relation_kind(name);
		let target = self.resolver.target_entity(canonical);
		let key = self.resolver.relation_key(canonical);
		debug!(
			relation = name,
			canonical,
			kind = kind.as_str(),
			target_entity = %target,
			key,
			"building dynamic relation"
		);
		model.build_relation(kind, &target, key)
	}

	/// Resolve an ordinary relation method, the non-proxy path
	///
	/// `Ok(None)` when the model defines no method of that name.
	fn materialize_from_method<M: Model>(
		&self,
		model: &mut M,
		name: &str,
	) -> RelationResult<Option<Value>> {
		let Some(result) = model.call_relation_method(name) else {
			return Ok(None);
		};
		match result? {
			MethodValue::Relation(descriptor) => {
				self.materialize(model, name, descriptor).map(Some)
			}
			MethodValue::Value(_) => Err(RelationError::InvalidRelationshipContract {
				relation: name.to_string(),
			}),
		}
	}

	/// Execute a descriptor and store the result in the relation cache
	fn materialize<M: Model>(
		&self,
		model: &mut M,
		name: &str,
		descriptor: Box<dyn Relation>,
	) -> RelationResult<Value> {
		let results = descriptor.get_results()?;
		debug!(
			relation = name,
			kind = descriptor.kind().as_str(),
			"materialized relation"
		);
		model.relations_mut().set(name, results.clone());
		Ok(results)
	}

	/// Answer a relation-introspection helper by name
	///
	/// `None` when `name` is not one of the fixed helper set.
	fn introspect(&self, name: &str, args: &[Value]) -> Option<Value> {
		let relation = args.first().and_then(Value::as_str).unwrap_or_default();
		match name {
			"has_dynamic_relation" => Some(Value::Bool(self.is_dynamic_name(relation))),
			"dynamic_relation_kind" => Some(Value::String(
				self.resolver.relation_kind(relation).as_str().to_string(),
			)),
			"dynamic_relation_key" => Some(Value::String(
				self.resolver
					.relation_key(self.resolver.translate_name(relation))
					.to_string(),
			)),
			"dynamic_relation_target" => Some(Value::String(
				self.resolver
					.target_entity(self.resolver.translate_name(relation)),
			)),
			_ => None,
		}
	}
}
