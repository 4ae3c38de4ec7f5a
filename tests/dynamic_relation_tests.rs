// Dynamic relation resolution tests - mock-backed host model exercising
// dispatch, caching, alias translation and the error contracts

#[cfg(test)]
mod dynamic_relation_tests {
	use dynamic_relations::{
		DynamicRelations, MethodValue, Model, Relation, RelationCache, RelationConfig,
		RelationError, RelationKind, RelationResult,
	};
	use serde_json::{Value, json};
	use std::cell::RefCell;
	use std::collections::HashMap;
	use std::rc::Rc;

	/// Rows keyed by entity identifier, with call-count instrumentation so
	/// tests can verify relations are built and fetched at most once.
	#[derive(Default)]
	struct MockSource {
		rows: HashMap<String, Value>,
		built_relations: usize,
		fetch_calls: usize,
	}

	impl MockSource {
		fn fetch(&mut self, entity: &str) -> RelationResult<Value> {
			self.fetch_calls += 1;
			self.rows
				.get(entity)
				.cloned()
				.ok_or_else(|| anyhow::anyhow!("entity '{entity}' is not registered").into())
		}
	}

	struct MockRelation {
		source: Rc<RefCell<MockSource>>,
		kind: RelationKind,
		target: String,
		key: String,
	}

	impl Relation for MockRelation {
		fn kind(&self) -> RelationKind {
			self.kind
		}

		fn target_entity(&self) -> &str {
			&self.target
		}

		fn key(&self) -> &str {
			&self.key
		}

		fn get_results(&self) -> RelationResult<Value> {
			self.source.borrow_mut().fetch(&self.target)
		}
	}

	struct Post {
		source: Rc<RefCell<MockSource>>,
		relations: RelationCache,
	}

	impl Model for Post {
		fn build_relation(
			&self,
			kind: RelationKind,
			target_entity: &str,
			key: &str,
		) -> RelationResult<Box<dyn Relation>> {
			let mut source = self.source.borrow_mut();
			source.built_relations += 1;
			if !source.rows.contains_key(target_entity) {
				return Err(anyhow::anyhow!("entity '{target_entity}' is not registered").into());
			}
			drop(source);
			Ok(Box::new(MockRelation {
				source: Rc::clone(&self.source),
				kind,
				target: target_entity.to_string(),
				key: key.to_string(),
			}))
		}

		fn call_relation_method(&self, name: &str) -> Option<RelationResult<MethodValue>> {
			match name {
				// Ordinary named relation method, the non-dynamic fallback
				"author" => Some(
					self.build_relation(RelationKind::BelongsTo, "app.Author", "author_id")
						.map(MethodValue::Relation),
				),
				// A method that does not return a relation descriptor
				"view_count" => Some(Ok(MethodValue::Value(json!(42)))),
				_ => None,
			}
		}

		fn relations(&self) -> &RelationCache {
			&self.relations
		}

		fn relations_mut(&mut self) -> &mut RelationCache {
			&mut self.relations
		}
	}

	fn mock_source() -> Rc<RefCell<MockSource>> {
		let mut rows = HashMap::new();
		rows.insert(
			"app.Comment".to_string(),
			json!([
				{"id": 1, "body": "first"},
				{"id": 2, "body": "second"},
			]),
		);
		rows.insert(
			"app.UserLanguage".to_string(),
			json!([{"id": 7, "code": "eo"}]),
		);
		rows.insert("app.Author".to_string(), json!({"id": 3, "name": "Ada"}));
		Rc::new(RefCell::new(MockSource {
			rows,
			..MockSource::default()
		}))
	}

	fn config() -> RelationConfig {
		RelationConfig::new("Post")
			.dynamic_relations(["comments", "user_languages"])
			.rename("languages", "user_languages")
			.key_override("user_languages", "owner_id")
			.kind_override("languages", RelationKind::ManyToMany)
	}

	fn setup() -> (Rc<RefCell<MockSource>>, Post, DynamicRelations) {
		let source = mock_source();
		let post = Post {
			source: Rc::clone(&source),
			relations: RelationCache::new(),
		};
		(source, post, DynamicRelations::new(config()))
	}

	#[test]
	fn test_property_read_matches_direct_materialization() {
		let (_, mut post, accessor) = setup();

		let direct = post
			.build_relation(RelationKind::HasMany, "app.Comment", "post_id")
			.unwrap()
			.get_results()
			.unwrap();
		let resolved = accessor.get(&mut post, "comments").unwrap().unwrap();

		assert_eq!(resolved, direct);
	}

	#[test]
	fn test_repeated_reads_return_cached_value_without_reinvocation() {
		let (source, mut post, accessor) = setup();

		let first = accessor.get(&mut post, "comments").unwrap().unwrap();
		let second = accessor.get(&mut post, "comments").unwrap().unwrap();

		assert_eq!(first, second);
		assert_eq!(source.borrow().built_relations, 1);
		assert_eq!(source.borrow().fetch_calls, 1);
	}

	#[test]
	fn test_dynamic_dispatch_uses_derived_target_and_default_key() {
		let (_, mut post, accessor) = setup();

		let MethodValue::Relation(descriptor) = accessor.relation(&mut post, "comments").unwrap()
		else {
			panic!("dynamic dispatch must return a descriptor");
		};

		assert_eq!(descriptor.kind(), RelationKind::HasMany);
		assert_eq!(descriptor.target_entity(), "app.Comment");
		assert_eq!(descriptor.key(), "post_id");
	}

	#[test]
	fn test_alias_resolves_canonical_registry_target_and_key() {
		let (_, mut post, accessor) = setup();

		// "languages" itself is not in the registry; membership, target and
		// key all come from the canonical "user_languages".
		let MethodValue::Relation(descriptor) = accessor.relation(&mut post, "languages").unwrap()
		else {
			panic!("aliased dynamic dispatch must return a descriptor");
		};

		assert_eq!(descriptor.target_entity(), "app.UserLanguage");
		assert_eq!(descriptor.key(), "owner_id");
		// The kind override is keyed by the requested alias and still wins.
		assert_eq!(descriptor.kind(), RelationKind::ManyToMany);
	}

	#[test]
	fn test_alias_value_resolution_caches_under_requested_name() {
		let (_, mut post, accessor) = setup();

		let value = accessor.get(&mut post, "languages").unwrap().unwrap();
		assert_eq!(value, json!([{"id": 7, "code": "eo"}]));
		assert!(post.relation_loaded("languages"));
		assert!(!post.relation_loaded("user_languages"));
	}

	#[test]
	fn test_property_read_of_non_dynamic_name_defers_to_host() {
		let (source, mut post, accessor) = setup();

		// "author" has a relation method but is not registered as dynamic;
		// property interception leaves it to host attribute resolution.
		assert!(accessor.get(&mut post, "author").unwrap().is_none());
		assert_eq!(source.borrow().built_relations, 0);
	}

	#[test]
	fn test_value_resolution_falls_back_to_relation_method() {
		let (source, mut post, accessor) = setup();

		let author = accessor.relation_value(&mut post, "author").unwrap().unwrap();
		assert_eq!(author, json!({"id": 3, "name": "Ada"}));
		assert!(post.relation_loaded("author"));

		// Cached on the second read, no further construction.
		accessor.relation_value(&mut post, "author").unwrap().unwrap();
		assert_eq!(source.borrow().built_relations, 1);
	}

	#[test]
	fn test_value_resolution_absence_is_not_an_error() {
		let (_, mut post, accessor) = setup();

		assert!(accessor.relation_value(&mut post, "nonexistent").unwrap().is_none());
	}

	#[test]
	fn test_method_dispatch_of_unknown_name_fails_with_not_found() {
		let (_, mut post, accessor) = setup();

		let err = accessor.relation(&mut post, "bogus").unwrap_err();
		assert!(matches!(err, RelationError::NotFound(name) if name == "bogus"));
	}

	#[test]
	fn test_method_dispatch_returns_cached_value_for_loaded_name() {
		let (source, mut post, accessor) = setup();

		post.relations_mut().set("preloaded", json!(["kept"]));
		let MethodValue::Value(value) = accessor.relation(&mut post, "preloaded").unwrap() else {
			panic!("cached dispatch must return the stored value");
		};

		assert_eq!(value, json!(["kept"]));
		assert_eq!(source.borrow().built_relations, 0);
	}

	#[test]
	fn test_non_relation_method_return_violates_contract() {
		let (_, mut post, accessor) = setup();

		let err = accessor.relation_value(&mut post, "view_count").unwrap_err();
		assert!(matches!(
			err,
			RelationError::InvalidRelationshipContract { relation } if relation == "view_count"
		));
	}

	#[test]
	fn test_unregistered_target_entity_surfaces_host_error() {
		let source = mock_source();
		let mut post = Post {
			source: Rc::clone(&source),
			relations: RelationCache::new(),
		};
		let accessor = DynamicRelations::new(
			config().dynamic_relation("ghosts").target_override("ghosts", "app.Ghost"),
		);

		let err = accessor.get(&mut post, "ghosts").unwrap_err();
		assert!(matches!(err, RelationError::Host(_)));
		assert!(err.to_string().contains("app.Ghost"));
	}

	#[test]
	fn test_introspection_helpers_answer_without_dispatching() {
		let (source, mut post, accessor) = setup();

		let has = accessor
			.call(&mut post, "has_dynamic_relation", &[json!("comments")])
			.unwrap();
		assert_eq!(has.as_value(), Some(&json!(true)));

		let kind = accessor
			.call(&mut post, "dynamic_relation_kind", &[json!("languages")])
			.unwrap();
		assert_eq!(kind.as_value(), Some(&json!("many_to_many")));

		let key = accessor
			.call(&mut post, "dynamic_relation_key", &[json!("languages")])
			.unwrap();
		assert_eq!(key.as_value(), Some(&json!("owner_id")));

		let target = accessor
			.call(&mut post, "dynamic_relation_target", &[json!("languages")])
			.unwrap();
		assert_eq!(target.as_value(), Some(&json!("app.UserLanguage")));

		assert_eq!(source.borrow().built_relations, 0);
		assert_eq!(source.borrow().fetch_calls, 0);
	}

	#[test]
	fn test_call_dispatches_dynamic_names() {
		let (_, mut post, accessor) = setup();

		let result = accessor.call(&mut post, "comments", &[]).unwrap();
		assert!(result.is_relation());
	}

	#[test]
	fn test_unset_relation_is_rebuilt_on_next_read() {
		let (source, mut post, accessor) = setup();

		accessor.get(&mut post, "comments").unwrap();
		post.relations_mut().unset("comments");
		accessor.get(&mut post, "comments").unwrap();

		assert_eq!(source.borrow().built_relations, 2);
		assert_eq!(source.borrow().fetch_calls, 2);
	}
}
