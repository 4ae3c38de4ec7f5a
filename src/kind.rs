//! Relationship kind enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of relationship between two models
///
/// Names the relationship-construction operation the host model runs when a
/// dynamic relation is dispatched. The default kind, used whenever a relation
/// has no entry in the kind-override table, is [`RelationKind::HasMany`].
///
/// # Examples
///
/// ```
/// use dynamic_relations::RelationKind;
///
/// assert_eq!(RelationKind::default(), RelationKind::HasMany);
/// assert_eq!(RelationKind::BelongsTo.as_str(), "belongs_to");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
	/// One related record, foreign key on the related model
	HasOne,
	/// Many related records, foreign key on the related model
	#[default]
	HasMany,
	/// The declaring model holds the foreign key
	BelongsTo,
	/// Many-to-many through a junction table
	ManyToMany,
}

impl RelationKind {
	/// Stable identifier used in configuration tables and log output
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::HasOne => "has_one",
			Self::HasMany => "has_many",
			Self::BelongsTo => "belongs_to",
			Self::ManyToMany => "many_to_many",
		}
	}

	/// Whether the relationship resolves to a collection rather than a
	/// single record
	pub const fn is_collection(self) -> bool {
		matches!(self, Self::HasMany | Self::ManyToMany)
	}
}

impl fmt::Display for RelationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
