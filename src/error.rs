//! Error types for dynamic relation resolution

use thiserror::Error;

/// Error type for relation resolution
#[derive(Debug, Error)]
pub enum RelationError {
	/// Requested name is not dynamic, not cached, and matches no relation method
	#[error("Call to undefined relationship '{0}'")]
	NotFound(String),

	/// A relation method returned something other than a relation descriptor
	#[error("Relationship method '{relation}' must return a relation descriptor")]
	InvalidRelationshipContract {
		/// Name of the offending relation method
		relation: String,
	},

	/// Failure raised by the host while constructing or executing a relation
	///
	/// Unrecognized entity identifiers and query failures surface here
	/// untouched; nothing is retried.
	#[error(transparent)]
	Host(#[from] anyhow::Error),
}

/// Result type for relation resolution operations
pub type RelationResult<T> = Result<T, RelationError>;
