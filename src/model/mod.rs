pub mod contact;
pub mod field;
pub mod ids;

// Re-exports for convenience
pub use contact::{Contact, FieldUpdate, ValidationReport};
pub use field::{Field, RelationshipKind};
pub use ids::{ContactId, IdSource, RandomIds, SequentialIds};
