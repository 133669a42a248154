//! Source-tree traversal, validation and the static API builder.
//!
//! The validator and the builder walk the same two kind-rooted directory
//! trees (`src/blocks`, `src/templates`); the shared walker lives in
//! [`walk`]. Both are resilient: one bad record never stops the walk over
//! its siblings.

pub mod builder;
pub mod templates;
pub mod validate;
pub mod walk;

pub use builder::{ApiBuilder, BuildConfig, BuildError, BuildResult};
pub use validate::{validate_tree, ValidationReport};
pub use walk::{load_record, load_value, walk_kind, RecordEntry, RecordError};
