//! Record schemas and category registry for blockforge.
//!
//! This crate is the published library surface of the blockforge content
//! repository: the `Block` and `Template` record types, their category
//! enumerations, the schema validator, slug derivation, and the URLs of the
//! hosted API collections.

pub mod categories;
pub mod record;
pub mod slug;

pub use categories::{BlockCategory, Category, RecordKind, TemplateCategory};
pub use record::{
    validate_block, validate_record, validate_template, Block, Issue, Metadata, Record,
    SchemaError, Template,
};
pub use slug::derive_id;

/// Base URL of the hosted API tree produced by `blockforge build`.
pub const API_BASE_URL: &str = "https://api.blockforge.dev/api";

/// URL of the full blocks collection.
pub fn blocks_url() -> String {
    format!("{API_BASE_URL}/blocks.json")
}

/// URL of the full templates collection.
pub fn templates_url() -> String {
    format!("{API_BASE_URL}/templates.json")
}

/// URL of the build manifest.
pub fn manifest_url() -> String {
    format!("{API_BASE_URL}/index.json")
}
