//! Record types and the declarative schema validator.
//!
//! Blocks and templates share one structural shape and differ only in their
//! category enumeration, so both are expressed as `Record<C>`. Validation is
//! a pure function over an already-parsed JSON value: it collects every field
//! issue (path plus reason) before giving up, rather than failing on the
//! first, and on success narrows the value to the typed record.

use std::fmt;

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::categories::{BlockCategory, Category, TemplateCategory};

/// Authorship and revision metadata carried by every record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub author: String,
    /// RFC 3339 creation timestamp.
    pub created: String,
    /// RFC 3339 last-update timestamp. Expected to be >= `created`, but not
    /// enforced.
    pub updated: String,
    pub version: String,
}

/// A single content record, generic over its category enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<C> {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: C,
    pub tags: Vec<String>,
    /// Relative path to the preview image, set by the preview generator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    pub metadata: Metadata,
}

/// A reusable UI component record.
pub type Block = Record<BlockCategory>;

/// A complete page record.
pub type Template = Record<TemplateCategory>;

/// One field-level validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Dotted field path, e.g. `metadata.created` or `tags[2]`.
    pub path: String,
    pub reason: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.reason)
        } else {
            write!(f, "{}: {}", self.path, self.reason)
        }
    }
}

/// The full set of issues found while validating one record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", summarize(.issues))]
pub struct SchemaError {
    pub issues: Vec<Issue>,
}

fn summarize(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(Issue::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl SchemaError {
    fn single(path: &str, reason: impl Into<String>) -> Self {
        Self {
            issues: vec![Issue {
                path: path.to_string(),
                reason: reason.into(),
            }],
        }
    }
}

const RECORD_FIELDS: &[&str] = &[
    "id",
    "name",
    "description",
    "category",
    "tags",
    "preview",
    "metadata",
];
const METADATA_FIELDS: &[&str] = &["author", "created", "updated", "version"];

/// Validate a parsed JSON value against the record schema for category
/// enumeration `C`. Pure and side-effect free; never panics on malformed
/// input.
pub fn validate_record<C: Category>(value: &Value) -> Result<Record<C>, SchemaError> {
    let Some(obj) = value.as_object() else {
        return Err(SchemaError::single("", "expected a JSON object"));
    };

    let mut issues = Vec::new();

    for key in obj.keys() {
        if !RECORD_FIELDS.contains(&key.as_str()) {
            issues.push(Issue {
                path: key.clone(),
                reason: "unknown field".to_string(),
            });
        }
    }

    check_string(obj, "id", &mut issues);
    check_string(obj, "name", &mut issues);
    check_string(obj, "description", &mut issues);

    match obj.get("category") {
        None => issues.push(missing("category")),
        Some(Value::String(s)) => {
            if C::parse(s).is_none() {
                let allowed = C::all()
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                issues.push(Issue {
                    path: "category".to_string(),
                    reason: format!("must be one of: {allowed}"),
                });
            }
        }
        Some(_) => issues.push(not_a_string("category")),
    }

    match obj.get("tags") {
        None => issues.push(missing("tags")),
        Some(Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                if !item.is_string() {
                    issues.push(Issue {
                        path: format!("tags[{i}]"),
                        reason: "expected a string".to_string(),
                    });
                }
            }
        }
        Some(_) => issues.push(Issue {
            path: "tags".to_string(),
            reason: "expected an array of strings".to_string(),
        }),
    }

    if let Some(preview) = obj.get("preview") {
        if !preview.is_string() {
            issues.push(not_a_string("preview"));
        }
    }

    match obj.get("metadata") {
        None => issues.push(missing("metadata")),
        Some(Value::Object(meta)) => {
            for key in meta.keys() {
                if !METADATA_FIELDS.contains(&key.as_str()) {
                    issues.push(Issue {
                        path: format!("metadata.{key}"),
                        reason: "unknown field".to_string(),
                    });
                }
            }
            check_meta_string(meta, "author", &mut issues);
            check_meta_string(meta, "version", &mut issues);
            check_timestamp(meta, "created", &mut issues);
            check_timestamp(meta, "updated", &mut issues);
        }
        Some(_) => issues.push(Issue {
            path: "metadata".to_string(),
            reason: "expected an object".to_string(),
        }),
    }

    if !issues.is_empty() {
        return Err(SchemaError { issues });
    }

    // Every field shape has been checked, so deserialization can only fail
    // on something the checks above missed; surface that as a schema issue
    // rather than panicking.
    serde_json::from_value(value.clone()).map_err(|e| SchemaError::single("", e.to_string()))
}

/// Validate a parsed JSON value as a block record.
pub fn validate_block(value: &Value) -> Result<Block, SchemaError> {
    validate_record::<BlockCategory>(value)
}

/// Validate a parsed JSON value as a template record.
pub fn validate_template(value: &Value) -> Result<Template, SchemaError> {
    validate_record::<TemplateCategory>(value)
}

fn missing(field: &str) -> Issue {
    Issue {
        path: field.to_string(),
        reason: "missing required field".to_string(),
    }
}

fn not_a_string(field: &str) -> Issue {
    Issue {
        path: field.to_string(),
        reason: "expected a string".to_string(),
    }
}

fn check_string(obj: &serde_json::Map<String, Value>, field: &str, issues: &mut Vec<Issue>) {
    match obj.get(field) {
        None => issues.push(missing(field)),
        Some(Value::String(_)) => {}
        Some(_) => issues.push(not_a_string(field)),
    }
}

fn check_meta_string(meta: &serde_json::Map<String, Value>, field: &str, issues: &mut Vec<Issue>) {
    match meta.get(field) {
        None => issues.push(missing_meta(field)),
        Some(Value::String(_)) => {}
        Some(_) => issues.push(Issue {
            path: format!("metadata.{field}"),
            reason: "expected a string".to_string(),
        }),
    }
}

fn check_timestamp(meta: &serde_json::Map<String, Value>, field: &str, issues: &mut Vec<Issue>) {
    match meta.get(field) {
        None => issues.push(missing_meta(field)),
        Some(Value::String(s)) => {
            if DateTime::parse_from_rfc3339(s).is_err() {
                issues.push(Issue {
                    path: format!("metadata.{field}"),
                    reason: "not a valid RFC 3339 timestamp".to_string(),
                });
            }
        }
        Some(_) => issues.push(Issue {
            path: format!("metadata.{field}"),
            reason: "expected a string".to_string(),
        }),
    }
}

fn missing_meta(field: &str) -> Issue {
    Issue {
        path: format!("metadata.{field}"),
        reason: "missing required field".to_string(),
    }
}
