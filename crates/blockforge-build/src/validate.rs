//! Whole-tree validation report.

use std::path::Path;

use blockforge_schema::{BlockCategory, Category, TemplateCategory};

use crate::walk::{load_record, walk_kind};

/// Outcome of validating every record under the source tree.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidationReport {
    /// Candidate record directories visited.
    pub total: usize,
    /// Records that parsed and passed the schema.
    pub valid: usize,
    /// One human-readable line per invalid or unreadable record.
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn invalid(&self) -> usize {
        self.total - self.valid
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Walk both kind trees and validate every record. Failures are collected,
/// never aborted on: the walk visits every candidate before reporting.
pub fn validate_tree(source_dir: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_kind::<BlockCategory>(source_dir, &mut report);
    validate_kind::<TemplateCategory>(source_dir, &mut report);
    report
}

fn validate_kind<C: Category>(source_dir: &Path, report: &mut ValidationReport) {
    for entry in walk_kind(source_dir, C::KIND) {
        report.total += 1;
        match load_record::<C>(&entry) {
            Ok(record) => {
                report.valid += 1;
                tracing::info!("{}: {}", C::KIND.display_name(), record.id);
            }
            Err(err) => {
                report
                    .errors
                    .push(format!("{} {}: {}", C::KIND.display_name(), entry.id, err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::path::Path;

    use serde_json::json;

    fn write_block(src: &Path, category: &str, id: &str) {
        let dir = src.join("blocks").join(category).join(id);
        fs::create_dir_all(&dir).unwrap();
        let record = json!({
            "id": id,
            "name": id,
            "description": "fixture",
            "category": category,
            "tags": ["new"],
            "metadata": {
                "author": "Blockforge Team",
                "created": "2025-01-01T00:00:00Z",
                "updated": "2025-01-01T00:00:00Z",
                "version": "1.0.0"
            }
        });
        fs::write(
            dir.join(format!("{id}.json")),
            serde_json::to_string_pretty(&record).unwrap(),
        )
        .unwrap();
        fs::write(dir.join(format!("{id}.html")), "<div>fixture</div>").unwrap();
    }

    fn write_template_missing_metadata(src: &Path, category: &str, id: &str) {
        let dir = src.join("templates").join(category).join(id);
        fs::create_dir_all(&dir).unwrap();
        let record = json!({
            "id": id,
            "name": id,
            "description": "fixture",
            "category": category,
            "tags": []
        });
        fs::write(
            dir.join(format!("{id}.json")),
            serde_json::to_string(&record).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn counts_valid_and_invalid_records() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path();

        write_block(src, "hero", "hero-1");
        write_template_missing_metadata(src, "blog", "my-blog");

        let report = validate_tree(src);

        assert_eq!(report.total, 2);
        assert_eq!(report.valid, 1);
        assert_eq!(report.invalid(), 1);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Template my-blog:"));
        assert!(report.errors[0].contains("metadata"));
    }

    #[test]
    fn unparsable_json_is_reported_not_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path();

        write_block(src, "hero", "hero-1");
        let broken = src.join("blocks/footer/broken");
        fs::create_dir_all(&broken).unwrap();
        fs::write(broken.join("broken.json"), "{ not json").unwrap();

        let report = validate_tree(src);

        assert_eq!(report.total, 2);
        assert_eq!(report.valid, 1);
        assert!(report.errors[0].starts_with("Block broken:"));
    }

    #[test]
    fn empty_tree_is_clean() {
        let tmp = tempfile::tempdir().unwrap();
        let report = validate_tree(tmp.path());

        assert_eq!(report.total, 0);
        assert!(report.is_clean());
    }
}
