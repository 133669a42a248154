//! Shared traversal of the kind-rooted record trees.
//!
//! Canonical layout: `{source}/{blocks|templates}/{category}/{id}/` with
//! `{id}.json`, `{id}.html` and an optional `preview.png` inside each id
//! directory. The walker yields id directories only; reading and validating
//! their contents is left to the caller so the validator, builder and
//! preview generator can share one traversal.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use walkdir::WalkDir;

use blockforge_schema::{validate_record, Category, Record, RecordKind, SchemaError};

/// One candidate record directory found on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordEntry {
    pub kind: RecordKind,
    /// Category directory name as found on disk (not yet validated).
    pub category_dir: String,
    /// Id directory name.
    pub id: String,
    /// Absolute or caller-relative path of the id directory.
    pub dir: PathBuf,
}

impl RecordEntry {
    pub fn json_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.id))
    }

    pub fn html_path(&self) -> PathBuf {
        self.dir.join(format!("{}.html", self.id))
    }

    pub fn preview_path(&self) -> PathBuf {
        self.dir.join("preview.png")
    }
}

/// Walk one kind-rooted tree and return every `{category}/{id}` directory,
/// sorted by file name for deterministic output. A missing kind root yields
/// an empty list.
pub fn walk_kind(source_dir: &Path, kind: RecordKind) -> Vec<RecordEntry> {
    let root = source_dir.join(kind.dir_name());
    if !root.is_dir() {
        return Vec::new();
    }

    let mut entries = Vec::new();

    for entry in WalkDir::new(&root)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_dir() {
            continue;
        }

        let id = entry.file_name().to_string_lossy().to_string();
        let category_dir = entry
            .path()
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        entries.push(RecordEntry {
            kind,
            category_dir,
            id,
            dir: entry.path().to_path_buf(),
        });
    }

    entries
}

/// Errors from reading a single record off disk.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("unable to read JSON file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to parse JSON file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("schema violation: {0}")]
    Schema(#[from] SchemaError),
}

/// Read and parse an entry's JSON file without validating it.
pub fn load_value(entry: &RecordEntry) -> Result<Value, RecordError> {
    let content = fs::read_to_string(entry.json_path())?;
    Ok(serde_json::from_str(&content)?)
}

/// Read, parse and schema-validate an entry's JSON file.
pub fn load_record<C: Category>(entry: &RecordEntry) -> Result<Record<C>, RecordError> {
    let value = load_value(entry)?;
    Ok(validate_record::<C>(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn walks_category_and_id_levels_only() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path();

        fs::create_dir_all(src.join("blocks/hero/hero-1")).unwrap();
        fs::create_dir_all(src.join("blocks/hero/hero-2")).unwrap();
        fs::create_dir_all(src.join("blocks/pricing/basic")).unwrap();
        // Stray file at category level is not an entry.
        fs::write(src.join("blocks/hero/notes.txt"), "x").unwrap();

        let entries = walk_kind(src, RecordKind::Block);
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec!["hero-1", "hero-2", "basic"]);
        assert_eq!(entries[0].category_dir, "hero");
        assert_eq!(entries[2].category_dir, "pricing");
    }

    #[test]
    fn missing_kind_root_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(walk_kind(tmp.path(), RecordKind::Template).is_empty());
    }

    #[test]
    fn entry_paths_follow_the_id() {
        let entry = RecordEntry {
            kind: RecordKind::Block,
            category_dir: "hero".to_string(),
            id: "hero-1".to_string(),
            dir: PathBuf::from("src/blocks/hero/hero-1"),
        };

        assert!(entry.json_path().ends_with("hero-1/hero-1.json"));
        assert!(entry.html_path().ends_with("hero-1/hero-1.html"));
        assert!(entry.preview_path().ends_with("hero-1/preview.png"));
    }
}
