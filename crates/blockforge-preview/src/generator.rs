//! Preview batch orchestration.
//!
//! Resolves the target set (one block, one template, or everything), wraps
//! each record's HTML fragment in a minimal document shell, hands it to the
//! renderer, writes `preview.png` into the record directory, and patches the
//! record JSON to point at it. Failure on one item is logged and never
//! aborts the rest of the batch.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use blockforge_build::{walk_kind, RecordEntry};
use blockforge_schema::RecordKind;

use crate::renderer::Renderer;

/// Configuration for a preview batch.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Source records directory
    pub source_dir: PathBuf,

    /// URL of the CSS utility framework injected into the document shell
    pub css_cdn_url: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src"),
            css_cdn_url: "https://cdn.tailwindcss.com".to_string(),
        }
    }
}

/// What to generate previews for.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewTarget {
    /// One block, by id.
    Block(String),
    /// One template, by id.
    Template(String),
    /// Every record of both kinds.
    All,
}

/// Counts for a finished batch.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PreviewOutcome {
    pub generated: usize,
    pub failed: usize,
}

/// Drives a [`Renderer`] over the selected records.
pub struct PreviewGenerator<R: Renderer> {
    config: PreviewConfig,
    renderer: R,
}

impl<R: Renderer> PreviewGenerator<R> {
    pub fn new(config: PreviewConfig, renderer: R) -> Self {
        Self { config, renderer }
    }

    /// Run the batch and return the outcome counts.
    pub fn run(&mut self, target: &PreviewTarget) -> PreviewOutcome {
        let mut outcome = PreviewOutcome::default();

        match target {
            PreviewTarget::Block(id) => self.generate_one(RecordKind::Block, id, &mut outcome),
            PreviewTarget::Template(id) => {
                self.generate_one(RecordKind::Template, id, &mut outcome)
            }
            PreviewTarget::All => {
                for kind in [RecordKind::Block, RecordKind::Template] {
                    for entry in walk_kind(&self.config.source_dir, kind) {
                        self.generate(&entry, &mut outcome);
                    }
                }
            }
        }

        outcome
    }

    /// Locate a single record by id across all categories of its kind.
    fn generate_one(&mut self, kind: RecordKind, id: &str, outcome: &mut PreviewOutcome) {
        match walk_kind(&self.config.source_dir, kind)
            .into_iter()
            .find(|entry| entry.id == id)
        {
            Some(entry) => self.generate(&entry, outcome),
            None => {
                tracing::error!("{} {} not found", kind.display_name(), id);
                outcome.failed += 1;
            }
        }
    }

    fn generate(&mut self, entry: &RecordEntry, outcome: &mut PreviewOutcome) {
        let html_path = entry.html_path();
        if !html_path.exists() {
            tracing::warn!("HTML file not found: {}", html_path.display());
            outcome.failed += 1;
            return;
        }

        let fragment = match fs::read_to_string(&html_path) {
            Ok(fragment) => fragment,
            Err(err) => {
                tracing::warn!("Failed to read {}: {}", html_path.display(), err);
                outcome.failed += 1;
                return;
            }
        };

        let document = wrap_document(&fragment, &self.config.css_cdn_url);

        let png = match self.renderer.render(&document) {
            Ok(png) => png,
            Err(err) => {
                tracing::warn!(
                    "Failed to render {} {}: {}",
                    entry.kind,
                    entry.id,
                    err
                );
                outcome.failed += 1;
                return;
            }
        };

        let preview_path = entry.preview_path();
        if let Err(err) = fs::write(&preview_path, png) {
            tracing::warn!("Failed to write {}: {}", preview_path.display(), err);
            outcome.failed += 1;
            return;
        }

        if let Err(err) = patch_preview_pointer(entry) {
            tracing::warn!("Failed to update {} JSON: {}", entry.id, err);
        }

        tracing::info!("Preview generated: {}", preview_path.display());
        outcome.generated += 1;
    }
}

/// Wrap a record's HTML fragment in a minimal document shell with the CSS
/// utility framework injected.
pub fn wrap_document(fragment: &str, css_cdn_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Preview</title>
  <script src="{css_cdn_url}"></script>
</head>
<body>
{fragment}
</body>
</html>"#
    )
}

/// Set `preview: "./preview.png"` in the record's JSON file, preserving all
/// other fields.
fn patch_preview_pointer(entry: &RecordEntry) -> std::io::Result<()> {
    let json_path = entry.json_path();
    if !json_path.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(&json_path)?;
    let mut value: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        // A record with broken JSON still gets its screenshot; only the
        // pointer update is skipped.
        Err(_) => return Ok(()),
    };

    if let Some(obj) = value.as_object_mut() {
        obj.insert("preview".to_string(), Value::String("./preview.png".into()));
        fs::write(&json_path, serde_json::to_string_pretty(&value)?)?;
    }

    Ok(())
}
