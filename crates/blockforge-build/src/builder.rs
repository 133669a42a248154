//! Static API tree builder.
//!
//! Re-walks both kind trees exactly as the validator does, mirrors every
//! structurally valid record into the output API tree, and emits the
//! aggregate collections, the manifest, and the landing page. Invalid or
//! unreadable records are logged and excluded; both kinds use the same
//! log-and-continue policy.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;

use blockforge_schema::{BlockCategory, Category, Record, TemplateCategory};

use crate::templates::{IndexContext, TemplateEngine};
use crate::walk::{load_record, walk_kind};

/// Configuration for building the API tree.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Source records directory
    pub source_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Title for the landing page
    pub site_title: String,

    /// Version string written to the manifest
    pub version: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src"),
            output_dir: PathBuf::from("dist"),
            site_title: "Blockforge".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Blocks written to the collection
    pub blocks: usize,

    /// Templates written to the collection
    pub templates: usize,

    /// Records skipped as invalid or unreadable
    pub skipped: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to render landing page: {0}")]
    Template(#[from] minijinja::Error),
}

/// Manifest written to `api/index.json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    blocks: usize,
    templates: usize,
    last_updated: String,
    version: String,
    api_structure: ApiStructure,
}

#[derive(Debug, Serialize)]
struct ApiStructure {
    blocks: EndpointSet,
    templates: EndpointSet,
}

#[derive(Debug, Serialize)]
struct EndpointSet {
    collection: String,
    individual: String,
    html: String,
    preview: String,
}

impl EndpointSet {
    fn for_kind(dir: &str) -> Self {
        Self {
            collection: format!("/api/{dir}.json"),
            individual: format!("/api/{dir}/{{category}}/{{id}}.json"),
            html: format!("/api/{dir}/{{category}}/{{id}}.html"),
            preview: format!("/api/{dir}/{{category}}/{{id}}-preview.png"),
        }
    }
}

/// Static API tree builder.
pub struct ApiBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl ApiBuilder {
    /// Create a new builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the API tree.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let api_dir = self.config.output_dir.join("api");
        fs::create_dir_all(&api_dir)?;

        let mut skipped = 0;
        let blocks = self.collect_kind::<BlockCategory>(&api_dir, &mut skipped)?;
        let templates = self.collect_kind::<TemplateCategory>(&api_dir, &mut skipped)?;

        self.write_collection(&api_dir.join("blocks.json"), &blocks)?;
        self.write_collection(&api_dir.join("templates.json"), &templates)?;

        let updated = Utc::now().to_rfc3339();
        self.write_manifest(&api_dir, blocks.len(), templates.len(), &updated)?;
        self.write_landing_page(blocks.len(), templates.len(), &updated)?;

        Ok(BuildResult {
            blocks: blocks.len(),
            templates: templates.len(),
            skipped,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Walk one kind tree, mirror valid records into the API tree, and
    /// return the in-memory collection.
    fn collect_kind<C: Category>(
        &self,
        api_dir: &Path,
        skipped: &mut usize,
    ) -> Result<Vec<Record<C>>, BuildError> {
        let kind_dir = api_dir.join(C::KIND.dir_name());
        let mut records = Vec::new();

        for entry in walk_kind(&self.config.source_dir, C::KIND) {
            let record = match load_record::<C>(&entry) {
                Ok(record) => record,
                Err(err) => {
                    tracing::warn!("Skipping {} {}: {}", C::KIND, entry.id, err);
                    *skipped += 1;
                    continue;
                }
            };

            let category_dir = kind_dir.join(&entry.category_dir);
            fs::create_dir_all(&category_dir)?;

            // The source JSON is copied byte for byte so that a record
            // accepted by the validator appears unmodified in the output.
            fs::copy(
                entry.json_path(),
                category_dir.join(format!("{}.json", entry.id)),
            )?;

            let html = entry.html_path();
            if html.exists() {
                fs::copy(&html, category_dir.join(format!("{}.html", entry.id)))?;
            }

            let preview = entry.preview_path();
            if preview.exists() {
                fs::copy(
                    &preview,
                    category_dir.join(format!("{}-preview.png", entry.id)),
                )?;
            }

            tracing::info!("{}: {}", C::KIND.display_name(), record.id);
            records.push(record);
        }

        Ok(records)
    }

    fn write_collection<T: Serialize>(&self, path: &Path, records: &[T]) -> Result<(), BuildError> {
        fs::write(path, serde_json::to_string_pretty(records)?)?;
        Ok(())
    }

    fn write_manifest(
        &self,
        api_dir: &Path,
        blocks: usize,
        templates: usize,
        updated: &str,
    ) -> Result<(), BuildError> {
        let manifest = Manifest {
            blocks,
            templates,
            last_updated: updated.to_string(),
            version: self.config.version.clone(),
            api_structure: ApiStructure {
                blocks: EndpointSet::for_kind("blocks"),
                templates: EndpointSet::for_kind("templates"),
            },
        };

        fs::write(
            api_dir.join("index.json"),
            serde_json::to_string_pretty(&manifest)?,
        )?;
        Ok(())
    }

    fn write_landing_page(
        &self,
        blocks: usize,
        templates: usize,
        updated: &str,
    ) -> Result<(), BuildError> {
        let html = self.templates.render_index(&IndexContext {
            site_title: self.config.site_title.clone(),
            blocks,
            templates,
            version: self.config.version.clone(),
            updated: updated.to_string(),
        })?;

        fs::write(self.config.output_dir.join("index.html"), html)?;
        Ok(())
    }
}
