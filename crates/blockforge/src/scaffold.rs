//! Record scaffolding.
//!
//! Creates a new record's on-disk directory: `{category}/{id}/{id}.json`
//! with default metadata plus an HTML stub. Anything the caller did not
//! supply (kind, name, category) is obtained through the [`Prompter`]
//! capability.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use blockforge_schema::{derive_id, BlockCategory, Category, RecordKind, TemplateCategory};

use crate::prompt::Prompter;

/// Caller-supplied inputs; missing fields are prompted for.
#[derive(Debug, Default)]
pub struct ScaffoldRequest {
    pub kind: Option<RecordKind>,
    pub name: Option<String>,
    pub category: Option<String>,
}

/// What was written where.
#[derive(Debug)]
pub struct ScaffoldOutcome {
    pub kind: RecordKind,
    pub id: String,
    pub dir: PathBuf,
    pub json_path: PathBuf,
    pub html_path: PathBuf,
}

/// Create a new record under `source_dir`. Returns `None` when the user
/// declines to overwrite an existing record.
///
/// An explicitly supplied category outside the kind's enumeration is a fatal
/// error; the interactive picker only ever offers valid choices.
pub fn scaffold(
    source_dir: &Path,
    author: &str,
    version: &str,
    request: ScaffoldRequest,
    prompter: &mut dyn Prompter,
) -> Result<Option<ScaffoldOutcome>> {
    let kind = match request.kind {
        Some(kind) => kind,
        None => {
            let options = vec![
                "Block (reusable component)".to_string(),
                "Template (complete page)".to_string(),
            ];
            match prompter.select("What would you like to create?", &options)? {
                0 => RecordKind::Block,
                _ => RecordKind::Template,
            }
        }
    };

    let name = match request.name {
        Some(name) => name,
        None => prompter.input("Enter the name:")?,
    };

    let (values, labels) = category_choices(kind);
    let category = match request.category {
        Some(category) => {
            if !values.contains(&category.as_str()) {
                anyhow::bail!(
                    "Invalid category: {category}. Valid {} categories: {}",
                    kind,
                    values.join(", ")
                );
            }
            category
        }
        None => {
            let index = prompter.select("Select a category:", &labels)?;
            values[index].to_string()
        }
    };

    let id = derive_id(&name);
    if id.is_empty() {
        anyhow::bail!("Name must contain at least one alphanumeric character");
    }

    let dir = source_dir.join(kind.dir_name()).join(&category).join(&id);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let json_path = dir.join(format!("{id}.json"));
    if json_path.exists() {
        let overwrite = prompter.confirm(
            &format!("{} \"{id}\" already exists. Overwrite?", kind.display_name()),
            false,
        )?;
        if !overwrite {
            tracing::info!("Operation cancelled");
            return Ok(None);
        }
    }

    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let record = json!({
        "id": id,
        "name": name,
        "description": format!("{name} {kind}"),
        "category": category,
        "tags": ["new"],
        "metadata": {
            "author": author,
            "created": now,
            "updated": now,
            "version": version,
        }
    });

    fs::write(&json_path, serde_json::to_string_pretty(&record)?)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;

    let html_path = dir.join(format!("{id}.html"));
    fs::write(&html_path, html_stub(kind, &name, &id))
        .with_context(|| format!("Failed to write {}", html_path.display()))?;

    Ok(Some(ScaffoldOutcome {
        kind,
        id,
        dir,
        json_path,
        html_path,
    }))
}

/// Wire values and picker labels for a kind's category enumeration.
fn category_choices(kind: RecordKind) -> (Vec<&'static str>, Vec<String>) {
    match kind {
        RecordKind::Block => (
            BlockCategory::all().iter().map(|c| c.as_str()).collect(),
            BlockCategory::all().iter().map(|c| c.label()).collect(),
        ),
        RecordKind::Template => (
            TemplateCategory::all().iter().map(|c| c.as_str()).collect(),
            TemplateCategory::all().iter().map(|c| c.label()).collect(),
        ),
    }
}

fn html_stub(kind: RecordKind, name: &str, id: &str) -> String {
    match kind {
        RecordKind::Block => format!(
            r#"<div class="{id} p-8 bg-white rounded-lg shadow-md">
  <h2 class="text-2xl font-bold text-gray-800 mb-4">{name}</h2>
  <p class="text-gray-600">Edit this HTML file to customize your block.</p>
</div>"#
        ),
        RecordKind::Template => format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{name}</title>
  <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-50 min-h-screen">
  <div class="container mx-auto px-4 py-8">
    <h1 class="text-4xl font-bold text-gray-900 mb-6">{name}</h1>
    <p class="text-xl text-gray-600">Edit this HTML file to customize your template.</p>
  </div>
</body>
</html>"#
        ),
    }
}
