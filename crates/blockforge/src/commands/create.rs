//! Record creation command.

use std::time::Duration;

use anyhow::Result;

use blockforge_preview::{ChromeRenderer, PreviewConfig, PreviewGenerator, PreviewTarget};
use blockforge_schema::RecordKind;

use crate::config::ConfigFile;
use crate::prompt::{Prompter, TermPrompter};
use crate::scaffold::{scaffold, ScaffoldRequest};

/// Run the create command. `kind` is `None` for the fully interactive
/// variant and fixed for `create-block`/`create-template`.
pub async fn run(
    kind: Option<RecordKind>,
    name: Option<String>,
    category: Option<String>,
    config: &ConfigFile,
) -> Result<()> {
    let mut prompter = TermPrompter;

    let outcome = scaffold(
        &config.records.dir,
        &config.scaffold.author,
        &config.scaffold.version,
        ScaffoldRequest {
            kind,
            name,
            category,
        },
        &mut prompter,
    )?;

    let Some(outcome) = outcome else {
        // Overwrite declined; nothing was written.
        return Ok(());
    };

    tracing::info!("{} created successfully:", outcome.kind.display_name());
    tracing::info!("  Directory: {}", outcome.dir.display());
    tracing::info!("  JSON: {}", outcome.json_path.display());
    tracing::info!("  HTML: {}", outcome.html_path.display());

    if prompter.confirm("Generate preview image now?", true)? {
        tracing::info!("Generating preview...");
        generate_preview(&outcome.kind, &outcome.id, config);
    } else {
        tracing::info!("Run 'blockforge preview' later to generate preview.png");
    }

    Ok(())
}

/// Best-effort preview chain for the record that was just created. A browser
/// failure here is reported but does not undo the scaffold.
fn generate_preview(kind: &RecordKind, id: &str, config: &ConfigFile) {
    let renderer = match ChromeRenderer::launch(
        (config.preview.width, config.preview.height),
        Duration::from_millis(config.preview.settle_ms),
    ) {
        Ok(renderer) => renderer,
        Err(err) => {
            tracing::warn!("Failed to launch headless browser: {err}");
            return;
        }
    };

    let target = match kind {
        RecordKind::Block => PreviewTarget::Block(id.to_string()),
        RecordKind::Template => PreviewTarget::Template(id.to_string()),
    };

    let preview_config = PreviewConfig {
        source_dir: config.records.dir.clone(),
        css_cdn_url: config.preview.css_cdn_url.clone(),
    };

    PreviewGenerator::new(preview_config, renderer).run(&target);
}
