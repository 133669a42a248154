//! Preview generation command.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

use blockforge_preview::{ChromeRenderer, PreviewConfig, PreviewGenerator, PreviewTarget};

use crate::config::ConfigFile;

/// Run the preview command.
pub async fn run(
    block: Option<String>,
    template: Option<String>,
    open: bool,
    config: &ConfigFile,
) -> Result<()> {
    if open {
        return open_index();
    }

    let target = match (block, template) {
        (Some(id), _) => PreviewTarget::Block(id),
        (None, Some(id)) => PreviewTarget::Template(id),
        (None, None) => PreviewTarget::All,
    };

    tracing::info!("Generating preview images...");

    let renderer = ChromeRenderer::launch(
        (config.preview.width, config.preview.height),
        Duration::from_millis(config.preview.settle_ms),
    )
    .context("Failed to launch headless browser")?;

    let preview_config = PreviewConfig {
        source_dir: config.records.dir.clone(),
        css_cdn_url: config.preview.css_cdn_url.clone(),
    };

    let outcome = PreviewGenerator::new(preview_config, renderer).run(&target);

    tracing::info!(
        "Preview generation complete: {} generated, {} failed",
        outcome.generated,
        outcome.failed
    );

    Ok(())
}

/// Open the local index.html in the platform's default browser.
fn open_index() -> Result<()> {
    let index = Path::new("index.html");
    if !index.exists() {
        tracing::error!("index.html not found in current directory");
        return Ok(());
    }

    tracing::info!("Opening index.html in browser...");
    if let Err(err) = open::that(index) {
        tracing::error!("Failed to open browser: {err}");
        tracing::info!("Please open index.html manually");
    }
    Ok(())
}
