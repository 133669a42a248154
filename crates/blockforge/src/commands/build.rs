//! Static API build command.

use anyhow::Result;

use blockforge_build::{ApiBuilder, BuildConfig};

use crate::config::ConfigFile;

/// Run the build command.
pub async fn run(config: &ConfigFile) -> Result<()> {
    tracing::info!("Building API tree...");

    let build_config = BuildConfig {
        source_dir: config.records.dir.clone(),
        output_dir: config.records.output.clone(),
        site_title: config.site.title.clone(),
        version: config.site.version.clone(),
    };

    let result = ApiBuilder::new(build_config).build()?;

    tracing::info!(
        "Built {} blocks and {} templates in {}ms ({} skipped)",
        result.blocks,
        result.templates,
        result.duration_ms,
        result.skipped
    );
    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
