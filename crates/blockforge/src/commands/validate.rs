//! Whole-tree validation command.

use anyhow::Result;

use blockforge_build::validate_tree;

use crate::config::ConfigFile;

/// Run the validate command.
pub async fn run(config: &ConfigFile) -> Result<()> {
    tracing::info!("Validating blocks and templates...");

    let report = validate_tree(&config.records.dir);

    tracing::info!("Total records: {}", report.total);
    tracing::info!("Valid records: {}", report.valid);
    tracing::info!("Invalid records: {}", report.invalid());

    if !report.is_clean() {
        for error in &report.errors {
            tracing::error!("{error}");
        }
        anyhow::bail!(
            "{} of {} records failed validation",
            report.invalid(),
            report.total
        );
    }

    tracing::info!("All records are valid");
    Ok(())
}
