//! Blockforge CLI - scaffold, validate, preview and build content records.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use blockforge_schema::RecordKind;

mod commands;
mod config;
mod prompt;
mod scaffold;

#[derive(Parser)]
#[command(name = "blockforge")]
#[command(about = "CLI for managing blockforge blocks and templates")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to blockforge.toml config file
    #[arg(short, long, default_value = "blockforge.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new block or template (interactive)
    Create {
        /// Name of the record
        #[arg(short, long)]
        name: Option<String>,

        /// Category of the record
        #[arg(short = 'c', long)]
        category: Option<String>,
    },

    /// Create a new block
    CreateBlock {
        /// Block name
        #[arg(short, long)]
        name: Option<String>,

        /// Block category
        #[arg(short = 'c', long)]
        category: Option<String>,
    },

    /// Create a new template
    CreateTemplate {
        /// Template name
        #[arg(short, long)]
        name: Option<String>,

        /// Template category
        #[arg(short = 'c', long)]
        category: Option<String>,
    },

    /// Generate preview images for blocks and templates
    Preview {
        /// Generate preview for a specific block
        #[arg(short, long)]
        block: Option<String>,

        /// Generate preview for a specific template
        #[arg(short, long)]
        template: Option<String>,

        /// Open index.html in the default browser instead
        #[arg(short, long)]
        open: bool,
    },

    /// Validate all blocks and templates
    Validate,

    /// Build the static API tree
    Build,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let config = config::load(&cli.config)?;

    // Execute command
    match cli.command {
        Commands::Create { name, category } => {
            commands::create::run(None, name, category, &config).await?;
        }
        Commands::CreateBlock { name, category } => {
            commands::create::run(Some(RecordKind::Block), name, category, &config).await?;
        }
        Commands::CreateTemplate { name, category } => {
            commands::create::run(Some(RecordKind::Template), name, category, &config).await?;
        }
        Commands::Preview {
            block,
            template,
            open,
        } => {
            commands::preview::run(block, template, open, &config).await?;
        }
        Commands::Validate => {
            commands::validate::run(&config).await?;
        }
        Commands::Build => {
            commands::build::run(&config).await?;
        }
    }

    Ok(())
}
