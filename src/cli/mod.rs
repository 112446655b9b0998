//! Command-line interface for docpanel.
//!
//! Provides commands for loading documents into an in-memory page,
//! rendering local markdown, and inspecting the configuration.

use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::adapters::HttpSource;
use crate::config::Config;
use crate::core::ContentLoader;
use crate::domain::DocKind;
use crate::page::MemoryPage;
use crate::render;

/// docpanel - Lazy markdown document loader for page panels
#[derive(Parser, Debug)]
#[command(name = "docpanel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a document and print its panel content
    Load {
        /// Document kind (selects /<kind>.md and the <kind>-content panel)
        kind: String,

        /// Base URL to fetch from (overrides configuration)
        #[arg(short, long, env = "DOCPANEL_BASE_URL")]
        base_url: Option<String>,
    },

    /// Render local markdown to HTML
    Render {
        /// Input file (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Load { kind, base_url } => load_document(&kind, base_url).await,
            Commands::Render { input } => render_markdown(input),
            Commands::Config => show_config(),
        }
    }
}

/// Load one document into an in-memory page and print the panel content
async fn load_document(kind: &str, base_url: Option<String>) -> Result<()> {
    let base_url = match base_url {
        Some(url) => url,
        None => Config::load()?.base_url,
    };

    let kind = DocKind::new(kind);
    let page = Arc::new(MemoryPage::with_elements([kind.element_id()]));
    let loader = ContentLoader::new(Arc::new(HttpSource::new(base_url)), page.clone());

    loader.load(&kind).await;

    // The panel holds either the document or the error fallback
    if let Some(html) = page.html(&kind.element_id()) {
        println!("{}", html);
    }

    Ok(())
}

/// Render markdown from a file or stdin and print the HTML
fn render_markdown(input: Option<PathBuf>) -> Result<()> {
    let markdown = match input {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };

    print!("{}", render::to_html(&markdown));
    Ok(())
}

/// Show the resolved configuration
fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("base_url: {}", config.base_url);
    match config.config_file {
        Some(path) => println!("config_file: {}", path.display()),
        None => println!("config_file: (none)"),
    }

    Ok(())
}
