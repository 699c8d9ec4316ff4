//! CLI for the mkpage page scaffolder.

use anyhow::Result;
use clap::Parser;
use mkpage_core::config;
use mkpage_core::page::{self, PageRequest};

/// Top-level CLI: two positional arguments, no flags.
#[derive(Debug, Parser)]
#[command(name = "mkpage")]
#[command(about = "Scaffold a static page (HTML fragment + JSON metadata)", long_about = None)]
pub struct Cli {
    /// URL path for the page, e.g. `p1` or `/blog/post1`.
    pub url: String,

    /// Page title, e.g. "My Page".
    pub title: String,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let pages_root = std::env::current_dir()?.join(&cfg.pages_root);
        let request = PageRequest::new(cli.url, Some(cli.title));
        let dir = page::create_page(&pages_root, &request)?;
        println!("Created page at {}", dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests;
