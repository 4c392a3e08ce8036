//! flatten - Serialize a codebase into one LLM-ready document
//!
//! flatten provides:
//! - Directory flattening with configurable exclusion patterns
//! - Content transforms (comment stripping, minification)
//! - XML, JSON and Markdown serialization
//! - Standalone tree rendering and codebase metrics

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod flows;
mod walk;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();
    cli::run(cli)
}
