//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::{FlattenerConfig, OutputFormat, DEFAULT_EXCLUDES};
use crate::walk::MAX_SCAN_DEPTH;

/// flatten - serialize a codebase into one LLM-ready document.
#[derive(Parser, Debug)]
#[command(name = "flatten")]
#[command(
    author,
    version,
    about,
    args_conflicts_with_subcommands = true,
    long_about = r#"flatten walks a directory tree, filters it with exclusion patterns,
optionally transforms file contents, and emits one structured document
(XML, JSON or Markdown) suitable for feeding to a language model.

Without a subcommand it flattens DIRECTORY (default: current directory).

Output formats:
- xml (default): <codebase> document, file contents in CDATA
- json: structural dump of the full result, pretty-printed
- markdown: headings per file with fenced code blocks

Examples:
    flatten .
    flatten src --format markdown -o context.md
    flatten . --exclude 'node_modules/**' --exclude '*.md' --strip-comments
    flatten tree src --depth 3
    flatten analyze . --json
"#
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub flatten: FlattenArgs,

    /// Verbose mode (per-file progress and a run summary on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Report each processed file and a completion summary on stderr.\n\
Machine-readable output on stdout is unaffected."
    )]
    pub verbose: bool,
}

/// Arguments for the default flatten command
#[derive(Args, Debug)]
pub struct FlattenArgs {
    /// Directory to flatten.
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,

    /// Write output to a file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (xml/json/markdown).
    #[arg(
        short,
        long,
        default_value = "xml",
        value_name = "FORMAT",
        long_help = "Select the serialization format.\n\n\
Supported values:\n\
- xml (default)\n\
- json\n\
- markdown (md)\n"
    )]
    pub format: String,

    /// Exclusion pattern, repeatable.
    #[arg(
        long,
        value_name = "PATTERN",
        long_help = "Exclude paths matching PATTERN (repeatable).\n\n\
Patterns match the path relative to DIRECTORY, case-insensitively.\n\
'**' crosses directory separators, '*' does not; a pattern without\n\
wildcards excludes any path containing it as a substring.\n\n\
The defaults (node_modules, .git, dist, build) are always appended\n\
unless --no-default-excludes is given."
    )]
    pub exclude: Vec<String>,

    /// Include pattern, repeatable (advisory).
    #[arg(
        long,
        value_name = "PATTERN",
        long_help = "Include pattern (repeatable). Recorded in the run metadata but\n\
currently advisory: all discovered files are candidates unless excluded."
    )]
    pub include: Vec<String>,

    /// Do not append the default exclusion set.
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Strip comments from file contents (best-effort, lexical).
    #[arg(
        long,
        long_help = "Strip comments from file contents using per-language regex rules.\n\n\
This is a lexical approximation, not a parser: comment markers inside\n\
string literals will be stripped too."
    )]
    pub strip_comments: bool,

    /// Minify file contents (trim lines, collapse blank runs).
    #[arg(long)]
    pub minify: bool,

    /// Emit structure only; skip reading file contents.
    #[arg(long)]
    pub tree_only: bool,

    /// Depth of the embedded directory tree.
    #[arg(long, default_value_t = MAX_SCAN_DEPTH, value_name = "N")]
    pub tree_depth: usize,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the directory tree and nothing else.
    #[command(
        long_about = "Render an ASCII box-drawing tree of DIRECTORY to stdout.\n\n\
Directories sort before files; both sort alphabetically. Directories at\n\
the depth limit are listed but not descended.\n\n\
Examples:\n\
  flatten tree .\n\
  flatten tree src --depth 3 --icons\n"
    )]
    Tree {
        /// Directory to render.
        #[arg(value_name = "DIRECTORY", default_value = ".")]
        directory: PathBuf,

        /// Maximum depth to descend.
        #[arg(long, default_value_t = MAX_SCAN_DEPTH, value_name = "N")]
        depth: usize,

        /// Prefix entries with folder/file icons.
        #[arg(long)]
        icons: bool,
    },

    /// Compute aggregate codebase metrics.
    #[command(
        long_about = "Walk DIRECTORY (always excluding node_modules, .git, dist, build)\n\
and report file and language counts, sizes, the largest file, and total\n\
lines of code.\n\n\
Examples:\n\
  flatten analyze .\n\
  flatten analyze . --json\n"
    )]
    Analyze {
        /// Directory to analyze.
        #[arg(value_name = "DIRECTORY", default_value = ".")]
        directory: PathBuf,

        /// Emit the analysis as pretty-printed JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Build the immutable run config from flatten arguments
fn build_config(args: &FlattenArgs) -> Result<FlattenerConfig> {
    let output_format: OutputFormat = args
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let mut exclude_patterns = args.exclude.clone();
    if !args.no_default_excludes {
        exclude_patterns.extend(DEFAULT_EXCLUDES.iter().map(|s| s.to_string()));
    }

    Ok(FlattenerConfig {
        include_comments: !args.strip_comments,
        minify_output: args.minify,
        tree_only: args.tree_only,
        output_format,
        include_patterns: args.include.clone(),
        exclude_patterns,
    })
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Tree {
            directory,
            depth,
            icons,
        }) => crate::walk::tree::run_tree(&directory, depth, icons),

        Some(Commands::Analyze { directory, json }) => {
            crate::flows::analyze::run_analyze(&directory, json)
        }

        None => {
            let config = build_config(&cli.flatten)?;
            crate::flows::flatten::run_flatten(
                &cli.flatten.directory,
                &config,
                cli.flatten.output.as_deref(),
                cli.flatten.tree_depth,
                cli.verbose,
            )
        }
    }
}
