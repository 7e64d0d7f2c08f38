//! Command line argument parsing for the contraction-fix CLI using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{DEFAULT_CACHE_SIZE, DEFAULT_CONTEXT_RADIUS, FixerConfig};

/// contraction-fix - expand and contract English contractions and slang
#[derive(Parser, Debug, Clone)]
#[command(name = "contraction-fix")]
#[command(about = "Expand and contract English contractions, informal forms and internet slang")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FixerArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Do not load the informal contractions dictionary
    #[arg(long, global = true)]
    pub no_informal: bool,

    /// Do not load the internet slang dictionary
    #[arg(long, global = true)]
    pub no_slang: bool,

    /// Read dictionaries from this directory instead of the bundled ones
    #[arg(long, value_name = "DIR", env = "CONTRACTION_FIX_DICT_DIR", global = true)]
    pub dict_dir: Option<PathBuf>,

    /// Number of results to memoize
    #[arg(long, default_value_t = DEFAULT_CACHE_SIZE, global = true)]
    pub cache_size: usize,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FixerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Engine configuration selected by the global flags.
    pub fn fixer_config(&self) -> FixerConfig {
        let config = FixerConfig::new(!self.no_informal, !self.no_slang)
            .with_cache_size(self.cache_size);
        match &self.dict_dir {
            Some(dir) => config.with_dictionary_dir(dir),
            None => config,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Expand contractions
    Fix(TextArgs),

    /// Contract expansions back into contractions
    Contract(TextArgs),

    /// Show what would be expanded, with context
    Preview(PreviewArgs),
}

/// Where the text to process comes from.
#[derive(Args, Debug, Clone)]
pub struct TextArgs {
    /// Texts to process; reads stdin line by line when empty
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Process a file line by line
    #[arg(short, long, value_name = "FILE", conflicts_with = "texts")]
    pub input: Option<PathBuf>,
}

/// Arguments for previewing matches
#[derive(Args, Debug, Clone)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub text: TextArgs,

    /// Characters of context shown on each side of a match
    #[arg(short, long, default_value_t = DEFAULT_CONTEXT_RADIUS)]
    pub context: usize,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
