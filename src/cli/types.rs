use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pagetoc::OutputFormat;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "pagetoc")]
#[command(about = "Print the table of contents of a documentation page", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Custom configuration file (repeatable, later files win)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<Vec<PathBuf>>,

    /// Output format, overriding the configured one
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Extract headings from a markdown file
    #[command(alias = "md")]
    Markdown {
        /// Markdown file to read
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Read an already nested heading token forest (JSON or YAML)
    #[command(alias = "t")]
    Tokens {
        /// Token file to read
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}
