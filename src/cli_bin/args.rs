//! Command-line argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser)]
#[command(
    name = "flatmatter",
    version,
    about = "Read, edit and validate flat key-value front matter in text documents",
    long_about = "flatmatter reads the `key: value` block between the leading `---` lines \
                  of a document, prints or edits individual keys, and checks that required \
                  keys are present."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print front matter values
    Get(GetArgs),
    /// Set a front matter value
    Set(SetArgs),
    /// Remove a front matter key
    Remove(RemoveArgs),
    /// Check that required keys are present
    Validate(ValidateArgs),
    /// Print the document body without front matter
    Body(BodyArgs),
}

/// Common options for write operations
#[derive(Args, Debug, Clone)]
pub struct WriteArgs {
    /// Report what would change without modifying files
    #[arg(long)]
    pub dry_run: bool,

    /// Create backup files with this suffix
    #[arg(long, value_name = "SUFFIX")]
    pub backup_suffix: Option<String>,

    /// Create backup files in this directory
    #[arg(long, value_name = "DIR")]
    pub backup_dir: Option<PathBuf>,

    /// Print modified content to stdout instead of writing to file
    #[arg(long)]
    pub stdout: bool,

    /// Write files directly instead of through a temporary file
    #[arg(long)]
    pub no_atomic: bool,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Files or directories to read
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Keys to print (all keys when omitted)
    #[arg(short, long = "key", value_name = "KEY")]
    pub keys: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the set command
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Files or directories to modify
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub write: WriteArgs,

    /// Key to set
    #[arg(short, long, value_name = "KEY")]
    pub key: String,

    /// Value to set
    #[arg(short = 'V', long, value_name = "VALUE")]
    pub value: String,
}

/// Arguments for the remove command
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Files or directories to modify
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub write: WriteArgs,

    /// Key to remove
    #[arg(short, long, value_name = "KEY")]
    pub key: String,
}

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Files or directories to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Keys every document must define
    #[arg(short, long = "require", value_name = "KEY")]
    pub required: Vec<String>,

    /// Stop at the first failing file
    #[arg(long)]
    pub fail_fast: bool,
}

/// Arguments for the body command
#[derive(Args, Debug)]
pub struct BodyArgs {
    /// Files to print
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Output formats for the get command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `key: value` lines
    Text,
    /// JSON object
    Json,
    /// YAML mapping
    Yaml,
}
