//! CLI argument parsing for the feature catalog extractor.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "featcat",
    version,
    about = "Build a feature test catalog from a markdown specification",
    after_help = "Examples:\n  featcat extract --input Feature_Spec.md --output features.json\n  featcat extract --config featcat.json --stdout\n  featcat config --out featcat.json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Emit debug diagnostics on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Extract(ExtractArgs),
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
#[command(about = "Extract, validate, and write the feature catalog")]
pub struct ExtractArgs {
    /// Specification markdown to read (default: Feature_Spec.md)
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Catalog JSON to write (default: features.json)
    #[arg(long, value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// JSON config supplying paths and skipped section titles
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the catalog JSON to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Print or write the default config")]
pub struct ConfigArgs {
    /// Write the config here instead of printing it
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Overwrite an existing config file
    #[arg(long, requires = "out")]
    pub force: bool,
}
