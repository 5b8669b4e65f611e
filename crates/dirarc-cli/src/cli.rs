//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use dirarc_core::ArchiveFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dirarc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pack a directory into a new archive
    Create(CreateArgs),
}

#[derive(clap::Args)]
pub struct CreateArgs {
    /// Output archive file path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Directory whose contents are archived
    #[arg(value_name = "SOURCE_DIR")]
    pub source_dir: PathBuf,

    /// Virtual directory every entry is placed under (`/` or `\` separated)
    #[arg(short, long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Archive format: zip, jar, tar, tar.gz (default: from OUTPUT extension)
    #[arg(long, value_name = "FORMAT", value_parser = parse_format)]
    pub format: Option<ArchiveFormat>,

    /// Overwrite output file if exists
    #[arg(short = 'f', long)]
    pub force: bool,
}

fn parse_format(s: &str) -> Result<ArchiveFormat, String> {
    s.parse::<ArchiveFormat>().map_err(|e| e.to_string())
}
