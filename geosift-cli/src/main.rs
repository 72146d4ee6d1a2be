//! Geosift command-line interface

use clap::Parser;
use geosift_cli::commands::{ChunkArgs, SectionsArgs};

/// Locate methods sections and place-name candidates in scientific articles
#[derive(Debug, Parser)]
#[command(name = "geosift", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Locate methods/materials sections in article text
    Sections(SectionsArgs),

    /// Extract place-name candidates from tagged sentences
    Chunk(ChunkArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Sections(args) => args.execute(),
        Commands::Chunk(args) => args.execute(),
    }
}
