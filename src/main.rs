use anyhow::Result;
use clap::{Parser, Subcommand};
use rcorpus::{run_collector, run_normalizer, AppConfig};
use std::path::PathBuf;

/// Keyword-driven Reddit corpus collection and preprocessing.
#[derive(Parser, Debug)]
#[command(name = "rcorpus")]
#[command(about = "Collect keyword-matched Reddit posts and normalize their text for analysis")]
#[command(version)]
struct Args {
    /// Path to the TOML config file (credentials, identifier, search plan)
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search configured keywords across subreddits, fetch comments, and
    /// write a JSON archive under <data_root>/raw
    Collect {
        /// Disable the comment-collection progress bar
        #[arg(long)]
        no_progress: bool,
    },
    /// Flatten and clean the newest archive into a CSV under
    /// <data_root>/processed
    Process,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = AppConfig::load(&args.config)?;

    match args.command {
        Command::Collect { no_progress } => {
            let path = run_collector(&cfg, !no_progress)?;
            println!("archive written to {}", path.display());
        }
        Command::Process => match run_normalizer(&cfg)? {
            Some(path) => println!("processed data written to {}", path.display()),
            None => println!("no data to process"),
        },
    }
    Ok(())
}
