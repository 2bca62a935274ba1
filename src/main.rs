use std::{fs::File, path::PathBuf, sync::Mutex};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::Level;

mod cmd;

use cmd::{
    predict::{execute_predict, PredictArgs},
    repl::{execute_repl, ReplArgs},
    stats::{execute_stats, StatsArgs},
};

/// Predicts the most popular words for typed prefixes.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Popularity-ranked word completion backed by a prefix tree."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read prefixes from stdin and print predictions for each.
    Repl(ReplArgs),
    /// Print predictions for the prefixes given on the command line.
    Predict(PredictArgs),
    /// Print structural statistics of the loaded dictionary.
    Stats(StatsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_file)?;

    match cli.command {
        Command::Repl(args) => execute_repl(args).await,
        Command::Predict(args) => execute_predict(args).await,
        Command::Stats(args) => execute_stats(args).await,
    }
}

fn init_tracing(verbose: u8, log_file: Option<PathBuf>) -> anyhow::Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = tracing_subscriber::fmt().with_max_level(level);
    match log_file {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            subscriber.with_writer(Mutex::new(file)).init();
        }
        None => subscriber.with_writer(std::io::stderr).init(),
    }
    Ok(())
}
