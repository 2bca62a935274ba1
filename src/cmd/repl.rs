use std::io::Write;

use clap::Args;
use prefix_predict::repl::{self, ReplOptions};
use tokio::io::BufReader;
use tracing::info;

use super::{stats::print_stats, WordsArgs};

#[derive(Args, Debug)]
pub struct ReplArgs {
    #[command(flatten)]
    pub words: WordsArgs,
    /// Number of predictions to print per prefix.
    #[arg(short = 'n', long = "count", default_value_t = 1)]
    pub count: usize,
    /// Print each prediction's popularity.
    #[arg(long)]
    pub scores: bool,
    /// Print dictionary statistics before reading prefixes.
    #[arg(long)]
    pub stats: bool,
    /// Stop after this many prefixes.
    #[arg(long)]
    pub limit: Option<usize>,
}

pub async fn execute_repl(args: ReplArgs) -> anyhow::Result<()> {
    print!("Loading dictionary ... ");
    std::io::stdout().flush()?;
    let trie = args.words.load().await?;
    println!("done");

    if args.stats {
        print_stats(&trie.stats(), false)?;
    }

    println!("Enter prefixes for prediction below.");
    let options = ReplOptions {
        count: args.count,
        show_scores: args.scores,
        limit: args.limit,
    };
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let answered = repl::run(&trie, stdin, &mut stdout, options).await?;
    info!("Answered {} prefixes", answered);

    Ok(())
}
