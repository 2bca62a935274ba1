use clap::Args;
use prefix_predict::TrieStats;

use super::WordsArgs;

#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub words: WordsArgs,
    /// Print the statistics as JSON.
    #[arg(long)]
    pub json: bool,
}

pub async fn execute_stats(args: StatsArgs) -> anyhow::Result<()> {
    let trie = args.words.load().await?;
    print_stats(&trie.stats(), args.json)
}

pub fn print_stats(stats: &TrieStats, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    } else {
        println!("{}", format_stats(stats));
    }
    Ok(())
}

fn format_stats(stats: &TrieStats) -> String {
    format!(
        "size: {}\nleaves: {}\nheight: {}\nmaximum branching: {}\nlongest word length: {}",
        stats.size, stats.leaves, stats.height, stats.max_branching, stats.longest_word_len
    )
}
