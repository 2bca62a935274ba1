use clap::Args;
use prefix_predict::{Candidate, Trie};
use serde::Serialize;

use super::WordsArgs;

#[derive(Args, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub words: WordsArgs,
    /// Number of predictions per prefix.
    #[arg(short = 'n', long = "count", default_value_t = 1)]
    pub count: usize,
    /// Print predictions as JSON.
    #[arg(long)]
    pub json: bool,
    #[arg(name = "PREFIX", required = true)]
    pub prefixes: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Prediction<'a> {
    prefix: &'a str,
    words: Vec<Candidate>,
}

pub async fn execute_predict(args: PredictArgs) -> anyhow::Result<()> {
    let trie = args.words.load().await?;
    let predictions = predict_all(&trie, &args.prefixes, args.count);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&predictions)?);
        return Ok(());
    }
    for prediction in predictions {
        let words = prediction
            .words
            .iter()
            .map(|candidate| candidate.word.as_str())
            .collect::<Vec<_>>();
        if words.is_empty() {
            println!("{}: No prediction", prediction.prefix);
        } else {
            println!("{}: {}", prediction.prefix, words.join(", "));
        }
    }
    Ok(())
}

fn predict_all<'a>(trie: &Trie, prefixes: &'a [String], count: usize) -> Vec<Prediction<'a>> {
    prefixes
        .iter()
        .map(|prefix| Prediction {
            prefix,
            words: trie.predict_ranked(prefix, count),
        })
        .collect()
}
