use std::time::Instant;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::rank::Candidate;
use crate::trie::Trie;

/// Input line that ends the loop.
pub const QUIT: &str = ":q";

/// Printed when a prefix has no completions.
pub const NO_PREDICTION: &str = "No prediction";

#[derive(Debug, Clone, Copy)]
pub struct ReplOptions {
    /// How many completions to print per prefix.
    pub count: usize,
    /// Print each word's popularity next to it.
    pub show_scores: bool,
    /// Stop after answering this many prefixes.
    pub limit: Option<usize>,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            count: 1,
            show_scores: false,
            limit: None,
        }
    }
}

/// Reads prefixes from `input`, one per line, and writes the predictions for
/// each to `output`. Runs until EOF, a [`QUIT`] line, or the configured limit.
///
/// Returns the number of prefixes answered.
pub async fn run<R, W>(
    trie: &Trie,
    input: R,
    output: &mut W,
    options: ReplOptions,
) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut answered = 0;
    loop {
        if options.limit.is_some_and(|limit| answered >= limit) {
            debug!("Prefix limit of {} reached", answered);
            break;
        }
        let Some(prefix) = lines.next_line().await? else {
            break;
        };
        if prefix.trim() == QUIT {
            break;
        }

        let start = Instant::now();
        let ranked = trie.predict_ranked(&prefix, options.count);
        debug!(
            "Predicted {} words for {:?} in {} us",
            ranked.len(),
            prefix,
            start.elapsed().as_micros()
        );

        let mut rendered = render(&ranked, options.show_scores);
        rendered.push('\n');
        output.write_all(rendered.as_bytes()).await?;
        output.flush().await?;
        answered += 1;
    }
    Ok(answered)
}

fn render(ranked: &[Candidate], show_scores: bool) -> String {
    if ranked.is_empty() {
        return NO_PREDICTION.to_string();
    }
    ranked
        .iter()
        .map(|candidate| {
            if show_scores {
                format!("{} ({})", candidate.word, candidate.popularity)
            } else {
                candidate.word.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
