use std::{path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Args;
use prefix_predict::{load_trie, CharsetPolicy, FileSource, InvalidWordAction, LoaderOptions, Trie};
use tracing::debug;

pub mod predict;
pub mod repl;
pub mod stats;

/// Where the dictionary comes from and how its words are validated.
#[derive(Args, Debug)]
pub struct WordsArgs {
    /// Word list with one word per line, most popular first. A line may end
    /// with an explicit integer popularity.
    #[arg(short, long)]
    pub words: PathBuf,
    /// Only accept words made of ASCII letters.
    #[arg(long)]
    pub ascii_only: bool,
    /// Skip words rejected by --ascii-only instead of failing.
    #[arg(long, requires = "ascii_only")]
    pub skip_invalid: bool,
}

impl WordsArgs {
    pub fn options(&self) -> LoaderOptions {
        LoaderOptions {
            charset: if self.ascii_only {
                CharsetPolicy::AsciiAlphabetic
            } else {
                CharsetPolicy::Any
            },
            on_invalid: if self.skip_invalid {
                InvalidWordAction::Skip
            } else {
                InvalidWordAction::Reject
            },
        }
    }

    pub async fn load(&self) -> anyhow::Result<Trie> {
        let start = Instant::now();
        let mut source = FileSource::new(&self.words);
        let trie = load_trie(&mut source, self.options())
            .await
            .with_context(|| format!("failed to load dictionary {}", self.words.display()))?;
        debug!("Loading took {} ms", start.elapsed().as_millis());
        Ok(trie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_from_flags() {
        let args = WordsArgs {
            words: PathBuf::from("words.txt"),
            ascii_only: true,
            skip_invalid: true,
        };
        let options = args.options();
        assert_eq!(options.charset, CharsetPolicy::AsciiAlphabetic);
        assert_eq!(options.on_invalid, InvalidWordAction::Skip);
    }

    #[tokio::test]
    async fn load_reports_missing_file() {
        let args = WordsArgs {
            words: PathBuf::from("/definitely/not/here.txt"),
            ascii_only: false,
            skip_invalid: false,
        };
        let err = args.load().await.unwrap_err();
        assert!(err.to_string().contains("failed to load dictionary"));
    }
}
