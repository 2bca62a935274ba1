use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::normalize::is_ascii_alphabetic;
use crate::trie::{Popularity, Trie};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {word:?} is not allowed by the {policy:?} charset policy")]
    InvalidWord {
        line: usize,
        word: String,
        policy: CharsetPolicy,
    },

    #[error("line {line}: invalid popularity {value:?}")]
    InvalidPopularity { line: usize, value: String },
}

/// Which characters a loaded word may contain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CharsetPolicy {
    /// Any character; everything is case-folded on insert.
    #[default]
    Any,
    /// ASCII letters only (`[A-Za-z]*`).
    AsciiAlphabetic,
}

impl CharsetPolicy {
    pub fn allows(self, word: &str) -> bool {
        match self {
            CharsetPolicy::Any => true,
            CharsetPolicy::AsciiAlphabetic => is_ascii_alphabetic(word),
        }
    }
}

/// What to do with a word the charset policy rejects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidWordAction {
    #[default]
    Reject,
    Skip,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoaderOptions {
    pub charset: CharsetPolicy,
    pub on_invalid: InvalidWordAction,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Somewhere a word list can be read from, one entry per line.
#[async_trait::async_trait]
pub trait WordSource {
    async fn read_entries(&mut self) -> Result<Vec<String>, LoadError>;
}

/// A word list stored in a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl WordSource for FileSource {
    async fn read_entries(&mut self) -> Result<Vec<String>, LoadError> {
        let buf = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        debug!("Read {} bytes from {}", buf.len(), self.path.display());
        Ok(buf.lines().map(str::to_owned).collect())
    }
}

/// An in-memory word list.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lines: Vec<String>,
}

impl MemorySource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait::async_trait]
impl WordSource for MemorySource {
    async fn read_entries(&mut self) -> Result<Vec<String>, LoadError> {
        Ok(std::mem::take(&mut self.lines))
    }
}

/// One parsed line of a word list: the word and an optional explicit score.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<'a> {
    line: usize,
    word: &'a str,
    popularity: Option<Popularity>,
}

/// Parses `word [popularity]`. Blank lines yield `None`.
fn parse_entry(line: usize, raw: &str) -> Result<Option<Entry<'_>>, LoadError> {
    let mut fields = raw.split_whitespace();
    let Some(word) = fields.next() else {
        return Ok(None);
    };
    let popularity = match fields.next() {
        Some(value) => Some(value.parse().map_err(|_| LoadError::InvalidPopularity {
            line,
            value: value.to_owned(),
        })?),
        None => None,
    };
    Ok(Some(Entry {
        line,
        word,
        popularity,
    }))
}

/// Reads `source` and inserts every entry into `trie`.
///
/// Entries without an explicit popularity are ranked by position: with `n`
/// non-blank entries, the first gets `n`, the next `n - 1`, down to 1 for the
/// last.
pub async fn load_into<S>(
    trie: &mut Trie,
    source: &mut S,
    options: LoaderOptions,
) -> Result<LoadReport, LoadError>
where
    S: WordSource + Send + ?Sized,
{
    let lines = source.read_entries().await?;
    let entries = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, raw)| parse_entry(idx + 1, raw).transpose())
        .collect::<Result<Vec<_>, _>>()?;

    let total = entries.len();
    let mut report = LoadReport::default();
    for (rank, entry) in entries.into_iter().enumerate() {
        if !options.charset.allows(entry.word) {
            match options.on_invalid {
                InvalidWordAction::Reject => {
                    return Err(LoadError::InvalidWord {
                        line: entry.line,
                        word: entry.word.to_owned(),
                        policy: options.charset,
                    });
                }
                InvalidWordAction::Skip => {
                    warn!("Skipping {:?} on line {}", entry.word, entry.line);
                    report.skipped += 1;
                    continue;
                }
            }
        }
        let popularity = entry
            .popularity
            .unwrap_or_else(|| rank_popularity(total, rank));
        trie.insert_with_popularity(entry.word, popularity);
        report.inserted += 1;
    }

    info!("Loaded {} words ({} skipped)", report.inserted, report.skipped);
    Ok(report)
}

/// Loads `source` into a fresh trie.
pub async fn load_trie<S>(source: &mut S, options: LoaderOptions) -> Result<Trie, LoadError>
where
    S: WordSource + Send + ?Sized,
{
    let mut trie = Trie::new();
    load_into(&mut trie, source, options).await?;
    Ok(trie)
}

fn rank_popularity(total: usize, index: usize) -> Popularity {
    Popularity::try_from(total - index).unwrap_or(Popularity::MAX)
}
