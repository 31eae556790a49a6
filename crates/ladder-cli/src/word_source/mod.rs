use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// A place a newline-delimited word list can be read from.
pub trait WordSource {
    /// Human-readable origin, used in logs and error messages.
    fn describe(&self) -> String;

    /// Fetch and parse the list. An empty list is an error.
    fn load(&self) -> Result<Vec<String>, WordSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WordSourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("no words in {0}")]
    Empty(String),
}

/// Word list on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalFile(pub PathBuf);

impl WordSource for LocalFile {
    fn describe(&self) -> String {
        self.0.display().to_string()
    }

    fn load(&self) -> Result<Vec<String>, WordSourceError> {
        let text = fs::read_to_string(&self.0)?;
        non_empty(parse_word_list(&text), self)
    }
}

/// Word list fetched over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteList(pub String);

impl WordSource for RemoteList {
    fn describe(&self) -> String {
        self.0.clone()
    }

    fn load(&self) -> Result<Vec<String>, WordSourceError> {
        let url = &self.0;
        let text = ureq::get(url)
            .call()
            .map_err(|e| WordSourceError::Http(format!("{url}: {e}")))?
            .into_body()
            .read_to_string()
            .map_err(|e| WordSourceError::Http(format!("{url}: {e}")))?;
        non_empty(parse_word_list(&text), self)
    }
}

fn non_empty(words: Vec<String>, source: &dyn WordSource) -> Result<Vec<String>, WordSourceError> {
    if words.is_empty() {
        return Err(WordSourceError::Empty(source.describe()));
    }
    Ok(words)
}

/// Split newline-delimited text into words.
///
/// Lines are trimmed (which also drops a trailing `\r`) and blank lines are
/// skipped. Order is preserved and duplicates are kept.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load the local list when one is given and usable, otherwise fall back to
/// the remote one.
pub fn load_words(local: Option<&Path>, remote_url: &str) -> Result<Vec<String>, WordSourceError> {
    let remote = RemoteList(remote_url.to_string());
    match local {
        Some(path) => load_with_fallback(&LocalFile(path.to_path_buf()), &remote),
        None => {
            info!(url = remote_url, "no local word list, fetching remote");
            remote.load()
        }
    }
}

/// Try `primary` first; any failure (unreadable, empty) falls back to
/// `fallback`. The fallback's error is the one returned.
pub fn load_with_fallback(
    primary: &dyn WordSource,
    fallback: &dyn WordSource,
) -> Result<Vec<String>, WordSourceError> {
    match primary.load() {
        Ok(words) => {
            info!(source = %primary.describe(), count = words.len(), "word list loaded");
            Ok(words)
        }
        Err(e) => {
            warn!(
                source = %primary.describe(),
                fallback = %fallback.describe(),
                error = %e,
                "word list unavailable, falling back"
            );
            fallback.load()
        }
    }
}
