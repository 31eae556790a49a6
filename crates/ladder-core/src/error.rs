/// Errors surfaced by dictionary queries and route searches.
///
/// Every variant is terminal: callers get it straight back and nothing is
/// retried internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LadderError {
    #[error("origin and target words can't be the same: {0}")]
    SameWord(String),

    #[error("word does not exist: {0}")]
    NotFound(String),

    #[error("no one-edit neighbors found for: {0}")]
    NoMatches(String),

    #[error("no route from {origin} to {target}")]
    NoRoute { origin: String, target: String },

    #[error("failed to start search workers: {0}")]
    Workers(String),
}
