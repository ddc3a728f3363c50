/// Errors surfaced at the engine boundary.
///
/// `InvalidAction` and `NotFound` are recoverable: the submission is
/// rejected and hand state is left untouched. `DataCorruption` means a
/// persisted log no longer replays to its stored snapshot; it indicates a
/// bug or tampering and is never auto-corrected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("invalid action: {0}")]
    InvalidAction(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

impl TableError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidAction(reason.into())
    }
    pub fn missing(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
    pub fn corrupt(reason: impl Into<String>) -> Self {
        Self::DataCorruption(reason.into())
    }
}
