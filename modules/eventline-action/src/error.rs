use thiserror::Error;

/// An action exception.
///
/// Covers synchronous failures, rejected deferred values and errors emitted
/// mid-stream alike. The normalizer never returns one of these to its
/// caller; they are handed to the exception handler instead.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Action failed: {0}")]
    Failed(String),

    #[error("Action chain exceeded {limit} hops")]
    ChainTooDeep { limit: usize },

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl ActionError {
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }
}
