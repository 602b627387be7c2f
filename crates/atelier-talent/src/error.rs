use thiserror::Error;

#[derive(Debug, Error)]
pub enum TalentError {
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store lock poisoned")]
    LockPoisoned,
    #[error("corrupted value under key '{0}'")]
    Corrupted(String),
}
