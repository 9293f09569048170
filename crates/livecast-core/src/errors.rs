use thiserror::Error;

#[derive(Debug, Error)]
pub enum LivecastError {
    #[error("engine init failed: {0}")]
    Init(String),
    #[error("engine not initialized")]
    NotInitialized,
    #[error("permission request failed: {0}")]
    Permission(String),
}
