//! Error types for the browser bridge

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Node runtime not found. Install Node.js and `npx playwright install`")]
    NodeNotFound,

    #[error("Driver failed to start: {0}")]
    DriverStartup(String),

    #[error("Driver exited unexpectedly: {0}")]
    DriverGone(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Command `{action}` failed: {message}")]
    Command { action: String, message: String },

    #[error("Timed out after {0} ms waiting for the driver")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BridgeResult<T> = Result<T, BridgeError>;
