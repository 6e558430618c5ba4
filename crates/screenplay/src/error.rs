//! Error types for the screenplay layer

use thiserror::Error;
use uiprobe_browser::BridgeError;

#[derive(Error, Debug)]
pub enum ScreenplayError {
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error("Assertion failed: {what}: expected `{expected}`, got `{actual}`")]
    NotEqual {
        what: String,
        actual: String,
        expected: String,
    },

    #[error("Assertion failed: {what}: value `{value}` did not change")]
    NotDifferent { what: String, value: String },

    #[error("{target} has no `{name}` attribute")]
    MissingAttribute { target: String, name: String },

    #[error("Snapshot sizes differ: captured {before} element(s) before, {after} after")]
    SnapshotLengthMismatch { before: usize, after: usize },

    #[error("Snapshot entry {index} is unchanged: `{value}`")]
    SnapshotUnchanged { index: usize, value: String },
}

pub type ScreenplayResult<T> = Result<T, ScreenplayError>;
