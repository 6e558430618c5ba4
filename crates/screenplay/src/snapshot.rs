//! Ordered capture of element texts at a point in time
//!
//! The only durable entity in the suite: one capture before a reload, one
//! after, compared position-wise. Lives inside a single scenario's state
//! and is discarded with it.

use crate::error::{ScreenplayError, ScreenplayResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSnapshot {
    entries: Vec<String>,
}

impl ContentSnapshot {
    pub fn capture(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Assert that every entry changed between this capture and `after`.
    ///
    /// A count mismatch is reported as its own error before any entries are
    /// compared; an unchanged entry is reported with its index and value.
    pub fn verify_changed(&self, after: &ContentSnapshot) -> ScreenplayResult<()> {
        if self.len() != after.len() {
            return Err(ScreenplayError::SnapshotLengthMismatch {
                before: self.len(),
                after: after.len(),
            });
        }
        for (index, (before, after)) in self.entries.iter().zip(after.entries.iter()).enumerate() {
            if before == after {
                return Err(ScreenplayError::SnapshotUnchanged {
                    index,
                    value: before.clone(),
                });
            }
        }
        Ok(())
    }
}

impl From<Vec<String>> for ContentSnapshot {
    fn from(entries: Vec<String>) -> Self {
        Self::capture(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(entries: &[&str]) -> ContentSnapshot {
        ContentSnapshot::capture(entries.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_all_entries_changed_passes() {
        let before = snapshot(&["alpha", "beta", "gamma"]);
        let after = snapshot(&["one", "two", "three"]);
        assert!(before.verify_changed(&after).is_ok());
    }

    #[test]
    fn test_unchanged_entry_reports_index_and_value() {
        let before = snapshot(&["alpha", "beta", "gamma"]);
        let after = snapshot(&["one", "beta", "three"]);
        match before.verify_changed(&after) {
            Err(ScreenplayError::SnapshotUnchanged { index, value }) => {
                assert_eq!(index, 1);
                assert_eq!(value, "beta");
            }
            other => panic!("expected SnapshotUnchanged, got {other:?}"),
        }
    }

    #[test]
    fn test_count_change_is_a_distinct_error() {
        let before = snapshot(&["alpha", "beta", "gamma"]);
        let after = snapshot(&["one", "two"]);
        match before.verify_changed(&after) {
            Err(ScreenplayError::SnapshotLengthMismatch { before, after }) => {
                assert_eq!((before, after), (3, 2));
            }
            other => panic!("expected SnapshotLengthMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_captures_compare_clean() {
        // Zero matching elements is a valid capture
        let before = snapshot(&[]);
        assert!(before.is_empty());
        assert!(before.verify_changed(&snapshot(&[])).is_ok());
    }

    #[test]
    fn test_capture_is_idempotent_without_reload() {
        let first = snapshot(&["alpha", "beta"]);
        let second = snapshot(&["alpha", "beta"]);
        assert_eq!(first, second);
    }
}
