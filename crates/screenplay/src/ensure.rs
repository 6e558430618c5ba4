//! Assertions that fail scenarios with both compared values

use crate::error::{ScreenplayError, ScreenplayResult};

pub struct Ensure;

impl Ensure {
    /// Assert two values are equal; the failure carries both.
    pub fn equal(what: &str, actual: &str, expected: &str) -> ScreenplayResult<()> {
        if actual == expected {
            Ok(())
        } else {
            Err(ScreenplayError::NotEqual {
                what: what.to_string(),
                actual: actual.to_string(),
                expected: expected.to_string(),
            })
        }
    }

    /// Assert two values differ.
    pub fn different(what: &str, left: &str, right: &str) -> ScreenplayResult<()> {
        if left != right {
            Ok(())
        } else {
            Err(ScreenplayError::NotDifferent {
                what: what.to_string(),
                value: left.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_passes_and_fails() {
        assert!(Ensure::equal("flash message", "a", "a").is_ok());

        let err = Ensure::equal("flash message", "got", "wanted").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("flash message"));
        assert!(message.contains("got"));
        assert!(message.contains("wanted"));
    }

    #[test]
    fn test_different_passes_and_fails() {
        assert!(Ensure::different("row", "a", "b").is_ok());
        assert!(matches!(
            Ensure::different("row", "same", "same"),
            Err(ScreenplayError::NotDifferent { .. })
        ));
    }
}
