//! Probed-site locations
//!
//! The suite exercises two public demo sites. Both bases can be overridden
//! through the environment so the suite can run against a mirror.

const DEFAULT_HEROKUAPP_BASE: &str = "https://the-internet.herokuapp.com";
const DEFAULT_DEMOQA_BASE: &str = "https://demoqa.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub herokuapp_base: String,
    pub demoqa_base: String,
}

impl Site {
    /// Defaults, overridden by `UIPROBE_HEROKUAPP_URL` / `UIPROBE_DEMOQA_URL`.
    pub fn from_env() -> Self {
        Self {
            herokuapp_base: std::env::var("UIPROBE_HEROKUAPP_URL")
                .unwrap_or_else(|_| DEFAULT_HEROKUAPP_BASE.to_string()),
            demoqa_base: std::env::var("UIPROBE_DEMOQA_URL")
                .unwrap_or_else(|_| DEFAULT_DEMOQA_BASE.to_string()),
        }
    }

    pub fn login_url(&self) -> String {
        format!("{}/login", self.herokuapp_base.trim_end_matches('/'))
    }

    pub fn dynamic_content_url(&self) -> String {
        format!("{}/dynamic_content", self.herokuapp_base.trim_end_matches('/'))
    }

    pub fn dynamic_properties_url(&self) -> String {
        format!("{}/dynamic-properties", self.demoqa_base.trim_end_matches('/'))
    }
}

impl Default for Site {
    fn default() -> Self {
        Self {
            herokuapp_base: DEFAULT_HEROKUAPP_BASE.to_string(),
            demoqa_base: DEFAULT_DEMOQA_BASE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let site = Site::default();
        assert_eq!(site.login_url(), "https://the-internet.herokuapp.com/login");
        assert_eq!(
            site.dynamic_content_url(),
            "https://the-internet.herokuapp.com/dynamic_content"
        );
        assert_eq!(site.dynamic_properties_url(), "https://demoqa.com/dynamic-properties");
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        let site = Site {
            herokuapp_base: "http://localhost:8080/".to_string(),
            ..Default::default()
        };
        assert_eq!(site.login_url(), "http://localhost:8080/login");
    }
}
