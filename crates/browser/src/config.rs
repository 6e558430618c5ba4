//! Browser and driver configuration

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Playwright browser engine to launch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Chromium => "chromium",
            Engine::Firefox => "firefox",
            Engine::Webkit => "webkit",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chromium" => Ok(Engine::Chromium),
            "firefox" => Ok(Engine::Firefox),
            "webkit" => Ok(Engine::Webkit),
            other => Err(format!("unknown browser engine: {other}")),
        }
    }
}

/// Configuration for a driver session.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Browser engine
    pub engine: Engine,

    /// Run without a visible window
    pub headless: bool,

    /// Viewport dimensions
    pub viewport_width: u32,
    pub viewport_height: u32,

    /// Per-command timeout. Also installed as the Playwright default
    /// timeout inside the driver, so locator waits give up first.
    pub command_timeout: Duration,

    /// Timeout for the driver's ready handshake
    pub startup_timeout: Duration,

    /// Directory containing a `node_modules` with playwright, exported as
    /// NODE_PATH to the driver. None relies on a global install.
    pub node_modules_dir: Option<PathBuf>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            engine: Engine::Chromium,
            headless: true,
            viewport_width: 1280,
            viewport_height: 720,
            command_timeout: Duration::from_secs(30),
            startup_timeout: Duration::from_secs(60),
            node_modules_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_parse_roundtrip() {
        for engine in [Engine::Chromium, Engine::Firefox, Engine::Webkit] {
            let parsed: Engine = engine.as_str().parse().unwrap();
            assert_eq!(parsed, engine);
        }
        assert!("opera".parse::<Engine>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = BrowserConfig::default();
        assert_eq!(config.engine, Engine::Chromium);
        assert!(config.headless);
        assert_eq!(config.viewport_width, 1280);
        assert_eq!(config.viewport_height, 720);
    }
}
