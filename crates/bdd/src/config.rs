//! Suite-wide run configuration
//!
//! Installed once by the runner before any scenario starts; worlds read it
//! when they launch their browser. Falls back to environment defaults so
//! steps stay usable from an ad-hoc harness.

use once_cell::sync::OnceCell;
use uiprobe_browser::BrowserConfig;
use uiprobe_pages::Site;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub browser: BrowserConfig,
    pub site: Site,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            browser: BrowserConfig::default(),
            site: Site::from_env(),
        }
    }
}

static CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Install the suite configuration. Later calls are ignored.
pub fn install(config: RunConfig) {
    let _ = CONFIG.set(config);
}

/// The installed configuration, or environment defaults.
pub fn runtime() -> RunConfig {
    CONFIG.get_or_init(RunConfig::default).clone()
}
