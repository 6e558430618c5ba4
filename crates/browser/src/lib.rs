//! Persistent browser bridge for UiProbe
//!
//! Drives a headless browser through a generated Playwright/Node driver
//! process. The driver reads newline-delimited JSON commands on stdin and
//! answers each with one JSON line on stdout, so a single browser page
//! survives across an entire scenario (navigation state, cookies, dynamic
//! ids) instead of being relaunched per interaction.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │              Session (Rust)                   │
//! │    launch() ── writes driver.mjs, spawns node │
//! │    execute(PageCommand) ──> stdin JSON line   │
//! │    PageResponse <── stdout JSON line          │
//! │    close() / Drop ── shuts the driver down    │
//! ├───────────────────────────────────────────────┤
//! │              driver.mjs (Node)                │
//! │    one browser, one context, one page         │
//! │    goto / reload / fill / click / text /      │
//! │    text_all / attribute / wait_for / close    │
//! └───────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod protocol;
pub mod script;
pub mod session;

pub use config::{BrowserConfig, Engine};
pub use error::{BridgeError, BridgeResult};
pub use protocol::{PageCommand, PageResponse, WaitState};
pub use session::Session;
