//! BDD layer for UiProbe
//!
//! Step definitions bind Gherkin phrases to page-object calls; all mutable
//! scenario state lives in [`world::ScenarioWorld`], created fresh per
//! scenario. The runner binary lives in `tests/bdd.rs`.

pub mod config;
pub mod steps;
pub mod world;

pub use world::ScenarioWorld;
