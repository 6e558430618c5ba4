//! Per-scenario state

use anyhow::Context;
use cucumber::World;
use uiprobe_browser::Session;
use uiprobe_pages::Site;
use uiprobe_screenplay::{Actor, ContentSnapshot};

use crate::config;

/// Everything one scenario may mutate.
///
/// The pre-reload capture lives here rather than in any shared place, so
/// scenarios cannot leak state into each other even when the runner
/// executes them concurrently.
#[derive(Debug, Default, World)]
pub struct ScenarioWorld {
    /// The actor on stage, with their browser. Launched lazily by the
    /// first Given so dry runs never touch a browser.
    pub actor: Option<Actor>,

    /// Capture taken before the page reload, if any
    pub before_reload: Option<ContentSnapshot>,
}

impl ScenarioWorld {
    pub fn site(&self) -> Site {
        config::runtime().site
    }

    /// Put an actor on stage, launching their browser on first use.
    pub async fn ensure_actor(&mut self, name: &str) -> anyhow::Result<&mut Actor> {
        if self.actor.is_none() {
            let run = config::runtime();
            let session = Session::launch(&run.browser)
                .await
                .context("failed to launch the browser driver")?;
            self.actor = Some(Actor::named(name, session));
        }
        self.actor.as_mut().context("actor was just placed on stage")
    }

    /// The actor placed on stage by an earlier Given step.
    pub fn actor(&mut self) -> anyhow::Result<&mut Actor> {
        self.actor.as_mut().context("no actor on stage; is the Given step missing?")
    }

    /// Retire the actor, closing the browser cleanly.
    pub async fn dismiss_actor(&mut self) {
        if let Some(actor) = self.actor.take() {
            if let Err(e) = actor.retire().await {
                tracing::warn!("failed to close browser session: {e}");
            }
        }
    }
}
