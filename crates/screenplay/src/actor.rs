//! The actor driving a browser session

use tracing::debug;
use uiprobe_browser::Session;

use crate::error::ScreenplayResult;
use crate::question::Question;
use crate::task::Performable;

/// A named user of the system under test.
///
/// The actor's single ability is browsing: it owns the bridge [`Session`]
/// for the scenario, so dropping the actor tears the browser down.
#[derive(Debug)]
pub struct Actor {
    name: String,
    session: Session,
}

impl Actor {
    pub fn named(name: impl Into<String>, session: Session) -> Self {
        Self { name: name.into(), session }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Perform a task or interaction.
    pub async fn attempts_to<P: Performable>(&mut self, performable: P) -> ScreenplayResult<()> {
        debug!("{} attempts to {}", self.name, performable.name());
        performable.perform_as(self).await
    }

    /// Answer a question about the current page state.
    pub async fn answer<Q: Question>(&mut self, question: Q) -> ScreenplayResult<Q::Answer> {
        question.answered_by(self).await
    }

    /// Direct access to the browsing ability.
    pub fn browser(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Shut the browser down cleanly. Dropping without retiring still kills
    /// the driver process, just less gracefully.
    pub async fn retire(mut self) -> ScreenplayResult<()> {
        self.session.close().await?;
        Ok(())
    }
}
