//! Built-in interactions

use std::time::Duration;

use async_trait::async_trait;
use uiprobe_browser::WaitState;

use crate::actor::Actor;
use crate::error::ScreenplayResult;
use crate::target::Target;
use crate::task::Performable;

/// Navigate the page to an absolute URL.
pub struct Navigate {
    url: String,
}

impl Navigate {
    pub fn to(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl Performable for Navigate {
    fn name(&self) -> String {
        format!("navigate to {}", self.url)
    }

    async fn perform_as(&self, actor: &mut Actor) -> ScreenplayResult<()> {
        actor.browser().goto(&self.url).await?;
        Ok(())
    }
}

/// Reload the current page, suspending until the navigation completes.
pub struct Reload;

#[async_trait]
impl Performable for Reload {
    fn name(&self) -> String {
        "reload the page".to_string()
    }

    async fn perform_as(&self, actor: &mut Actor) -> ScreenplayResult<()> {
        actor.browser().reload().await?;
        Ok(())
    }
}

/// Type a value into an input field.
pub struct Enter {
    value: String,
    target: Target,
}

impl Enter {
    pub fn the_value(value: impl Into<String>) -> EnterBuilder {
        EnterBuilder { value: value.into() }
    }
}

pub struct EnterBuilder {
    value: String,
}

impl EnterBuilder {
    pub fn into_the(self, target: Target) -> Enter {
        Enter { value: self.value, target }
    }
}

#[async_trait]
impl Performable for Enter {
    fn name(&self) -> String {
        format!("enter a value into the {}", self.target)
    }

    async fn perform_as(&self, actor: &mut Actor) -> ScreenplayResult<()> {
        actor.browser().fill(&self.target.selector(), &self.value).await?;
        Ok(())
    }
}

/// Click an element.
pub struct Click {
    target: Target,
}

impl Click {
    pub fn on(target: Target) -> Self {
        Self { target }
    }
}

#[async_trait]
impl Performable for Click {
    fn name(&self) -> String {
        format!("click on the {}", self.target)
    }

    async fn perform_as(&self, actor: &mut Actor) -> ScreenplayResult<()> {
        actor.browser().click(&self.target.selector()).await?;
        Ok(())
    }
}

/// Wait until an element is visible.
pub struct WaitFor {
    target: Target,
    timeout: Duration,
}

impl WaitFor {
    pub fn the(target: Target) -> Self {
        Self { target, timeout: Duration::from_secs(5) }
    }

    pub fn for_at_most(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl Performable for WaitFor {
    fn name(&self) -> String {
        format!("wait for the {}", self.target)
    }

    async fn perform_as(&self, actor: &mut Actor) -> ScreenplayResult<()> {
        actor
            .browser()
            .wait_for(&self.target.selector(), WaitState::Visible, self.timeout)
            .await?;
        Ok(())
    }
}
