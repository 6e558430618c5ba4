//! Questions: the asking side of the vocabulary

use async_trait::async_trait;

use crate::actor::Actor;
use crate::error::{ScreenplayError, ScreenplayResult};
use crate::target::Target;

/// Something an actor can find out about the current page.
#[async_trait]
pub trait Question: Send + Sync {
    type Answer;

    async fn answered_by(&self, actor: &mut Actor) -> ScreenplayResult<Self::Answer>;
}

/// Text of the first element matching a target.
pub struct Text {
    target: Target,
}

impl Text {
    pub fn of(target: Target) -> Self {
        Self { target }
    }

    /// Texts of every matching element, in document order.
    pub fn of_all(target: Target) -> AllText {
        AllText { target }
    }
}

#[async_trait]
impl Question for Text {
    type Answer = String;

    async fn answered_by(&self, actor: &mut Actor) -> ScreenplayResult<String> {
        Ok(actor.browser().text(&self.target.selector()).await?)
    }
}

/// Texts of all elements matching a target. Zero matches is an empty
/// answer, not a failure.
pub struct AllText {
    target: Target,
}

#[async_trait]
impl Question for AllText {
    type Answer = Vec<String>;

    async fn answered_by(&self, actor: &mut Actor) -> ScreenplayResult<Vec<String>> {
        Ok(actor.browser().text_all(&self.target.selector()).await?)
    }
}

/// Value of a named attribute on the first element matching a target.
/// A missing attribute is an error, a present-but-empty one is not.
pub struct Attribute {
    name: String,
    target: Target,
}

impl Attribute {
    pub fn called(name: impl Into<String>) -> AttributeBuilder {
        AttributeBuilder { name: name.into() }
    }
}

pub struct AttributeBuilder {
    name: String,
}

impl AttributeBuilder {
    pub fn of(self, target: Target) -> Attribute {
        Attribute { name: self.name, target }
    }
}

#[async_trait]
impl Question for Attribute {
    type Answer = String;

    async fn answered_by(&self, actor: &mut Actor) -> ScreenplayResult<String> {
        let value = actor
            .browser()
            .attribute(&self.target.selector(), &self.name)
            .await?;
        value.ok_or_else(|| ScreenplayError::MissingAttribute {
            target: self.target.description().to_string(),
            name: self.name.clone(),
        })
    }
}
