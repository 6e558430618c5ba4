//! Performables: the doing side of the vocabulary

use async_trait::async_trait;

use crate::actor::Actor;
use crate::error::ScreenplayResult;

/// Anything an actor can attempt: a single interaction or a composed task.
#[async_trait]
pub trait Performable: Send + Sync {
    /// Human-readable name for logs and failure output.
    fn name(&self) -> String;

    async fn perform_as(&self, actor: &mut Actor) -> ScreenplayResult<()>;
}

/// A named sequence of performables, executed in order, stopping at the
/// first failure.
pub struct Task {
    name: String,
    steps: Vec<Box<dyn Performable>>,
}

impl Task {
    pub fn where_(name: impl Into<String>, steps: Vec<Box<dyn Performable>>) -> Self {
        Self { name: name.into(), steps }
    }
}

#[async_trait]
impl Performable for Task {
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn perform_as(&self, actor: &mut Actor) -> ScreenplayResult<()> {
        for step in &self.steps {
            step.perform_as(actor).await?;
        }
        Ok(())
    }
}
