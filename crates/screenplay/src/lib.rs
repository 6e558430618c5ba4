//! Screenplay vocabulary for UiProbe
//!
//! An [`Actor`] owns a browser [`Session`](uiprobe_browser::Session) and
//! performs [`Performable`] tasks and answers [`Question`]s. Page objects
//! compose these into named flows; step definitions stay one-line glue.
//!
//! The vocabulary is deliberately small: `Navigate`, `Reload`, `Enter`,
//! `Click`, `WaitFor` on the doing side; `Text`, `AllText`, `Attribute` on
//! the asking side; `Ensure` for assertions and [`ContentSnapshot`] for
//! before/after page captures.

pub mod actor;
pub mod ensure;
pub mod error;
pub mod interaction;
pub mod question;
pub mod snapshot;
pub mod target;
pub mod task;
pub mod text;

pub use actor::Actor;
pub use ensure::Ensure;
pub use error::{ScreenplayError, ScreenplayResult};
pub use interaction::{Click, Enter, Navigate, Reload, WaitFor};
pub use question::{AllText, Attribute, Question, Text};
pub use snapshot::ContentSnapshot;
pub use target::{Strategy, Target};
pub use task::{Performable, Task};
