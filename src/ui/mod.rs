//! UI abstraction layer
//!
//! The browse controller never talks to a terminal directly: it renders
//! through a [`ResultRenderer`] and reads user actions from an
//! [`EventSource`]. The terminal implementations live in `output` and
//! `input`; `mock` provides recording/scripted implementations for tests
//! and custom frontends.

pub mod error;
pub mod input;
pub mod mock;
pub mod output;
pub mod traits;
pub mod types;

pub use error::{Result, UiError};
pub use input::KeyEvents;
pub use mock::{MockRenderer, ScriptedEvents};
pub use output::TerminalRenderer;
pub use traits::{EventSource, ResultRenderer};
pub use types::{BrowseEvent, NavState};
