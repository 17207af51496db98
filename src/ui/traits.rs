//! Core traits for the UI abstraction layer

use super::error::Result;
use super::types::{BrowseEvent, NavState};
use crate::search::ResultItem;

/// Trait for result panel renderers
///
/// Implementations draw one result card at a time. The renderer
/// pattern-matches on the [`ResultItem`] variant for category-specific
/// presentation (city cards get a country line) rather than probing for
/// optional fields.
pub trait ResultRenderer {
    /// Render the current result card with its navigation state
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    fn render_card(&mut self, item: &ResultItem, nav: NavState) -> Result<()>;

    /// A search ran and matched nothing; the panel stays hidden and
    /// navigation controls with it
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    fn show_empty(&mut self) -> Result<()>;

    /// Hide the panel entirely (user reset)
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    fn hide_panel(&mut self) -> Result<()>;
}

/// Trait for browse event sources
///
/// Implementations block until the user produces the next action. The
/// terminal implementation reads keys; tests replay a script.
pub trait EventSource {
    /// Wait for and return the next browse event
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    fn next_event(&mut self) -> Result<BrowseEvent>;
}
