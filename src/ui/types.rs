//! Common types for the UI abstraction layer

/// User actions that drive the result browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseEvent {
    /// Run a new search with the given query
    Search(String),
    /// Step to the next result
    Next,
    /// Step to the previous result
    Prev,
    /// Clear the panel and the search input
    Reset,
    /// Leave the browse loop
    Quit,
}

/// Navigation control visibility for the current cursor position
///
/// Visibility is a pure function of `(cursor, total)`: the previous control
/// is visible iff the cursor can move back, the next control iff it can
/// move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    /// Whether the "previous" control is visible
    pub prev_visible: bool,
    /// Whether the "next" control is visible
    pub next_visible: bool,
    /// Zero-based cursor position
    pub position: usize,
    /// Number of items in the result list
    pub total: usize,
}

impl NavState {
    /// Derive control visibility from a cursor position and list length
    #[must_use]
    pub const fn of(cursor: usize, total: usize) -> Self {
        Self {
            prev_visible: cursor > 0,
            next_visible: cursor + 1 < total,
            position: cursor,
            total,
        }
    }
}
