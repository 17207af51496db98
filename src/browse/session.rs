//! Browser session state machine
//!
//! Three states over one in-memory cursor:
//!
//! - **Hidden**: nothing to show; no search has populated the panel since
//!   the last reset.
//! - **Empty**: the most recent search matched nothing. Behaves like Hidden
//!   but is distinguishable so the UI can explicitly hide navigation.
//! - **Showing**: a non-empty result list with a valid cursor.
//!
//! Invariant: whenever the panel is showing, `cursor < items.len()`. The
//! transitions below are the only mutations, and each preserves it.

use crate::search::ResultItem;
use crate::ui::NavState;

/// Visibility state of the result panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Panel {
    #[default]
    Hidden,
    Empty,
    Showing {
        items: Vec<ResultItem>,
        cursor: usize,
    },
}

/// Cursor state machine over a flattened result list
///
/// The session owns the current result list and nothing else; the dataset
/// it was filtered from is not its concern (every search re-fetches).
#[derive(Debug, Clone, Default)]
pub struct BrowseSession {
    panel: Panel,
}

impl BrowseSession {
    /// Create a session with a hidden panel
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly filtered result list, restarting the cursor at 0
    ///
    /// An empty list transitions to Empty instead. Returns true when the
    /// panel is showing afterwards.
    pub fn show(&mut self, items: Vec<ResultItem>) -> bool {
        self.panel = if items.is_empty() {
            Panel::Empty
        } else {
            Panel::Showing { items, cursor: 0 }
        };
        self.is_showing()
    }

    /// Step forward; no-op at the end of the list or while hidden
    ///
    /// Returns true when the cursor moved (caller re-renders).
    pub fn next(&mut self) -> bool {
        if let Panel::Showing { items, cursor } = &mut self.panel
            && *cursor + 1 < items.len()
        {
            *cursor += 1;
            return true;
        }
        false
    }

    /// Step backward; no-op at the start of the list or while hidden
    ///
    /// Returns true when the cursor moved (caller re-renders).
    pub fn prev(&mut self) -> bool {
        if let Panel::Showing { cursor, .. } = &mut self.panel
            && *cursor > 0
        {
            *cursor -= 1;
            return true;
        }
        false
    }

    /// Clear the panel
    pub fn reset(&mut self) {
        self.panel = Panel::Hidden;
    }

    /// The item under the cursor, if the panel is showing
    #[must_use]
    pub fn current(&self) -> Option<&ResultItem> {
        match &self.panel {
            Panel::Showing { items, cursor } => items.get(*cursor),
            Panel::Hidden | Panel::Empty => None,
        }
    }

    /// Navigation control visibility; `None` while the panel is not showing
    #[must_use]
    pub fn nav(&self) -> Option<NavState> {
        match &self.panel {
            Panel::Showing { items, cursor } => Some(NavState::of(*cursor, items.len())),
            Panel::Hidden | Panel::Empty => None,
        }
    }

    /// Whether the panel is showing a result
    #[must_use]
    pub const fn is_showing(&self) -> bool {
        matches!(self.panel, Panel::Showing { .. })
    }

    /// Whether the last search ran but matched nothing
    #[must_use]
    pub const fn is_empty_result(&self) -> bool {
        matches!(self.panel, Panel::Empty)
    }

    /// Zero-based cursor position, if the panel is showing
    #[must_use]
    pub const fn cursor(&self) -> Option<usize> {
        match &self.panel {
            Panel::Showing { cursor, .. } => Some(*cursor),
            Panel::Hidden | Panel::Empty => None,
        }
    }

    /// Number of items in the current result list
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.panel {
            Panel::Showing { items, .. } => items.len(),
            Panel::Hidden | Panel::Empty => 0,
        }
    }

    /// Whether there are no items to browse
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{BeachItem, TempleItem};

    fn items(count: usize) -> Vec<ResultItem> {
        (0..count)
            .map(|i| {
                ResultItem::Beach(BeachItem {
                    name: format!("Beach {i}"),
                    image_url: format!("https://example.com/{i}.jpg"),
                    description: "Sandy.".into(),
                })
            })
            .collect()
    }

    #[test]
    fn test_new_session_is_hidden() {
        let session = BrowseSession::new();
        assert!(!session.is_showing());
        assert!(!session.is_empty_result());
        assert_eq!(session.current(), None);
        assert_eq!(session.nav(), None);
        assert_eq!(session.cursor(), None);
    }

    #[test]
    fn test_show_starts_at_first_item() {
        let mut session = BrowseSession::new();
        assert!(session.show(items(3)));

        assert_eq!(session.cursor(), Some(0));
        assert_eq!(session.current().unwrap().title(), "Beach 0");
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_show_empty_list_hides_panel() {
        let mut session = BrowseSession::new();
        assert!(!session.show(Vec::new()));

        assert!(session.is_empty_result());
        assert!(!session.is_showing());
        assert_eq!(session.nav(), None);
    }

    #[test]
    fn test_next_and_prev_respect_bounds() {
        let mut session = BrowseSession::new();
        session.show(items(2));

        // At the start, prev is a no-op
        assert!(!session.prev());
        assert_eq!(session.cursor(), Some(0));

        assert!(session.next());
        assert_eq!(session.cursor(), Some(1));

        // At the end, next is a no-op
        assert!(!session.next());
        assert_eq!(session.cursor(), Some(1));

        assert!(session.prev());
        assert_eq!(session.cursor(), Some(0));
    }

    #[test]
    fn test_navigation_noop_while_hidden() {
        let mut session = BrowseSession::new();
        assert!(!session.next());
        assert!(!session.prev());

        session.show(Vec::new());
        assert!(!session.next());
        assert!(!session.prev());
    }

    #[test]
    fn test_nav_visibility_invariant() {
        let mut session = BrowseSession::new();
        session.show(items(4));

        loop {
            let nav = session.nav().unwrap();
            let cursor = session.cursor().unwrap();
            assert_eq!(nav.prev_visible, cursor > 0);
            assert_eq!(nav.next_visible, cursor < session.len() - 1);
            if !session.next() {
                break;
            }
        }
        assert_eq!(session.cursor(), Some(3));
    }

    #[test]
    fn test_single_result_hides_both_controls() {
        let mut session = BrowseSession::new();
        session.show(vec![ResultItem::Temple(TempleItem {
            name: "Angkor Wat".into(),
            image_url: "https://example.com/angkor.jpg".into(),
            description: "Khmer temple complex.".into(),
        })]);

        let nav = session.nav().unwrap();
        assert!(!nav.prev_visible);
        assert!(!nav.next_visible);
    }

    #[test]
    fn test_new_search_restarts_cursor() {
        let mut session = BrowseSession::new();
        session.show(items(3));
        session.next();
        session.next();
        assert_eq!(session.cursor(), Some(2));

        session.show(items(2));
        assert_eq!(session.cursor(), Some(0));
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_reset_hides_panel() {
        let mut session = BrowseSession::new();
        session.show(items(3));
        session.next();

        session.reset();
        assert!(!session.is_showing());
        assert!(!session.is_empty_result());
        assert_eq!(session.current(), None);
    }
}
