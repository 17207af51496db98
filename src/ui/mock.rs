//! Mock renderer and scripted events for testing

use std::collections::VecDeque;

use super::error::Result;
use super::traits::{EventSource, ResultRenderer};
use super::types::{BrowseEvent, NavState};
use crate::search::ResultItem;

/// Renderer that records calls instead of writing to a terminal
///
/// Useful for testing without capturing stdout
#[derive(Debug, Clone, Default)]
pub struct MockRenderer {
    /// Every rendered card with its navigation state, in order
    pub cards: Vec<(ResultItem, NavState)>,
    /// Number of empty-result notifications
    pub empty_count: usize,
    /// Number of panel hides (resets)
    pub hide_count: usize,
}

impl MockRenderer {
    /// Create an empty recording renderer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Title of the most recently rendered card
    #[must_use]
    pub fn last_title(&self) -> Option<&str> {
        self.cards.last().map(|(item, _)| item.title())
    }

    /// Navigation state of the most recently rendered card
    #[must_use]
    pub fn last_nav(&self) -> Option<NavState> {
        self.cards.last().map(|(_, nav)| *nav)
    }
}

impl ResultRenderer for MockRenderer {
    fn render_card(&mut self, item: &ResultItem, nav: NavState) -> Result<()> {
        self.cards.push((item.clone(), nav));
        Ok(())
    }

    fn show_empty(&mut self) -> Result<()> {
        self.empty_count += 1;
        Ok(())
    }

    fn hide_panel(&mut self) -> Result<()> {
        self.hide_count += 1;
        Ok(())
    }
}

/// Event source that replays a fixed script
///
/// Yields [`BrowseEvent::Quit`] once the script is exhausted, so a
/// controller run always terminates.
#[derive(Debug, Clone)]
pub struct ScriptedEvents {
    queue: VecDeque<BrowseEvent>,
}

impl ScriptedEvents {
    /// Create a source replaying the given events in order
    #[must_use]
    pub fn new(events: impl IntoIterator<Item = BrowseEvent>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> Result<BrowseEvent> {
        Ok(self.queue.pop_front().unwrap_or(BrowseEvent::Quit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{BeachItem, ResultItem};

    #[test]
    fn test_mock_renderer_records_cards() {
        let mut renderer = MockRenderer::new();
        let item = ResultItem::Beach(BeachItem {
            name: "Bondi Beach".into(),
            image_url: "https://example.com/bondi.jpg".into(),
            description: "Sydney surf beach.".into(),
        });

        renderer.render_card(&item, NavState::of(0, 1)).unwrap();
        renderer.show_empty().unwrap();
        renderer.hide_panel().unwrap();

        assert_eq!(renderer.cards.len(), 1);
        assert_eq!(renderer.last_title(), Some("Bondi Beach"));
        assert_eq!(renderer.empty_count, 1);
        assert_eq!(renderer.hide_count, 1);
    }

    #[test]
    fn test_scripted_events_replay_then_quit() {
        let mut events = ScriptedEvents::new([BrowseEvent::Next, BrowseEvent::Prev]);

        assert_eq!(events.next_event().unwrap(), BrowseEvent::Next);
        assert_eq!(events.next_event().unwrap(), BrowseEvent::Prev);
        assert_eq!(events.next_event().unwrap(), BrowseEvent::Quit);
        assert_eq!(events.next_event().unwrap(), BrowseEvent::Quit);
    }
}
