//! Interactive browse controller
//!
//! Wires a data source, a renderer, and an event source into the
//! search/navigate/reset loop. All collaborators are injected at
//! construction; the controller never looks anything up ambiently.

use colored::Colorize;

use crate::browse::session::BrowseSession;
use crate::dataset::DataSource;
use crate::search;
use crate::ui::{BrowseEvent, EventSource, ResultRenderer, UiError};

/// Errors that can occur while running the browse loop
///
/// Fetch failures are deliberately absent: the controller absorbs them
/// (logged to stderr, panel keeps its prior state) rather than aborting
/// the session.
#[derive(Debug, thiserror::Error)]
pub enum BrowseError {
    #[error("UI error: {0}")]
    Ui(#[from] UiError),
}

/// Browse session result type
pub type Result<T> = std::result::Result<T, BrowseError>;

/// Interactive controller over one browse session
pub struct BrowseController<S, R, E> {
    source: S,
    renderer: R,
    events: E,
    session: BrowseSession,
}

impl<S, R, E> BrowseController<S, R, E>
where
    S: DataSource,
    R: ResultRenderer,
    E: EventSource,
{
    /// Create a controller with its injected collaborators
    pub fn new(source: S, renderer: R, events: E) -> Self {
        Self {
            source,
            renderer,
            events,
            session: BrowseSession::new(),
        }
    }

    /// Current session state, for inspection
    #[must_use]
    pub const fn session(&self) -> &BrowseSession {
        &self.session
    }

    /// The renderer, for inspection
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run the browse loop until the user quits
    ///
    /// When `initial_query` is given, a search runs before the first event
    /// is read, exactly as if the user had submitted it.
    ///
    /// # Errors
    ///
    /// Returns [`BrowseError`] if rendering or event input fails. Fetch
    /// failures do not end the loop.
    pub fn run(&mut self, initial_query: Option<&str>) -> Result<()> {
        if let Some(query) = initial_query {
            self.handle_search(query)?;
        }

        loop {
            match self.events.next_event()? {
                BrowseEvent::Search(query) => self.handle_search(&query)?,
                BrowseEvent::Next => {
                    if self.session.next() {
                        self.render_current()?;
                    }
                }
                BrowseEvent::Prev => {
                    if self.session.prev() {
                        self.render_current()?;
                    }
                }
                BrowseEvent::Reset => {
                    self.session.reset();
                    self.renderer.hide_panel()?;
                }
                BrowseEvent::Quit => break,
            }
        }
        Ok(())
    }

    /// One search: fetch, filter, flatten, restart the cursor
    ///
    /// Every search re-fetches the dataset; no response is cached between
    /// searches. A failed fetch is logged and absorbed, leaving the panel
    /// in its prior state.
    fn handle_search(&mut self, query: &str) -> Result<()> {
        let dataset = match self.source.fetch() {
            Ok(dataset) => dataset,
            Err(e) => {
                eprintln!("{} {e}", "Error fetching recommendations:".red());
                return Ok(());
            }
        };

        let items = search::filter(&dataset, query).flatten();
        if self.session.show(items) {
            self.render_current()?;
        } else {
            self.renderer.show_empty()?;
        }
        Ok(())
    }

    fn render_current(&mut self) -> Result<()> {
        if let (Some(item), Some(nav)) = (self.session.current(), self.session.nav()) {
            self.renderer.render_card(item, nav)?;
        }
        Ok(())
    }
}
