//! Terminal key input for browse navigation
//!
//! Keys are read in raw mode so single presses navigate without Enter.
//! The search key drops back to cooked mode for line-based query entry,
//! then the next call re-enables raw mode.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use super::error::Result;
use super::traits::EventSource;
use super::types::BrowseEvent;

/// Key mapping:
/// - `/` or `s`: prompt for a new search query
/// - `n` / Right: next result
/// - `p` / Left: previous result
/// - `r`: reset (clear panel and search input)
/// - `q` / Esc / Ctrl+C: quit
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEvents;

impl KeyEvents {
    /// Create a key event source
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Outcome of one raw-mode key read
enum KeyOutcome {
    Event(BrowseEvent),
    PromptSearch,
}

impl EventSource for KeyEvents {
    fn next_event(&mut self) -> Result<BrowseEvent> {
        enable_raw_mode()?;
        let outcome = read_key();
        // Raw mode must not leak into the prompt or the caller's output
        disable_raw_mode()?;

        match outcome? {
            KeyOutcome::Event(ev) => Ok(ev),
            KeyOutcome::PromptSearch => Ok(BrowseEvent::Search(prompt_query()?)),
        }
    }
}

fn read_key() -> Result<KeyOutcome> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(KeyOutcome::Event(BrowseEvent::Quit));
        }
        let outcome = match key.code {
            KeyCode::Right | KeyCode::Char('n') => KeyOutcome::Event(BrowseEvent::Next),
            KeyCode::Left | KeyCode::Char('p') => KeyOutcome::Event(BrowseEvent::Prev),
            KeyCode::Char('r') => KeyOutcome::Event(BrowseEvent::Reset),
            KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Event(BrowseEvent::Quit),
            KeyCode::Char('/') | KeyCode::Char('s') => KeyOutcome::PromptSearch,
            _ => continue,
        };
        return Ok(outcome);
    }
}

fn prompt_query() -> Result<String> {
    print!("Search: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
