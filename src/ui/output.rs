//! Terminal card renderer

use colored::Colorize;

use super::error::Result;
use super::traits::ResultRenderer;
use super::types::NavState;
use crate::search::ResultItem;

/// Renders result cards as colored text on stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalRenderer {
    quiet: bool,
}

impl TerminalRenderer {
    /// Create a renderer; `quiet` suppresses informational lines
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ResultRenderer for TerminalRenderer {
    fn render_card(&mut self, item: &ResultItem, nav: NavState) -> Result<()> {
        println!();
        println!("{}", item.title().bold());
        println!("{}", item.image_url().underline());
        println!("{}", item.description());
        if let ResultItem::City(city) = item {
            println!("{} {}", "Country:".bold(), city.country_name);
        }

        if !self.quiet {
            let mut controls = Vec::new();
            if nav.prev_visible {
                controls.push("[p] prev");
            }
            if nav.next_visible {
                controls.push("[n] next");
            }
            println!(
                "{} {}",
                format!("({}/{})", nav.position + 1, nav.total).dimmed(),
                controls.join("  ")
            );
        }
        Ok(())
    }

    fn show_empty(&mut self) -> Result<()> {
        if !self.quiet {
            println!("No matching destinations.");
        }
        Ok(())
    }

    fn hide_panel(&mut self) -> Result<()> {
        if !self.quiet {
            println!("Search cleared.");
        }
        Ok(())
    }
}
