//! Voyagr - search and browse travel recommendations from the terminal
//!
//! This library fetches a travel recommendation dataset over HTTP, filters it
//! by a case-insensitive substring query across three categories (beaches,
//! cities grouped under countries, temples), and presents the matches one card
//! at a time with previous/next navigation.

use thiserror::Error;

pub mod browse;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum VoyagrError {
    /// Dataset fetch or decode error
    #[error("Fetch error: {0}")]
    FetchError(#[from] dataset::FetchError),
    /// Browse session error
    #[error("Browse error: {0}")]
    BrowseError(#[from] browse::BrowseError),
    /// UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
