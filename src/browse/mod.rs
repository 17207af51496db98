//! Result browser
//!
//! A cursor state machine over the flattened result list
//! ([`BrowseSession`]) plus an interactive controller
//! ([`BrowseController`]) that wires an injected data source, renderer,
//! and event source into the search/navigate/reset loop.

pub mod controller;
pub mod session;

pub use controller::{BrowseController, BrowseError};
pub use session::BrowseSession;
