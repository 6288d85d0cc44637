//! # CLI Module
//!
//! This module provides the command-line interface layer for spotopcli, a
//! terminal client for browsing a listener's most-played tracks and artists
//! from the Spotify Web API. It implements all user-facing commands and
//! coordinates between the API client, the session, and the view layer.
//!
//! ## Command Categories
//!
//! ### One-Shot Queries
//!
//! - [`list_tracks`] - Prints the top-track table for one time range and exits
//! - [`list_artists`] - Prints the top-artist table for one time range and exits
//!
//! ### Interactive Browsing
//!
//! - [`browse`] - Runs the interactive viewer loop with range switching,
//!   token entry, and per-track detail lookups
//!
//! ## Architecture Design
//!
//! The CLI layer stays thin:
//!
//! ```text
//! CLI Layer (argument handling, input loop)
//!     ↓
//! View Layer (render cycles, output)
//!     ↓
//! API Layer (Spotify Web API requests)
//! ```
//!
//! One-shot commands talk to the API client directly and render a single
//! table. The interactive viewer delegates every data operation to
//! [`crate::view::ViewController`] so the fetch-and-render semantics live in
//! one place.
//!
//! ## Error Handling Philosophy
//!
//! Recoverable problems (bad input, a failed refresh) are reported with the
//! warning macro and the loop keeps running. One-shot commands treat a failed
//! request as fatal and exit non-zero through the error macro. Diagnostic
//! detail goes to the log facade rather than the screen.

mod top;
mod view;

pub use top::list_artists;
pub use top::list_tracks;
pub use view::browse;
pub use view::{Selection, ViewCommand, parse_view_command};
