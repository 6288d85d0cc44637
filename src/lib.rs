//! Spotify Top Items Viewer Library
//!
//! This library backs a small terminal client that fetches a listener's
//! most-played tracks and artists from the Spotify Web API and presents
//! them as interactive numbered lists with a per-track detail view.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error types for API communication
//! - `session` - In-memory credential lifecycle
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Pure formatting and parsing helpers
//! - `view` - Render-cycle orchestration and output rendering
//!
//! # Example
//!
//! ```
//! use spotopcli::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> spotopcli::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod view;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern at the binary edges using a
/// boxed dynamic error trait object, keeping Send + Sync bounds for async
/// contexts. Library internals use the typed errors in [`error`].
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`. Used for general information
/// and status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Time range: {}", range);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`. Used to confirm that an
/// operation completed.
///
/// # Example
///
/// ```
/// success!("Loaded {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Accepts the same arguments as `println!`, then terminates the process
/// with exit code 1. Only for unrecoverable errors at the CLI edge.
///
/// # Example
///
/// ```
/// error!("Cannot load environment: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Accepts the same arguments as `println!`. Used for recoverable issues
/// the user should notice.
///
/// # Example
///
/// ```
/// warning!("Fell back to the default API base URL");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
