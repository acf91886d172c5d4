//! Playlist Piper Library
//!
//! This library implements a small backend service that copies Spotify
//! playlists into YouTube playlists. It wraps the Google/Spotify OAuth flows
//! and the handful of REST calls both providers expose, and glues them
//! together behind an HTTP surface.
//!
//! # Modules
//!
//! - `api` - HTTP request handlers, one per adapter/orchestrator operation
//! - `config` - Configuration management and environment variables
//! - `copy` - The playlist copy orchestrator
//! - `error` - Error taxonomy and HTTP status mapping
//! - `matching` - Search result filtering and view-count ranking
//! - `server` - HTTP server setup and routing
//! - `spotify` - Spotify Accounts/Web API client
//! - `types` - Data structures and type definitions
//! - `youtube` - Google OAuth and YouTube Data API client

pub mod api;
pub mod config;
pub mod copy;
pub mod error;
pub mod matching;
pub mod server;
pub mod spotify;
pub mod types;
pub mod youtube;

/// Prints an informational message with a blue bullet point.
///
/// Used for general status updates, e.g. per-track progress while a
/// playlist copy is running.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for unrecoverable startup failures (missing configuration, unusable
/// listen address). Request-level failures go through
/// [`ApiError`](crate::error::ApiError) instead.
#[macro_export]
macro_rules! fatal {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
