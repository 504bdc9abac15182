//! Spotify Web API client library
//!
//! A thin wrapper around the Spotify Web API: one method per endpoint, a
//! bearer token header on every request, and typed responses. The library also
//! carries the pieces the `spotify-rg` binary needs around the client.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local login callback server
//! - `cli` - Command-line subcommand implementations
//! - `config` - Configuration from `.env` and environment variables
//! - `error` - Crate error type
//! - `server` - Local HTTP server for the login callback
//! - `spotify` - The [`spotify::ApiClient`] and its transport
//! - `types` - Response and request data structures
//! - `utils` - URL encoding, table rows and other helpers
//!
//! # Example
//!
//! ```
//! use spotify_rg::{config::{self, ClientConfig}, spotify::ApiClient};
//!
//! #[tokio::main]
//! async fn main() -> spotify_rg::Result<()> {
//!     config::load_env().await?;
//!     let client = ApiClient::from_config(ClientConfig::from_env());
//!     let album = client.get_album("4aawyAB9vmqN3uQ7FjRGTy").await?;
//!     println!("{}", album.name);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, Result};

/// Prints an informational line with a blue `o` marker.
///
/// Takes the same arguments as `println!`.
///
/// ```
/// info!("Waiting for authorization at {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line with a green checkmark.
///
/// ```
/// success!("Playlist {} created", playlist.name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red error line and exits the process with status 1.
///
/// The expansion diverges, so it can stand in for a value in a `match` arm.
///
/// ```
/// let album = match result {
///     Ok(album) => album,
///     Err(e) => error!("Request failed: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow warning line for recoverable problems.
///
/// ```
/// warning!("SPOTIFY_API_TOKEN is not set, requests will be rejected");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
