//! Spotify Catalog Browser Library
//!
//! This library turns `spotify:` URIs into directory listings. A small static
//! tree (top lists, your music, playlists) is always available; everything
//! below it is fetched on demand from the Spotify Web API and translated into
//! lightweight [`types::Ref`] entries.
//!
//! # Modules
//!
//! - `browse` - URI routing, the static tree and the browse entry point
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Cached token access
//! - `spotify` - Catalog client contract, link parsing and Web API client
//! - `translator` - Raw catalog record to listing entry conversion
//! - `types` - Data structures and type definitions
//! - `utils` - Pagination helpers
//!
//! # Example
//!
//! ```
//! use sporlbrowse::{Browser, config::BrowseConfig, spotify::WebClient};
//!
//! #[tokio::main]
//! async fn main() -> sporlbrowse::Res<()> {
//!     let config = BrowseConfig::from_env();
//!     let client = WebClient::from_env(config.clone()).await;
//!     let refs = Browser::new()
//!         .browse(&config, Some(&client), "spotify:directory")
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod browse;
pub mod cli;
pub mod config;
pub mod management;
pub mod spotify;
pub mod translator;
pub mod types;
pub mod utils;

pub use browse::Browser;
pub use types::{Ref, RefKind};

/// Result type for operations that may fail with a transport or I/O error.
///
/// Errors are boxed trait objects with `Send + Sync` bounds so they can cross
/// `.await` points and task boundaries. Recoverable browse conditions (bad
/// URIs, missing session) never surface as errors; only failures raised by
/// the catalog transport do.
///
/// # Example
///
/// ```
/// use sporlbrowse::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line prefixed with a blue `o`.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Browsing {}", uri);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line prefixed with a green `✓`.
///
/// # Example
///
/// ```
/// success!("Listed {} entries", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error line prefixed with a red `!` and exits with code 1.
///
/// Only for fatal conditions in the binary; library code returns errors
/// instead.
///
/// # Example
///
/// ```
/// error!("Failed to browse {}: {}", uri, err);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning line prefixed with a yellow `!`.
///
/// # Example
///
/// ```
/// warning!("Not logged in, only static directories are available");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
