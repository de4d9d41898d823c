//! Configuration management for the Spotify catalog browser.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage the Web API
//! location, the optional access token override, and the paging parameters used
//! when listing remote collections.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

/// Default Spotify Web API base URL.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Default page size for paginated listings. The Web API caps it at 50.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Default market, letting the API derive it from the user's token.
pub const DEFAULT_MARKET: &str = "from_token";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `sporlbrowse/.env`.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/sporlbrowse/.env`
/// - macOS: `~/Library/Application Support/sporlbrowse/.env`
/// - Windows: `%LOCALAPPDATA%/sporlbrowse/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the file was loaded or does not exist, or an error
/// string if directory creation fails or the file cannot be parsed.
///
/// # Example
///
/// ```
/// use sporlbrowse::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporlbrowse/.env");
    path
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL` and falls back to [`DEFAULT_API_URL`]. A trailing
/// slash is stripped so endpoint paths can be appended with `/`.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns an access token supplied through `SPOTIFY_ACCESS_TOKEN`, if any.
///
/// When set, it takes precedence over the cached token file.
pub fn spotify_access_token() -> Option<String> {
    env::var("SPOTIFY_ACCESS_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty())
}

/// Configuration handed to a browse request.
///
/// Routing itself does not look at it; it exists so callers can pass the
/// same object they use for the rest of their browse contract, and so the
/// web client knows how large its pages should be and which market to ask for.
///
/// The defaults (`limit=50`, `market=from_token`) are the values every paged
/// browse request sends. Setting `SPOTIFY_BROWSE_PAGE_LIMIT` or
/// `SPOTIFY_MARKET` deliberately overrides them for all of those requests;
/// the listings stay complete since every page is still followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseConfig {
    /// Items requested per page (1-50).
    pub page_limit: u32,
    /// Market passed to endpoints that filter by availability.
    pub market: String,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        BrowseConfig {
            page_limit: DEFAULT_PAGE_LIMIT,
            market: DEFAULT_MARKET.to_string(),
        }
    }
}

impl BrowseConfig {
    /// Builds the configuration from `SPOTIFY_BROWSE_PAGE_LIMIT` and
    /// `SPOTIFY_MARKET`, using defaults for anything missing or invalid.
    /// The page limit is clamped to `1..=50`.
    pub fn from_env() -> Self {
        let page_limit = env::var("SPOTIFY_BROWSE_PAGE_LIMIT")
            .ok()
            .and_then(|v| v.trim().parse::<u32>().ok())
            .map(|v| v.clamp(1, DEFAULT_PAGE_LIMIT))
            .unwrap_or(DEFAULT_PAGE_LIMIT);

        let market = env::var("SPOTIFY_MARKET")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MARKET.to_string());

        BrowseConfig { page_limit, market }
    }
}
