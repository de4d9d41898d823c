use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    Browser,
    config::BrowseConfig,
    error, info,
    management::TokenManager,
    spotify::{CatalogClient, WebClient},
    success,
    types::RefTableRow,
    warning,
};

/// Lists the entries under `uri` and prints them.
///
/// Static directories are listed even without a token. For everything else
/// a token is needed, either from `SPOTIFY_ACCESS_TOKEN` or the cached token
/// file; without one the listing is empty and a warning says why.
///
/// # Arguments
///
/// * `uri` - The `spotify:` URI to browse
/// * `json` - Print the entries as pretty JSON instead of a table
///
/// # Error Handling
///
/// Transport errors from the Web API terminate the program with an error
/// message. Unknown or malformed URIs simply produce an empty listing.
pub async fn browse(uri: String, json: bool) {
    let config = BrowseConfig::from_env();
    let client = WebClient::from_env(config.clone()).await;
    let browser = Browser::new();

    if !client.logged_in() && browser.tree().children(&uri).is_none() {
        warning!(
            "No valid Spotify token found. Set SPOTIFY_ACCESS_TOKEN or provide {}",
            TokenManager::token_path().display()
        );
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Browsing {}...", uri));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = browser.browse(&config, Some(&client), &uri).await;
    pb.finish_and_clear();

    let refs = match result {
        Ok(refs) => refs,
        Err(e) => error!("Failed to browse {}: {}", uri, e),
    };

    if json {
        match serde_json::to_string_pretty(&refs) {
            Ok(out) => println!("{}", out),
            Err(e) => error!("Failed to serialize listing. Err: {}", e),
        }
        return;
    }

    if refs.is_empty() {
        info!("Nothing to list under {}", uri);
        return;
    }

    let count = refs.len();
    let table_rows: Vec<RefTableRow> = refs.into_iter().map(RefTableRow::from).collect();
    println!("{}", Table::new(table_rows));
    success!("Listed {} entries", count);
}
