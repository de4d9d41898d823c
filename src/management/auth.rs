use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::types::Token;

/// Seconds before the real expiry at which a token is treated as expired.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// Read-only access to the cached OAuth token.
///
/// Obtaining and refreshing tokens is left to whatever tool wrote the cache;
/// this manager only loads it and tells whether it is still usable.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, String> {
        Self::load_from(&Self::token_path()).await
    }

    pub async fn load_from(path: &Path) -> Result<Self, String> {
        let content = async_fs::read_to_string(path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        let expires_at = self.token.obtained_at.saturating_add(self.token.expires_in);
        now.saturating_add(EXPIRY_MARGIN_SECS) >= expires_at
    }

    pub fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("sporlbrowse/cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
