//! Favorites list lookups.

use async_trait::async_trait;
use reqwest::StatusCode;

use elphi_calendar_core::upstream::{FavoritesList, FavoritesSource, Result, UpstreamError};

use super::ElphiClient;

#[async_trait]
impl FavoritesSource for ElphiClient {
    async fn fetch_favorites(&self, user_id: &str) -> Result<FavoritesList> {
        let url = format!("{}/{}", self.favorites_url, urlencoding::encode(user_id));
        let response = self.get(&url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(UpstreamError::InvalidUserId(user_id.to_string()));
        }
        let body = self.body(&url, response).await?;
        let favorites = FavoritesList::from_json(&body, &url)?;
        tracing::debug!(user_id, events = favorites.len(), "Fetched favorites");
        Ok(favorites)
    }
}
