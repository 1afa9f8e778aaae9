use crate::config::Config;
use crate::model::{ApiError, PlayerDirectory, PlayerProfile, Roster};
use async_trait::async_trait;
use gloo_net::http::Request;

/// [`PlayerDirectory`] backed by the chess.com published-data API.
#[derive(Debug, Clone, PartialEq)]
pub struct ChessComClient {
    config: Config,
}

impl ChessComClient {
    pub fn new(config: Config) -> Self {
        ChessComClient { config }
    }

    async fn get_text(&self, url: &str) -> Result<String, ApiError> {
        log::debug!("GET {}", url);
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        if !response.ok() {
            log::warn!("GET {} answered {}", url, response.status());
            return Err(ApiError::Status(response.status()));
        }

        response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }
}

#[async_trait(?Send)]
impl PlayerDirectory for ChessComClient {
    async fn titled_players(&self) -> Result<Roster, ApiError> {
        let body = self.get_text(&self.config.titled_players_url()).await?;
        let roster = Roster::from_json(&body)?;
        log::debug!("Loaded {} titled players", roster.len());
        Ok(roster)
    }

    async fn player_profile(&self, username: &str) -> Result<PlayerProfile, ApiError> {
        let encoded = String::from(js_sys::encode_uri_component(username));
        let body = self.get_text(&self.config.player_url(&encoded)).await?;
        PlayerProfile::from_json(&body)
    }
}
