/// Interval of the "last online" clock.
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub tick_interval_ms: u32,
}

impl Config {
    pub fn new() -> Self {
        Self {
            api_base_url: env!("CHESS_API_URL").to_string(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Endpoint listing every player holding the GM title.
    pub fn titled_players_url(&self) -> String {
        format!("{}/titled/GM", self.api_base_url.trim_end_matches('/'))
    }

    /// Endpoint of a single player; `encoded_username` must already be URL-encoded.
    pub fn player_url(&self, encoded_username: &str) -> String {
        format!(
            "{}/player/{}",
            self.api_base_url.trim_end_matches('/'),
            encoded_username
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
