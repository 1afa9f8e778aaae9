use crate::model::{ApiError, PlayerProfile, Roster};
use async_trait::async_trait;

/// Read-only source of players and their profiles.
///
/// Futures are `?Send`: every implementation lives on the browser's single thread.
#[async_trait(?Send)]
pub trait PlayerDirectory {
    /// All players holding the GM title.
    async fn titled_players(&self) -> Result<Roster, ApiError>;

    async fn player_profile(&self, username: &str) -> Result<PlayerProfile, ApiError>;
}
