use crate::model::ApiError;
use serde::Deserialize;
use serde_json::Value;

/// A player's chess.com handle. Displayed as-is and used as the route key.
pub type PlayerId = String;

#[derive(Debug, Deserialize)]
struct TitledPlayers {
    players: Vec<PlayerId>,
}

/// The GM roster as returned by the directory, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<PlayerId>,
}

impl Roster {
    pub fn new(players: Vec<PlayerId>) -> Self {
        Roster { players }
    }

    /// Parses the body of the titled-players endpoint.
    ///
    /// The body must be an object whose `players` field is an array of strings.
    pub fn from_json(body: &str) -> Result<Self, ApiError> {
        let value: Value = serde_json::from_str(body)?;
        let titled: TitledPlayers =
            serde_json::from_value(value).map_err(|_| ApiError::UnexpectedShape)?;
        Ok(Roster::new(titled.players))
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Case-insensitive substring match, keeping roster order.
    ///
    /// Surrounding whitespace in `query` is ignored; a blank query keeps every player.
    pub fn filter(&self, query: &str) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        self.players
            .iter()
            .filter(|player| query.is_empty() || player.to_lowercase().contains(&query))
            .map(String::as_str)
            .collect()
    }
}
