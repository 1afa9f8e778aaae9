#![allow(dead_code)]

use async_trait::async_trait;
use futures::channel::oneshot;
use gm_explorer::model::{ApiError, PlayerDirectory, PlayerProfile, Roster};
use serde_json::json;
use std::cell::RefCell;
use std::collections::HashMap;

type Reply<T> = oneshot::Receiver<Result<T, ApiError>>;

/// Directory whose answers are released by the test, one player at a time.
///
/// Unknown usernames answer `HTTP 404`.
#[derive(Default)]
pub struct ScriptedDirectory {
    roster: RefCell<Option<Result<Roster, ApiError>>>,
    profiles: RefCell<HashMap<String, Reply<PlayerProfile>>>,
}

impl ScriptedDirectory {
    pub fn with_roster(roster: Result<Roster, ApiError>) -> Self {
        ScriptedDirectory {
            roster: RefCell::new(Some(roster)),
            ..Default::default()
        }
    }

    pub fn expect_profile(
        &self,
        username: &str,
    ) -> oneshot::Sender<Result<PlayerProfile, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.profiles.borrow_mut().insert(username.to_string(), rx);
        tx
    }
}

#[async_trait(?Send)]
impl PlayerDirectory for ScriptedDirectory {
    async fn titled_players(&self) -> Result<Roster, ApiError> {
        self.roster
            .borrow_mut()
            .take()
            .unwrap_or(Err(ApiError::Network("no roster scripted".to_string())))
    }

    async fn player_profile(&self, username: &str) -> Result<PlayerProfile, ApiError> {
        let reply = self.profiles.borrow_mut().remove(username);
        match reply {
            Some(reply) => reply
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("dropped".to_string()))),
            None => Err(ApiError::Status(404)),
        }
    }
}

pub fn profile(username: &str) -> PlayerProfile {
    PlayerProfile::from_value(json!({ "username": username, "last_online": 1_700_000_000 }))
}

pub fn named_profile(username: &str, name: &str) -> PlayerProfile {
    PlayerProfile::from_value(json!({
        "username": username,
        "name": name,
        "last_online": 1_700_000_000
    }))
}
