//! # GM Explorer
//!
//! Browse the chess.com Grandmaster roster and follow how long ago each
//! player was last online.

pub mod config;
pub mod model;

#[cfg(feature = "yew")]
pub mod api;
#[cfg(feature = "yew")]
pub mod app;
#[cfg(feature = "yew")]
pub mod components;
#[cfg(feature = "yew")]
pub mod hooks;
#[cfg(feature = "yew")]
pub mod pages;
#[cfg(feature = "yew")]
pub mod providers;
#[cfg(feature = "yew")]
pub mod route;

#[cfg(feature = "yew")]
pub use app::App;

pub mod prelude {
    #[cfg(feature = "yew")]
    pub use crate::api::ChessComClient;
    #[cfg(feature = "yew")]
    pub use crate::components::*;
    #[cfg(feature = "yew")]
    pub use crate::hooks::{use_directory, use_now, use_remote, DirectoryContext};
    #[cfg(feature = "yew")]
    pub use crate::providers::{DirectoryHandle, DirectoryProvider};
    #[cfg(feature = "yew")]
    pub use crate::route::Route;

    pub use crate::config::Config;
    pub use crate::model::ApiError;
    pub use crate::model::FetchState;
    pub use crate::model::PlayerDirectory;
    pub use crate::model::PlayerId;
    pub use crate::model::PlayerProfile;
    pub use crate::model::Roster;
    pub use crate::model::format_elapsed;
}
