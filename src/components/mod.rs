mod avatar;
mod back_button;
mod badge_list;
mod fetch_status;
mod last_online;
mod nav_bar;
mod player_filter;
mod player_list;
mod profile_card;
mod raw_json;

pub use avatar::AvatarComp;
pub use back_button::BackButtonComp;
pub use badge_list::BadgeListComp;
pub use fetch_status::{ErrorComp, LoadingComp};
pub use last_online::{ElapsedClockComp, ElapsedClockProps, LastOnlineComp, LastOnlineProps};
pub use nav_bar::NavBarComp;
pub use player_filter::PlayerFilterComp;
pub use player_list::PlayerListComp;
pub use profile_card::ProfileCardComp;
pub use raw_json::RawJsonComp;
