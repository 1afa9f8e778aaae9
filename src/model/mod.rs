mod directory;
mod elapsed;
mod error;
mod fetch_state;
mod player;
mod profile;

pub use directory::PlayerDirectory;
pub use elapsed::format_elapsed;
pub use error::ApiError;
pub use fetch_state::{FetchAction, FetchCycle, FetchState, RequestTicket, RequestTracker};
pub use player::{PlayerId, Roster};
pub use profile::PlayerProfile;
