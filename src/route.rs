use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/player/:username")]
    Player { username: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn player(username: impl Into<String>) -> Self {
        Route::Player {
            username: username.into(),
        }
    }
}
