use crate::components::NavBarComp;
use crate::config::Config;
use crate::pages::{GmListPage, GmProfilePage, NotFoundPage};
use crate::providers::DirectoryProvider;
use crate::route::Route;
use yew::prelude::*;
use yew_router::prelude::*;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <GmListPage /> },
        Route::Player { username } => html! {
            <GmProfilePage username={Some(AttrValue::from(username))} />
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| Config::default());

    html! {
        <BrowserRouter>
            <DirectoryProvider config={(*config).clone()}>
                <div class="gm-explorer">
                    <NavBarComp />
                    <Switch<Route> render={switch} />
                </div>
            </DirectoryProvider>
        </BrowserRouter>
    }
}
