use crate::route::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NavBarComp)]
pub fn nav_bar_comp() -> Html {
    html! {
        <nav class="gm-explorer-nav">
            <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
        </nav>
    }
}
