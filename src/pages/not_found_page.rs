use crate::route::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="gm-explorer-not-found">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home}>{"Back to the Grandmasters"}</Link<Route>>
        </div>
    }
}
