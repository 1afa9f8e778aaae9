use yew::prelude::*;
use yew_router::prelude::*;

/// Goes one step back in the browser history.
#[function_component(BackButtonComp)]
pub fn back_button_comp() -> Html {
    let navigator = use_navigator();

    let onclick = Callback::from(move |_: MouseEvent| match &navigator {
        Some(navigator) => navigator.back(),
        None => log::warn!("Back pressed outside of a router"),
    });

    html! {
        <button class="gm-explorer-back" {onclick}>{"← Back"}</button>
    }
}
