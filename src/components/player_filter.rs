use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerFilterProps {
    pub value: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component(PlayerFilterComp)]
pub fn player_filter_comp(props: &PlayerFilterProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        }
    };

    html! {
        <div class="gm-explorer-filter">
            <input
                class="gm-explorer-filter__input"
                type="text"
                placeholder="Filter by username"
                value={props.value.clone()}
                {oninput}
            />
        </div>
    }
}
