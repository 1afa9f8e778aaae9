use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RawJsonProps {
    pub json: AttrValue,
}

#[function_component(RawJsonComp)]
pub fn raw_json_comp(props: &RawJsonProps) -> Html {
    html! {
        <details class="gm-explorer-raw">
            <summary>{"Raw profile JSON"}</summary>
            <pre class="gm-explorer-raw__body">{props.json.clone()}</pre>
        </details>
    }
}
