use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or(AttrValue::from("Loading..."))]
    pub message: AttrValue,
}

#[function_component(LoadingComp)]
pub fn loading_comp(props: &LoadingProps) -> Html {
    html! {
        <div class="gm-explorer-status gm-explorer-status--loading">{props.message.clone()}</div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorProps {
    #[prop_or(AttrValue::from("Error: "))]
    pub prefix: AttrValue,
    pub message: AttrValue,
}

#[function_component(ErrorComp)]
pub fn error_comp(props: &ErrorProps) -> Html {
    html! {
        <div class="gm-explorer-status gm-explorer-status--error">
            {props.prefix.clone()}
            {props.message.clone()}
        </div>
    }
}
