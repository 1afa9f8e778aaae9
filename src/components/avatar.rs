use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AvatarProps {
    #[prop_or_default]
    pub src: Option<AttrValue>,
    #[prop_or_default]
    pub profile_url: Option<AttrValue>,
}

#[function_component(AvatarComp)]
pub fn avatar(props: &AvatarProps) -> Html {
    html! {
        <div class="gm-explorer-avatar">
            {match &props.src {
                Some(src) => html! {
                    <img class="gm-explorer-avatar__image" src={src.clone()} alt="avatar" />
                },
                None => html! {
                    <div class="gm-explorer-avatar__placeholder">{"No avatar"}</div>
                },
            }}
            if let Some(url) = &props.profile_url {
                <div class="gm-explorer-avatar__link">
                    <a href={url.clone()} target="_blank" rel="noreferrer">{"View on chess.com"}</a>
                </div>
            }
        </div>
    }
}
