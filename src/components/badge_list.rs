use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BadgeListProps {
    pub badges: Vec<AttrValue>,
}

#[function_component(BadgeListComp)]
pub fn badge_list_comp(props: &BadgeListProps) -> Html {
    if props.badges.is_empty() {
        return html! {};
    }

    html! {
        <div class="gm-explorer-badges">
            <h4 class="gm-explorer-badges__title">{"Badges"}</h4>
            <ul class="gm-explorer-badges__items">
                {for props.badges.iter().map(|badge| html! {
                    <li>{badge.clone()}</li>
                })}
            </ul>
        </div>
    }
}
