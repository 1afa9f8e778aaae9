use crate::route::Route;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayerListProps {
    pub players: Rc<Vec<AttrValue>>,
}

#[function_component(PlayerListComp)]
pub fn player_list_comp(props: &PlayerListProps) -> Html {
    html! {
        <ul class="gm-explorer-player-list">
            {for props.players.iter().map(|username| {
                let route = Route::player(username.to_string());
                html! {
                    <li key={username.to_string()} class="gm-explorer-player-list__item">
                        <Link<Route> classes={classes!("gm-explorer-player-list__name")} to={route.clone()}>
                            {username.clone()}
                        </Link<Route>>
                        <Link<Route> classes={classes!("gm-explorer-player-list__view")} to={route}>
                            {"View"}
                        </Link<Route>>
                    </li>
                }
            })}
        </ul>
    }
}
