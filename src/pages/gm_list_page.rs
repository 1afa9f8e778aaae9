use crate::components::{ErrorComp, LoadingComp, PlayerFilterComp, PlayerListComp};
use crate::hooks::{use_directory, use_remote};
use crate::model::{FetchState, Roster};
use std::rc::Rc;
use yew::prelude::*;
use yew_hooks::use_title;

fn visible_players(roster: Option<&Rc<Roster>>, filter: &str) -> Vec<AttrValue> {
    roster
        .map(|roster| {
            roster
                .filter(filter)
                .into_iter()
                .map(|player| AttrValue::from(player.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Listing of every titled GM with a client-side filter.
#[function_component(GmListPage)]
pub fn gm_list_page() -> Html {
    use_title("Chess Grandmasters".to_string());

    let directory = use_directory().directory;
    let roster = use_remote(Some(()), move |()| async move {
        directory.titled_players().await
    });
    let filter = use_state(String::new);

    let visible = use_memo(
        (roster.value().cloned(), (*filter).clone()),
        |(roster, filter)| visible_players(roster.as_ref(), filter),
    );

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |value: String| filter.set(value))
    };

    html! {
        <div class="gm-explorer-list">
            <h1 class="gm-explorer-list__title">{"Chess Grandmasters (GM)"}</h1>
            <p class="gm-explorer-list__source">
                {"Data from chess.com public API: "}<code>{"/pub/titled/GM"}</code>
            </p>
            <PlayerFilterComp value={(*filter).clone()} on_change={on_filter} />
            {match &roster {
                FetchState::Idle => html! {},
                FetchState::Loading => html! { <LoadingComp /> },
                FetchState::Failed(message) => html! {
                    <ErrorComp prefix="Error loading players: " message={message.clone()} />
                },
                FetchState::Loaded(roster) if roster.is_empty() => html! {
                    <div class="gm-explorer-list__empty">{"No players found."}</div>
                },
                FetchState::Loaded(_) if visible.is_empty() => html! {
                    <div class="gm-explorer-list__empty">{"No players match the filter."}</div>
                },
                FetchState::Loaded(_) => html! { <PlayerListComp players={visible.clone()} /> },
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_visible_before_load() {
        assert!(visible_players(None, "a").is_empty());
    }

    #[test]
    fn visible_players_follow_filter() {
        let roster = Rc::new(Roster::new(vec![
            "a".to_string(),
            "b".to_string(),
            "ab".to_string(),
        ]));
        let visible = visible_players(Some(&roster), "A");
        assert_eq!(visible, vec![AttrValue::from("a"), AttrValue::from("ab")]);
    }
}
