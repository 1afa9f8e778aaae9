use crate::components::{BackButtonComp, ErrorComp, LoadingComp, ProfileCardComp};
use crate::hooks::{use_directory, use_remote};
use crate::model::FetchState;
use yew::prelude::*;
use yew_hooks::use_title;

#[derive(Properties, PartialEq)]
pub struct GmProfilePageProps {
    #[prop_or_default]
    pub username: Option<AttrValue>,
}

fn requested_username(username: Option<&AttrValue>) -> Option<AttrValue> {
    username.filter(|name| !name.trim().is_empty()).cloned()
}

/// Profile of one player, refetched whenever the routed username changes.
#[function_component(GmProfilePage)]
pub fn gm_profile_page(props: &GmProfilePageProps) -> Html {
    let username = requested_username(props.username.as_ref());
    use_title(
        username
            .as_deref()
            .map_or_else(|| "Player".to_string(), str::to_string),
    );

    let directory = use_directory().directory;
    let profile = use_remote(username.clone(), move |username: AttrValue| async move {
        directory.player_profile(&username).await
    });

    html! {
        <div class="gm-explorer-profile">
            <BackButtonComp />
            {match (&profile, &username) {
                (FetchState::Loaded(profile), Some(username)) => html! {
                    <ProfileCardComp profile={profile.clone()} username={username.clone()} />
                },
                (FetchState::Loading, _) => html! { <LoadingComp message="Loading profile..." /> },
                (FetchState::Failed(message), _) => html! {
                    <ErrorComp message={message.clone()} />
                },
                _ => html! {},
            }}
        </div>
    }
}
