use crate::components::{AvatarComp, BadgeListComp, LastOnlineComp, RawJsonComp};
use crate::model::PlayerProfile;
use chrono::Local;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfileCardProps {
    pub profile: Rc<PlayerProfile>,
    /// Identifier from the route, shown when the record has no username.
    pub username: AttrValue,
}

fn heading(profile: &PlayerProfile, username: &str) -> String {
    let name = profile.display_name().unwrap_or(username);
    match &profile.title {
        Some(title) => format!("{} ({})", name, title),
        None => name.to_string(),
    }
}

#[function_component(ProfileCardComp)]
pub fn profile_card_comp(props: &ProfileCardProps) -> Html {
    let profile = &props.profile;
    let username = profile
        .username
        .clone()
        .map(AttrValue::from)
        .unwrap_or_else(|| props.username.clone());
    let badges: Vec<AttrValue> = profile
        .badges
        .iter()
        .cloned()
        .map(AttrValue::from)
        .collect();

    html! {
        <div class="gm-explorer-profile-card">
            <div class="gm-explorer-profile-card__aside">
                <AvatarComp
                    src={profile.avatar.clone().map(AttrValue::from)}
                    profile_url={profile.url.clone().map(AttrValue::from)}
                />
            </div>
            <div class="gm-explorer-profile-card__main">
                <h2 class="gm-explorer-profile-card__name">{heading(profile, &props.username)}</h2>
                <div class="gm-explorer-profile-card__field">
                    <strong>{"Username:"}</strong>{" "}{username}
                </div>
                if let Some(country) = &profile.country {
                    <div class="gm-explorer-profile-card__field">
                        <strong>{"Country:"}</strong>{" "}
                        <a href={country.clone()} target="_blank" rel="noreferrer">{country.clone()}</a>
                    </div>
                }
                if let Some(joined) = profile.joined_date(&Local) {
                    <div class="gm-explorer-profile-card__field">
                        <strong>{"Joined:"}</strong>{" "}{joined}
                    </div>
                }
                if let Some(followers) = profile.followers {
                    <div class="gm-explorer-profile-card__field">
                        <strong>{"Followers:"}</strong>{" "}{followers}
                    </div>
                }
                <LastOnlineComp
                    last_online_ms={profile.last_online_ms()}
                    last_seen_at={profile.last_seen_at(&Local).map(AttrValue::from)}
                />
                <BadgeListComp {badges} />
                <RawJsonComp json={profile.raw_pretty()} />
            </div>
        </div>
    }
}
