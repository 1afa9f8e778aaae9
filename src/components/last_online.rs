use crate::hooks::{use_directory, use_now};
use crate::model::format_elapsed;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LastOnlineProps {
    /// Epoch milliseconds, `None` when the profile has no timestamp.
    #[prop_or_default]
    pub last_online_ms: Option<i64>,
    #[prop_or_default]
    pub last_seen_at: Option<AttrValue>,
}

#[function_component(LastOnlineComp)]
pub fn last_online_comp(props: &LastOnlineProps) -> Html {
    html! {
        <div class="gm-explorer-last-online">
            <h3 class="gm-explorer-last-online__title">{"Last online"}</h3>
            {match props.last_online_ms {
                Some(since_ms) => html! {
                    <div>
                        if let Some(at) = &props.last_seen_at {
                            <div class="gm-explorer-last-online__at">{"Last seen at: "}{at.clone()}</div>
                        }
                        <ElapsedClockComp {since_ms} />
                    </div>
                },
                None => html! {
                    <div class="gm-explorer-last-online__unavailable">
                        {"No last_online data available"}
                    </div>
                },
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ElapsedClockProps {
    pub since_ms: i64,
}

/// Live `HH:MM:SS` counter; owns the clock for as long as it is mounted.
#[function_component(ElapsedClockComp)]
pub fn elapsed_clock_comp(props: &ElapsedClockProps) -> Html {
    let tick_interval_ms = use_directory().config.tick_interval_ms;
    let now = use_now(tick_interval_ms);

    html! {
        <div class="gm-explorer-last-online__elapsed">
            {"Time since last online: "}
            {format_elapsed(now.saturating_sub(props.since_ms))}
            {" (HH:MM:SS)"}
        </div>
    }
}
