use gloo::timers::callback::Interval;
use yew::prelude::*;

fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Current wall-clock time in epoch milliseconds, resampled every `interval_ms`.
///
/// The interval belongs to the calling component and is dropped with it.
#[hook]
pub fn use_now(interval_ms: u32) -> i64 {
    let now = use_state(now_ms);

    {
        let now = now.clone();
        use_effect_with(interval_ms, move |interval_ms| {
            now.set(now_ms());
            let interval = Interval::new(*interval_ms, move || now.set(now_ms()));
            move || drop(interval)
        });
    }

    *now
}
