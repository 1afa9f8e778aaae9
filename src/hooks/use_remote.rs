use crate::model::{ApiError, FetchAction, FetchCycle, FetchState, RequestTracker};
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

struct RemoteState<K, T>(FetchCycle<K, T>);

impl<K: PartialEq + Clone + 'static, T: 'static> Reducible for RemoteState<K, T> {
    type Action = FetchAction<K, T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut cycle = self.0.clone();
        if cycle.apply(action) {
            Rc::new(RemoteState(cycle))
        } else {
            self
        }
    }
}

/// Runs `fetch` whenever `key` changes and tracks the outcome.
///
/// A `None` key means there is nothing to load and yields [`FetchState::Idle`].
/// Each run owns a cancellation flag that its effect destructor raises, so a
/// response arriving after the key changed or the component unmounted is
/// never committed. A result is only returned while `key` is the key it was
/// fetched for; until the new request begins the state reads as loading.
#[hook]
pub fn use_remote<K, T, F, Fut>(key: Option<K>, fetch: F) -> FetchState<T>
where
    K: PartialEq + Clone + 'static,
    T: 'static,
    F: FnOnce(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let remote = use_reducer(|| RemoteState(FetchCycle::default()));
    let tracker = use_mut_ref(RequestTracker::default);

    {
        let dispatcher = remote.dispatcher();
        use_effect_with(key.clone(), move |key| {
            let cancelled = Rc::new(Cell::new(false));

            match key.clone() {
                Some(key) => {
                    let ticket = tracker.borrow_mut().issue();
                    dispatcher.dispatch(FetchAction::Begin(ticket, key.clone()));

                    let request = fetch(key);
                    let cancelled = cancelled.clone();
                    spawn_local(async move {
                        let result = request.await;
                        if cancelled.get() || !tracker.borrow().is_current(ticket) {
                            log::debug!("Dropping superseded response {:?}", ticket);
                            return;
                        }
                        if let Err(err) = &result {
                            log::error!("Request {:?} failed: {}", ticket, err);
                        }
                        dispatcher.dispatch(FetchAction::Settle(ticket, result));
                    });
                }
                None => dispatcher.dispatch(FetchAction::Reset),
            }

            move || cancelled.set(true)
        });
    }

    remote.0.state_for(key.as_ref())
}
