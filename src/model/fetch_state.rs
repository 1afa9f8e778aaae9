use crate::model::ApiError;
use std::rc::Rc;

/// Lifecycle of one remote resource owned by a view.
#[derive(Debug, PartialEq)]
pub enum FetchState<T> {
    /// Nothing to fetch (e.g. no identifier in the route).
    Idle,
    Loading,
    Loaded(Rc<T>),
    Failed(String),
}

impl<T> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        match self {
            FetchState::Idle => FetchState::Idle,
            FetchState::Loading => FetchState::Loading,
            FetchState::Loaded(value) => FetchState::Loaded(Rc::clone(value)),
            FetchState::Failed(message) => FetchState::Failed(message.clone()),
        }
    }
}

impl<T> From<Result<T, ApiError>> for FetchState<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => FetchState::Loaded(Rc::new(value)),
            Err(err) => FetchState::Failed(err.to_string()),
        }
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn value(&self) -> Option<&Rc<T>> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one request issued by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// Hands out strictly increasing tickets.
#[derive(Debug, Default)]
pub struct RequestTracker {
    issued: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.issued
    }
}

#[derive(Debug)]
pub enum FetchAction<K, T> {
    /// A request for `K` was started; only its result may be committed from now on.
    Begin(RequestTicket, K),
    Settle(RequestTicket, Result<T, ApiError>),
    Reset,
}

/// Current request, the key it belongs to, and the state it will write.
///
/// Results for any ticket other than the latest `Begin` are dropped, so a
/// slow response can never overwrite a newer one.
#[derive(Debug, PartialEq)]
pub struct FetchCycle<K, T> {
    current: Option<RequestTicket>,
    key: Option<K>,
    state: FetchState<T>,
}

impl<K: Clone, T> Clone for FetchCycle<K, T> {
    fn clone(&self) -> Self {
        FetchCycle {
            current: self.current,
            key: self.key.clone(),
            state: self.state.clone(),
        }
    }
}

impl<K, T> Default for FetchCycle<K, T> {
    fn default() -> Self {
        FetchCycle {
            current: None,
            key: None,
            state: FetchState::Idle,
        }
    }
}

impl<K: PartialEq, T> FetchCycle<K, T> {
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// State as seen by a view currently showing `key`.
    ///
    /// Anything recorded for a different key is reported as `Loading` until
    /// the request for `key` begins, so an old result is never shown under a
    /// new key.
    pub fn state_for(&self, key: Option<&K>) -> FetchState<T> {
        match key {
            None => FetchState::Idle,
            Some(key) if self.key.as_ref() == Some(key) => self.state.clone(),
            Some(_) => FetchState::Loading,
        }
    }

    /// Applies `action`, returning whether the state was changed.
    pub fn apply(&mut self, action: FetchAction<K, T>) -> bool {
        match action {
            FetchAction::Begin(ticket, key) => {
                self.current = Some(ticket);
                self.key = Some(key);
                self.state = FetchState::Loading;
                true
            }
            FetchAction::Settle(ticket, result) => {
                if self.current != Some(ticket) {
                    log::debug!("Discarding stale response for {:?}", ticket);
                    return false;
                }
                self.current = None;
                self.state = result.into();
                true
            }
            FetchAction::Reset => {
                self.current = None;
                self.key = None;
                self.state = FetchState::Idle;
                true
            }
        }
    }
}
