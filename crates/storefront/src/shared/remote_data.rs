use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiError;
use crate::shared::request_state::{GenerationCounter, LoadState};
use crate::system::auth::context::{use_auth, AuthHandle};
use crate::system::auth::session::Session;

/// Reactive handle returned by [`use_remote`].
pub struct RemoteData<T: Send + Sync + 'static> {
    pub state: ReadSignal<LoadState<T>>,
    retries: RwSignal<u32>,
}

impl<T: Send + Sync + 'static> Clone for RemoteData<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RemoteData<T> {}

impl<T: Send + Sync + 'static> RemoteData<T> {
    /// Re-issues the request with the current inputs.
    pub fn retry(&self) {
        self.retries.update(|n| *n += 1);
    }
}

/// Loads data for the current value of `key` and reloads whenever it (or
/// the signed-in user) changes.
///
/// `key` returning `None` means the inputs are incomplete: no request is
/// made and the state goes back to `Idle`. Each request takes a ticket from
/// a per-widget [`GenerationCounter`]; a response whose ticket is no longer
/// current is dropped, and unmounting invalidates the counter so nothing is
/// written after the widget is gone. A 401 expires the session.
pub fn use_remote<K, T, F, Fut>(
    label: &'static str,
    key: impl Fn() -> Option<K> + 'static,
    fetch: F,
) -> RemoteData<T>
where
    K: 'static,
    T: Send + Sync + 'static,
    F: Fn(Session, K) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let auth = use_auth();
    let (state, set_state) = signal(LoadState::<T>::Idle);
    let retries = RwSignal::new(0u32);
    let counter = GenerationCounter::new();

    on_cleanup({
        let counter = counter.clone();
        move || counter.invalidate()
    });

    let token = Memo::new(move |_| {
        auth.state
            .with(|s| s.session.as_ref().map(|s| s.access_token.clone()))
    });

    Effect::new(move |_| {
        retries.track();
        let signed_in = token.get().is_some();
        let Some(key) = key() else {
            counter.invalidate();
            set_state.set(LoadState::Idle);
            return;
        };
        let session = match auth.session_untracked() {
            Some(session) if signed_in => session,
            _ => {
                counter.invalidate();
                set_state.set(LoadState::Error(ApiError::NotAuthenticated));
                return;
            }
        };

        let ticket = counter.next_ticket();
        set_state.set(LoadState::Loading);
        let request = fetch(session, key);

        spawn_local(async move {
            let result = request.await;
            if !ticket.is_current() {
                log::debug!("{}: dropping stale response #{}", label, ticket.generation());
                return;
            }
            if let Err(e) = &result {
                log::error!("{}: {}", label, e);
                auth.handle_error(e);
            }
            set_state.set(LoadState::from_result(result));
        });
    });

    RemoteData { state, retries }
}

/// Runs a mutation for the signed-in user from an event handler.
///
/// `busy` is set for the duration of the call. On failure the error text
/// lands in `feedback` and a 401 expires the session; on success
/// `on_success` runs.
pub fn spawn_action<F, Fut>(
    auth: AuthHandle,
    label: &'static str,
    busy: RwSignal<bool>,
    feedback: RwSignal<Option<String>>,
    action: F,
    on_success: impl FnOnce() + 'static,
) where
    F: FnOnce(Session) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let session = match auth.require_session() {
        Ok(session) => session,
        Err(e) => {
            feedback.set(Some(e.to_string()));
            return;
        }
    };
    busy.set(true);
    feedback.set(None);
    spawn_local(async move {
        match action(session).await {
            Ok(()) => {
                log::info!("{}: done", label);
                on_success();
            }
            Err(e) => {
                log::error!("{}: {}", label, e);
                auth.handle_error(&e);
                feedback.set(Some(e.to_string()));
            }
        }
        busy.set(false);
    });
}
