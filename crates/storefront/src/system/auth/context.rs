use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::session::{AuthState, Session};
use super::{api, storage};
use crate::shared::api_utils::ApiError;

/// Handle to the auth state shared through context. Cheap to copy into
/// closures and async blocks.
#[derive(Clone, Copy)]
pub struct AuthHandle {
    pub state: ReadSignal<AuthState>,
    set_state: WriteSignal<AuthState>,
}

impl AuthHandle {
    /// Current session without subscribing to changes.
    pub fn session_untracked(&self) -> Option<Session> {
        self.state.get_untracked().session
    }

    /// Current session, or `NotAuthenticated` when signed out.
    pub fn require_session(&self) -> Result<Session, ApiError> {
        self.session_untracked().ok_or(ApiError::NotAuthenticated)
    }

    pub fn sign_in(&self, session: Session, remember: bool) {
        storage::save_session(&session, remember);
        log::info!("Signed in as {}", session.user.username);
        self.set_state.set(AuthState::signed_in(session));
    }

    /// Swaps in a refreshed user record, e.g. after a profile update.
    pub fn update_user(&self, user: UserInfo) {
        storage::update_user(&user);
        self.set_state.update(|state| {
            if let Some(session) = state.session.as_mut() {
                session.user = user;
            }
        });
    }

    pub fn sign_out(&self) {
        storage::clear_session();
        self.set_state.set(AuthState::default());
    }

    /// Drops the session after the backend rejected its token.
    pub fn expire(&self) {
        log::warn!("Session expired, clearing stored credentials");
        storage::clear_session();
        self.set_state.set(AuthState::expired());
    }

    /// Expires the session if `error` says the token is no longer valid.
    pub fn handle_error(&self, error: &ApiError) {
        if error.expires_session() {
            self.expire();
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let stored = storage::load_session();
    let (state, set_state) = signal(
        stored
            .clone()
            .map(AuthState::signed_in)
            .unwrap_or_default(),
    );
    let auth = AuthHandle { state, set_state };

    // Re-validate the restored session once on mount
    if let Some(session) = stored {
        spawn_local(async move {
            match api::get_current_user(&session).await {
                Ok(user) => auth.update_user(user),
                Err(e) if e.expires_session() => auth.expire(),
                Err(e) => log::warn!("Could not validate stored session: {}", e),
            }
        });
    }

    provide_context(auth);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>().expect("AuthProvider not found in component tree")
}

/// Helper: Perform login and store the resulting session
pub async fn do_login(
    auth: AuthHandle,
    email: String,
    password: String,
    remember: bool,
) -> Result<(), ApiError> {
    let response = api::login(email, password).await?;
    auth.sign_in(Session::from(response), remember);
    Ok(())
}
