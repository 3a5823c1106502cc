use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// The session's principal, or nothing when signed out
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Rebuild the session from persisted tokens.
///
/// The stored access token is checked against the backend first; if it has
/// expired, one refresh is attempted. Returns nothing when neither path
/// yields a valid principal, in which case stale tokens are dropped.
async fn restore_session() -> Option<AuthState> {
    let access_token = storage::get_access_token()?;

    if let Ok(user_info) = api::get_current_user(&access_token).await {
        return Some(AuthState {
            access_token: Some(access_token),
            user_info: Some(user_info),
        });
    }

    let refresh_token = storage::get_refresh_token()?;
    let refreshed = api::refresh_token(refresh_token).await.ok()?;
    storage::save_access_token(&refreshed.access_token);

    let user_info = api::get_current_user(&refreshed.access_token).await.ok()?;
    Some(AuthState {
        access_token: Some(refreshed.access_token),
        user_info: Some(user_info),
    })
}

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    Effect::new(move |_| {
        spawn_local(async move {
            if storage::get_access_token().is_none() {
                return;
            }
            match restore_session().await {
                Some(state) => set_auth_state.set(state),
                None => storage::clear_tokens(),
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Revoke the refresh token server-side and clear the local session
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) -> Result<(), String> {
    if let Some(refresh_token) = storage::get_refresh_token() {
        let _ = api::logout(refresh_token).await;
    }

    storage::clear_tokens();
    set_auth_state.set(AuthState::default());

    Ok(())
}
