use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::shell::Shell;
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::pages::login::LoginPage;

#[component]
fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    // Unauthenticated state blocks everything, including the collection
    // subscriptions which only start inside the shell.
    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <Shell />
        </Show>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
