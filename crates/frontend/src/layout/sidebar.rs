use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::{AppGlobalContext, View};
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let current_email = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.email)
            .unwrap_or_default()
    };

    let logout = move |_| {
        spawn_local(async move {
            let _ = do_logout(set_auth_state).await;
        });
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Farm Records"</div>

            <nav class="sidebar__nav">
                <For
                    each=View::all
                    key=|view| view.label()
                    children=move |view| {
                        let class = move || {
                            if ctx.current_view.get() == view {
                                "sidebar__nav-button sidebar__nav-button--active"
                            } else {
                                "sidebar__nav-button"
                            }
                        };
                        view! {
                            <button class=class on:click=move |_| ctx.open_view(view)>
                                {icon(view.icon_name())}
                                <span>{view.label()}</span>
                            </button>
                        }
                    }
                />
            </nav>

            <div class="sidebar__footer">
                <span class="sidebar__user">{current_email}</span>
                <button class="sidebar__logout" on:click=logout>
                    {icon("logout")}
                    " Sign out"
                </button>
            </div>
        </aside>
    }
}
