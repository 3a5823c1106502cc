use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

/// Transient confirmation notice shown after a successful submission
#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        {move || {
            ctx.toast
                .get()
                .map(|message| view! { <div class="toast">{message}</div> })
        }}
    }
}
