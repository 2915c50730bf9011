use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Content zone; `data-section` carries the active section key for styling
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <main
            data-zone="center"
            data-section=move || ctx.active.get().key()
            class="app-content"
            style="flex: 1; overflow: auto;"
        >
            {children()}
        </main>
    }
}
