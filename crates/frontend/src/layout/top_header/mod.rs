//! TopHeader component - application top navigation bar.
//!
//! Sidebar toggle, title of the active section and the Refresh action.

use crate::layout::global_context::use_global_context;
use crate::shared::alerts::{use_alerts, Severity};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let alerts = use_alerts();

    let toggle_sidebar = move |_| ctx.toggle_left();

    let refresh = move |_| {
        if !ctx.refresh_visible() {
            log::debug!("refresh: nothing to reload in '{}'", ctx.active.get_untracked().key());
        }
        alerts.show("Data refreshed", Severity::Success);
    };

    let title = move || ctx.active.get().title();

    // заголовок вкладки браузера вслед за разделом
    Effect::new(move |_| {
        let title = ctx.active.get().title();
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&format!("{} | Order Workbench", title));
        }
    });

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Order Workbench"</span>
            </div>

            <h1 id="page-title" class="top-header__page-title h4 mb-0">{title}</h1>

            <div class="top-header__actions">
                <button class="btn btn-outline-primary btn-sm" on:click=refresh>
                    {icon("refresh")}
                    " Refresh"
                </button>
            </div>
        </div>
    }
}
