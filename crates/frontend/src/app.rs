use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::alerts::{AlertService, AlertStack};
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();

    // Notifications live as long as the app
    provide_context(AlertService::new(config.alert_timeout_ms));
    provide_context(AppGlobalContext::new());
    provide_context(config);

    view! {
        <AppRoutes />
        <AlertStack />
    }
}
