use super::api::{export_orders_csv, HttpCsvSource};
use crate::shared::alerts::use_alerts;
use crate::shared::config::AppConfig;
use crate::shared::date_utils::today;
use crate::shared::export::BrowserFileSaver;
use crate::shared::feedback::BrowserFeedback;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ExportView() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let config = StoredValue::new(config);
    let feedback = BrowserFeedback::new(use_alerts());
    let (exporting, set_exporting) = signal(false);

    let export = move || {
        if exporting.get_untracked() {
            return;
        }
        set_exporting.set(true);
        let source = HttpCsvSource::new(config.get_value());
        spawn_local(async move {
            export_orders_csv(&source, &BrowserFileSaver, &feedback, today()).await;
            set_exporting.set(false);
        });
    };

    view! {
        <div class="card">
            <div class="card-body">
                <h5 class="card-title">"Export orders"</h5>
                <p class="card-text text-muted">"Download every order as a CSV file."</p>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=exporting
                    on_click=move |_| export()
                >
                    {icon("export")}
                    " Export CSV"
                </Button>
            </div>
        </div>
    }
}
