use crate::shared::alerts::{use_alerts, Severity};
use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// JSON feeds Power BI connects to as a Web data source
pub const POWERBI_FEEDS: [(&str, &str); 2] = [
    ("Orders", "/api/powerbi/orders"),
    ("Summary", "/api/powerbi/summary"),
];

/// Absolute feed URL; Power BI needs scheme and host
pub fn feed_url(origin: &str, config: &AppConfig, path: &str) -> String {
    let url = config.api_url(path);
    if url.starts_with("http://") || url.starts_with("https://") {
        url
    } else {
        format!("{}{}", origin.trim_end_matches('/'), url)
    }
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[component]
pub fn PowerBiFeedsView() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let alerts = use_alerts();
    let origin = page_origin();

    let rows = POWERBI_FEEDS
        .iter()
        .map(|(label, path)| {
            let url = feed_url(&origin, &config, path);
            let url_for_copy = url.clone();
            view! {
                <div class="mb-3">
                    <label class="form-label">{format!("{} feed", label)}</label>
                    <div class="input-group">
                        <input type="text" class="form-control" readonly=true value=url />
                        <Button on_click=move |_| {
                            copy_to_clipboard(&url_for_copy, move |result| match result {
                                Ok(()) => alerts.show("URL copied to clipboard", Severity::Success),
                                Err(e) => {
                                    log::warn!("clipboard copy failed: {}", e);
                                    alerts.show("Could not copy the URL", Severity::Warning);
                                }
                            });
                        }>
                            {icon("copy")}
                            " Copy"
                        </Button>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="card">
            <div class="card-body">
                <h5 class="card-title">"Power BI data feeds"</h5>
                <p class="card-text text-muted">
                    "In Power BI Desktop choose Get Data > Web and paste one of these URLs."
                </p>
                {rows}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_api_urls_get_the_page_origin() {
        let config = AppConfig::default();
        assert_eq!(
            feed_url("http://localhost:5000/", &config, "/api/powerbi/orders"),
            "http://localhost:5000/api/powerbi/orders"
        );
    }

    #[test]
    fn configured_backend_is_used_as_is() {
        let config = AppConfig {
            api_base: "https://reports.example.com".into(),
            ..AppConfig::default()
        };
        assert_eq!(
            feed_url("http://localhost:8080", &config, "/api/powerbi/summary"),
            "https://reports.example.com/api/powerbi/summary"
        );
    }
}
