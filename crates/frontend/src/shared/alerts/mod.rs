//! Transient notification banners
//!
//! `AlertService` is provided through context; any component can push a
//! banner with [`AlertService::show`]. Banners expire after the configured
//! timeout unless the user closes them first.

mod queue;

pub use queue::{Alert, AlertQueue, Severity};

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct AlertService {
    queue: RwSignal<AlertQueue>,
    timeout_ms: u32,
}

impl AlertService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(AlertQueue::default()),
            timeout_ms,
        }
    }

    /// Show a banner and schedule its removal
    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        let Some(id) = self.queue.try_update(|q| q.push(message, severity)) else {
            return;
        };

        let queue = self.queue;
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            // The banner may be gone already (closed by hand, or the owner disposed)
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.try_update(|q| q.dismiss(id));
    }

    pub fn alerts(&self) -> Signal<Vec<Alert>> {
        let queue = self.queue;
        Signal::derive(move || queue.with(|q| q.items().to_vec()))
    }
}

pub fn use_alerts() -> AlertService {
    use_context::<AlertService>().expect("AlertService context not found")
}

/// Fixed-position stack of dismissible banners (top right)
#[component]
pub fn AlertStack() -> impl IntoView {
    let alerts = use_alerts();
    let items = alerts.alerts();

    view! {
        <div class="alert-stack position-fixed" style="top: 20px; right: 20px; z-index: 9999;">
            <For
                each=move || items.get()
                key=|alert| alert.id
                children=move |alert: Alert| {
                    let id = alert.id;
                    let class = format!(
                        "alert alert-{} alert-dismissible fade show",
                        alert.severity.class()
                    );
                    view! {
                        <div class=class role="alert">
                            {alert.message}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| alerts.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
