use leptos::prelude::*;
use thaw::*;

pub const LOADING_TEXT: &str = "Processing...";

/// Spinner shown inside a results container while its request is in flight
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="text-center py-4 loading-placeholder">
            <Spinner />
            <p class="mt-2 text-muted">{LOADING_TEXT}</p>
        </div>
    }
}
