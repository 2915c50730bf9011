use super::loading::LoadingPlaceholder;
use crate::shared::api_utils::ApiError;
use crate::shared::request_sequence::{RequestSequence, RequestTicket};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Содержимое контейнера результатов
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelState<T> {
    #[default]
    Empty,
    Loading,
    Ready(T),
    Failed(String),
}

/// Load into a results container.
///
/// Shows the loading placeholder, awaits `request`, then renders the result or
/// `failure_text`. A response whose ticket is no longer the latest is dropped.
pub fn load_into<T, Fut>(
    panel: RwSignal<PanelState<T>>,
    sequence: RequestSequence,
    failure_text: &'static str,
    request: Fut,
) where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let ticket = sequence.issue();
    panel.set(PanelState::Loading);
    spawn_local(async move {
        let result = request.await;
        if let Some(state) = settle(&sequence, ticket, result, failure_text) {
            panel.set(state);
        }
    });
}

/// State a finished load leaves in its container, `None` if the response is stale
pub fn settle<T>(
    sequence: &RequestSequence,
    ticket: RequestTicket,
    result: Result<T, ApiError>,
    failure_text: &str,
) -> Option<PanelState<T>> {
    if !sequence.is_current(ticket) {
        log::debug!("stale response dropped: {}", failure_text);
        return None;
    }
    match result {
        Ok(value) => Some(PanelState::Ready(value)),
        Err(e) => {
            log::error!("{}: {}", failure_text, e);
            Some(PanelState::Failed(failure_text.to_string()))
        }
    }
}

/// Renders the placeholder and failure states; `ready` draws the loaded value
pub fn render_panel<T, V>(state: PanelState<T>, ready: impl FnOnce(T) -> V) -> AnyView
where
    V: IntoView + 'static,
{
    match state {
        PanelState::Empty => ().into_any(),
        PanelState::Loading => view! { <LoadingPlaceholder /> }.into_any(),
        PanelState::Failed(message) => {
            view! { <div class="alert alert-danger">{message}</div> }.into_any()
        }
        PanelState::Ready(value) => ready(value).into_any(),
    }
}
