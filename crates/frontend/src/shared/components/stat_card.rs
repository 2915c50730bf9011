use crate::shared::icons::icon;
use leptos::prelude::*;

/// Тон карточки, соответствует Bootstrap-цветам
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardTone {
    #[default]
    Primary,
    Success,
    Warning,
    Danger,
    Info,
}

impl CardTone {
    pub fn class(&self) -> &'static str {
        match self {
            CardTone::Primary => "stat-card stat-card--primary",
            CardTone::Success => "stat-card stat-card--success",
            CardTone::Warning => "stat-card stat-card--warning",
            CardTone::Danger => "stat-card stat-card--error",
            CardTone::Info => "stat-card stat-card--info",
        }
    }
}

/// Counter card. The value is pre-formatted text; `None` renders a dash.
#[component]
pub fn StatCard(
    /// Label displayed under the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(optional, into)]
    icon_name: Option<String>,
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(optional)]
    tone: CardTone,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "-".to_string());

    view! {
        <div class=tone.class()>
            {icon_name.map(|name| view! { <div class="stat-card__icon">{icon(&name)}</div> })}
            <div class="stat-card__content">
                <div class="stat-card__value">{formatted}</div>
                <div class="stat-card__label">{label}</div>
            </div>
        </div>
    }
}
