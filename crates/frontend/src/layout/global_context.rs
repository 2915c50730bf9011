use crate::layout::sections::{Section, SectionLoad, UnknownSection};
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Navigation state shared by the whole workbench.
///
/// Section loads are signalled through counters: a controller that owns a
/// results region watches its counter and reloads when it changes.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Section>,
    pub left_open: RwSignal<bool>,
    pub dashboard_reload: RwSignal<u32>,
    pub quality_reload: RwSignal<u32>,
    pub orders_reload: RwSignal<u32>,
    pub management_setup: RwSignal<u32>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::Dashboard),
            left_open: RwSignal::new(true),
            dashboard_reload: RwSignal::new(0),
            quality_reload: RwSignal::new(0),
            orders_reload: RwSignal::new(0),
            management_setup: RwSignal::new(0),
        }
    }

    /// Navigation entry point: resolve the key and switch to that section.
    /// An unknown key leaves the current section untouched.
    pub fn show_section(&self, key: &str) -> Result<Section, UnknownSection> {
        let section = Section::from_key(key).inspect_err(|e| {
            log::error!("show_section: {}", e);
        })?;
        self.activate(section);
        Ok(section)
    }

    pub fn activate(&self, section: Section) {
        log::debug!("activate section: '{}'", section.key());
        self.active.set(section);
        match section.on_enter() {
            Some(SectionLoad::QualityReport) => bump(self.quality_reload),
            Some(SectionLoad::OrderManagementSetup) => bump(self.management_setup),
            None => {}
        }
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.active.get_untracked() == section
    }

    /// Reload dashboard counters and charts, but only while they are on screen
    pub fn refresh_dashboard_if_visible(&self) {
        if self.is_visible(Section::Dashboard) {
            bump(self.dashboard_reload);
        }
    }

    /// Header "Refresh": reload the data of the visible section.
    /// Returns false when the section has nothing to reload.
    pub fn refresh_visible(&self) -> bool {
        match self.active.get_untracked() {
            Section::Dashboard => bump(self.dashboard_reload),
            Section::DataQuality => bump(self.quality_reload),
            Section::Orders => bump(self.orders_reload),
            _ => return false,
        }
        true
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    /// Restore the section from `?section=` and keep the URL in sync
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(key) = params.get("section") {
            // ошибка уже залогирована в show_section
            let _ = self.show_section(key);
        }

        let this = *self;
        Effect::new(move |_| {
            let section = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "section".to_string(),
                section.key().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn bump(counter: RwSignal<u32>) {
    counter.update(|n| *n = n.wrapping_add(1));
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
