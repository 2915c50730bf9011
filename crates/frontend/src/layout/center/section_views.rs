use crate::dashboards::OrderOverviewDashboard;
use crate::domain::a001_order::ui::{OrderManagement, OrdersList};
use crate::layout::global_context::use_global_context;
use crate::layout::sections::Section;
use crate::usecases::u601_data_quality::DataQualityReportView;
use crate::usecases::u602_data_cleaning::DataCleaningView;
use crate::usecases::u603_export::ExportView;
use crate::usecases::u604_powerbi_feeds::PowerBiFeedsView;
use leptos::prelude::*;

/// Content of one section
fn section_body(section: Section) -> AnyView {
    match section {
        Section::Dashboard => view! { <OrderOverviewDashboard /> }.into_any(),
        Section::DataQuality => view! { <DataQualityReportView /> }.into_any(),
        Section::DataCleaning => view! { <DataCleaningView /> }.into_any(),
        Section::Orders => view! { <OrdersList /> }.into_any(),
        Section::OrderManagement => view! { <OrderManagement /> }.into_any(),
        Section::PowerBi => view! { <PowerBiFeedsView /> }.into_any(),
        Section::Export => view! { <ExportView /> }.into_any(),
    }
}

/// All sections stay mounted; only the active one is displayed
#[component]
pub fn SectionViews() -> impl IntoView {
    let ctx = use_global_context();

    Section::all()
        .into_iter()
        .map(|section| {
            let id = format!("{}-section", section.key());
            view! {
                <section
                    id=id
                    class="section p-3"
                    style:display=move || if ctx.active.get() == section { "block" } else { "none" }
                >
                    {section_body(section)}
                </section>
            }
        })
        .collect_view()
}
