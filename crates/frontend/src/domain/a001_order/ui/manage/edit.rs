use super::form_fields::{OrderFormFields, OrderFormSignals};
use super::WorkflowHandle;
use crate::domain::a001_order::form::OrderForm;
use crate::domain::a001_order::workflow::{DeleteOutcome, SearchOutcome};
use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn EditOrderPanel(workflow: WorkflowHandle) -> impl IntoView {
    let ctx = use_global_context();
    let search_input = RwSignal::new(String::new());
    let panel_visible = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<i64>);
    let fields = OrderFormSignals::new(OrderForm::default());

    let sync_session = move || editing_id.set(workflow.with_value(|wf| wf.editing_id()));

    let search = move || {
        let wf = workflow.get_value();
        let raw = search_input.get_untracked();
        spawn_local(async move {
            match wf.search(&raw).await {
                SearchOutcome::Found(order) => {
                    fields.set(OrderForm::from_order(&order));
                    panel_visible.set(true);
                }
                SearchOutcome::NotFound => panel_visible.set(false),
                SearchOutcome::Invalid | SearchOutcome::Failed | SearchOutcome::Superseded => {}
            }
            sync_session();
        });
    };

    let update = move || {
        let wf = workflow.get_value();
        let form = fields.snapshot();
        spawn_local(async move {
            if wf.update(&form).await {
                ctx.refresh_dashboard_if_visible();
            }
        });
    };

    let delete = move || {
        let wf = workflow.get_value();
        spawn_local(async move {
            if let DeleteOutcome::Deleted { session_closed } = wf.delete().await {
                if session_closed {
                    panel_visible.set(false);
                    search_input.set(String::new());
                }
                ctx.refresh_dashboard_if_visible();
            }
            sync_session();
        });
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h5 class="mb-0">{icon("manage")} " Edit order"</h5>
            </div>
            <div class="card-body">
                <div class="d-flex gap-2 mb-3">
                    <Input value=search_input placeholder="Order ID" />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| search()>
                        {icon("search")}
                        " Search"
                    </Button>
                </div>
                <Show when=move || panel_visible.get()>
                    <p class="text-muted">
                        {move || editing_id.get().map(|id| format!("Editing order #{}", id))}
                    </p>
                    <OrderFormFields fields=fields />
                    <div class="mt-3 d-flex gap-2">
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| update()>
                            {icon("save")}
                            " Update"
                        </Button>
                        <Button on_click=move |_| delete()>
                            {icon("trash")}
                            " Delete"
                        </Button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
