use super::form_fields::StatusOptions;
use super::WorkflowHandle;
use crate::layout::global_context::use_global_context;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn BulkStatusPanel(workflow: WorkflowHandle) -> impl IntoView {
    let ctx = use_global_context();
    let ids_input = RwSignal::new(String::new());
    let new_status = RwSignal::new(OrderStatus::Finished.code().to_string());

    let apply = move || {
        let wf = workflow.get_value();
        let raw = ids_input.get_untracked();
        let status = new_status.get_untracked();
        spawn_local(async move {
            if wf.bulk_update_status(&raw, &status).await.is_some() {
                ids_input.set(String::new());
                ctx.refresh_dashboard_if_visible();
            }
        });
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h5 class="mb-0">"Bulk status update"</h5>
            </div>
            <div class="card-body">
                <div class="row g-3 align-items-end">
                    <div class="col-md-6">
                        <label class="form-label">"Order IDs (comma separated)"</label>
                        <Input value=ids_input placeholder="1, 2, 3" />
                    </div>
                    <div class="col-md-4">
                        <label class="form-label">"New status"</label>
                        <Select value=new_status>
                            <StatusOptions />
                        </Select>
                    </div>
                    <div class="col-md-2">
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| apply()>
                            "Apply"
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}
