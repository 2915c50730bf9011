mod bulk;
mod create;
mod edit;
pub mod form_fields;

use crate::domain::a001_order::api::HttpOrdersApi;
use crate::domain::a001_order::workflow::OrderEditWorkflow;
use crate::shared::alerts::use_alerts;
use crate::shared::config::AppConfig;
use crate::shared::feedback::BrowserFeedback;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use std::rc::Rc;

pub type BrowserWorkflow = OrderEditWorkflow<HttpOrdersApi, BrowserFeedback>;

/// Workflow shared by the create, edit and bulk panels
pub type WorkflowHandle = StoredValue<Rc<BrowserWorkflow>, LocalStorage>;

#[component]
#[allow(non_snake_case)]
pub fn OrderManagement() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let feedback = BrowserFeedback::new(use_alerts());
    let workflow: WorkflowHandle = StoredValue::new_local(Rc::new(OrderEditWorkflow::new(
        HttpOrdersApi::new(config),
        feedback,
    )));

    view! {
        <div class="row g-4">
            <div class="col-lg-6">
                <create::CreateOrderPanel workflow=workflow />
            </div>
            <div class="col-lg-6">
                <edit::EditOrderPanel workflow=workflow />
            </div>
            <div class="col-12">
                <bulk::BulkStatusPanel workflow=workflow />
            </div>
        </div>
    }
}
