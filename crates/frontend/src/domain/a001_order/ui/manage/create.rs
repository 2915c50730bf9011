use super::form_fields::{OrderFormFields, OrderFormSignals};
use super::WorkflowHandle;
use crate::domain::a001_order::form::OrderForm;
use crate::layout::global_context::use_global_context;
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn CreateOrderPanel(workflow: WorkflowHandle) -> impl IntoView {
    let ctx = use_global_context();
    let fields = OrderFormSignals::new(OrderForm::for_date(today()));
    let (saving, set_saving) = signal(false);

    // при каждом входе в раздел дата формы = сегодня
    Effect::new(move |_| {
        if ctx.management_setup.get() > 0 {
            fields.order_date.set(OrderForm::for_date(today()).order_date);
        }
    });

    let submit = move || {
        if saving.get_untracked() {
            return;
        }
        let wf = workflow.get_value();
        let form = fields.snapshot();
        set_saving.set(true);
        spawn_local(async move {
            if wf.create(&form).await.is_some() {
                fields.set(OrderForm::for_date(today()));
                ctx.refresh_dashboard_if_visible();
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h5 class="mb-0">{icon("plus")} " Create order"</h5>
            </div>
            <div class="card-body">
                <OrderFormFields fields=fields />
                <div class="mt-3">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=saving
                        on_click=move |_| submit()
                    >
                        {icon("save")}
                        " Create"
                    </Button>
                </div>
            </div>
        </div>
    }
}
