use crate::domain::a001_order::form::OrderForm;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;
use thaw::*;

/// One signal per form input; thaw inputs bind to `RwSignal<String>`
#[derive(Clone, Copy)]
pub struct OrderFormSignals {
    pub customer_name: RwSignal<String>,
    pub order_date: RwSignal<String>,
    pub status: RwSignal<String>,
    pub category: RwSignal<String>,
    pub subcategory: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub subtotal_amount: RwSignal<String>,
    pub tax_rate: RwSignal<String>,
    pub shipping_cost: RwSignal<String>,
}

impl OrderFormSignals {
    pub fn new(form: OrderForm) -> Self {
        Self {
            customer_name: RwSignal::new(form.customer_name),
            order_date: RwSignal::new(form.order_date),
            status: RwSignal::new(form.status),
            category: RwSignal::new(form.category),
            subcategory: RwSignal::new(form.subcategory),
            quantity: RwSignal::new(form.quantity),
            subtotal_amount: RwSignal::new(form.subtotal_amount),
            tax_rate: RwSignal::new(form.tax_rate),
            shipping_cost: RwSignal::new(form.shipping_cost),
        }
    }

    pub fn set(&self, form: OrderForm) {
        self.customer_name.set(form.customer_name);
        self.order_date.set(form.order_date);
        self.status.set(form.status);
        self.category.set(form.category);
        self.subcategory.set(form.subcategory);
        self.quantity.set(form.quantity);
        self.subtotal_amount.set(form.subtotal_amount);
        self.tax_rate.set(form.tax_rate);
        self.shipping_cost.set(form.shipping_cost);
    }

    pub fn snapshot(&self) -> OrderForm {
        OrderForm {
            customer_name: self.customer_name.get_untracked(),
            order_date: self.order_date.get_untracked(),
            status: self.status.get_untracked(),
            category: self.category.get_untracked(),
            subcategory: self.subcategory.get_untracked(),
            quantity: self.quantity.get_untracked(),
            subtotal_amount: self.subtotal_amount.get_untracked(),
            tax_rate: self.tax_rate.get_untracked(),
            shipping_cost: self.shipping_cost.get_untracked(),
        }
    }
}

#[component]
pub fn StatusOptions() -> impl IntoView {
    OrderStatus::known()
        .into_iter()
        .map(|status| {
            let code = status.code().to_string();
            view! { <option value=code.clone()>{code.clone()}</option> }
        })
        .collect_view()
}

/// Поля заказа, общие для формы создания и формы редактирования
#[component]
pub fn OrderFormFields(fields: OrderFormSignals) -> impl IntoView {
    view! {
        <div class="row g-3">
            <div class="col-md-6">
                <label class="form-label">"Customer name"</label>
                <Input value=fields.customer_name placeholder="Customer name" />
            </div>
            <div class="col-md-3">
                <label class="form-label">"Order date"</label>
                <input
                    type="date"
                    class="form-control"
                    prop:value=move || fields.order_date.get()
                    on:input=move |ev| fields.order_date.set(event_target_value(&ev))
                />
            </div>
            <div class="col-md-3">
                <label class="form-label">"Status"</label>
                <Select value=fields.status>
                    <StatusOptions />
                </Select>
            </div>
            <div class="col-md-6">
                <label class="form-label">"Category"</label>
                <Input value=fields.category placeholder="Category" />
            </div>
            <div class="col-md-6">
                <label class="form-label">"Subcategory"</label>
                <Input value=fields.subcategory placeholder="Subcategory" />
            </div>
            <div class="col-md-3">
                <label class="form-label">"Quantity"</label>
                <Input value=fields.quantity input_type=InputType::Number />
            </div>
            <div class="col-md-3">
                <label class="form-label">"Subtotal"</label>
                <Input value=fields.subtotal_amount input_type=InputType::Number />
            </div>
            <div class="col-md-3">
                <label class="form-label">"Tax rate"</label>
                <Input value=fields.tax_rate input_type=InputType::Number />
            </div>
            <div class="col-md-3">
                <label class="form-label">"Shipping cost"</label>
                <Input value=fields.shipping_cost input_type=InputType::Number />
            </div>
        </div>
    }
}
