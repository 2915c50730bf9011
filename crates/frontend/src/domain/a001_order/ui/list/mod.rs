pub mod state;

use self::state::{create_state, OrderFilters};
use crate::domain::a001_order::api::{HttpOrdersApi, OrdersApi};
use crate::layout::global_context::use_global_context;
use crate::shared::components::{settle, PanelState, PaginationControls};
use crate::shared::config::AppConfig;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::request_sequence::RequestSequence;
use contracts::domain::a001_order::{Order, OrderListQuery};
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
enum TableBody {
    Loading,
    Rows(Vec<Order>),
    Failed,
}

#[component]
#[allow(non_snake_case)]
pub fn OrdersList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let ctx = use_global_context();
    let state = create_state(config.per_page);
    let status_filter = RwSignal::new(String::new());
    let category_filter = RwSignal::new(String::new());
    let body = RwSignal::new(TableBody::Loading);
    let api = StoredValue::new(HttpOrdersApi::new(config));
    let sequence = StoredValue::new(RequestSequence::new());

    let run = move |query: OrderListQuery| {
        let api = api.get_value();
        let sequence = sequence.get_value();
        let ticket = sequence.issue();
        body.set(TableBody::Loading);
        spawn_local(async move {
            let result = api.list(&query).await;
            match settle(&sequence, ticket, result, "Error loading orders") {
                Some(PanelState::Ready(response)) => {
                    state.update(|s| s.apply(&response));
                    body.set(TableBody::Rows(response.orders));
                }
                Some(_) => body.set(TableBody::Failed),
                None => {}
            }
        });
    };

    let current_filters = move || OrderFilters {
        status: status_filter.get_untracked(),
        category: category_filter.get_untracked(),
    };

    let load_orders = move |page: u32| {
        if let Some(query) = state.try_update(|s| s.begin_load(page, current_filters())) {
            run(query);
        }
    };

    let filter_orders = move || {
        if let Some(query) = state.try_update(|s| s.begin_filter(current_filters())) {
            run(query);
        }
    };

    // первая загрузка и "Refresh" из шапки (текущая страница)
    Effect::new(move |_| {
        ctx.orders_reload.track();
        let page = state.with_untracked(|s| s.page);
        load_orders(page);
    });

    let current_page = Signal::derive(move || state.with(|s| s.page));
    let total_pages = Signal::derive(move || state.with(|s| s.total_pages));

    view! {
        <div class="card">
            <div class="card-header">
                <div class="row g-2 align-items-center">
                    <div class="col-md-4">
                        <Select value=status_filter>
                            <option value="">"All statuses"</option>
                            {OrderStatus::known()
                                .into_iter()
                                .map(|status| {
                                    let code = status.code().to_string();
                                    view! { <option value=code.clone()>{code.clone()}</option> }
                                })
                                .collect_view()}
                        </Select>
                    </div>
                    <div class="col-md-4">
                        <Input value=category_filter placeholder="Category" />
                    </div>
                    <div class="col-md-4">
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| filter_orders()>
                            {icon("search")}
                            " Filter"
                        </Button>
                    </div>
                </div>
            </div>
            <div class="card-body">
                <div class="table-responsive">
                    <table class="table table-striped table-hover">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Customer"</th>
                                <th>"Date"</th>
                                <th>"Status"</th>
                                <th>"Category"</th>
                                <th>"Subtotal"</th>
                                <th>"Quantity"</th>
                            </tr>
                        </thead>
                        <tbody>{move || render_body(body.get())}</tbody>
                    </table>
                </div>
                <PaginationControls
                    current_page=current_page
                    total_pages=total_pages
                    on_page_change=Callback::new(move |page: u32| load_orders(page))
                />
            </div>
        </div>
    }
}

fn render_body(body: TableBody) -> AnyView {
    match body {
        TableBody::Loading => view! {
            <tr>
                <td colspan="7" class="text-center text-muted">"Loading..."</td>
            </tr>
        }
        .into_any(),
        TableBody::Failed => view! {
            <tr>
                <td colspan="7" class="text-center text-danger">"Error loading orders"</td>
            </tr>
        }
        .into_any(),
        TableBody::Rows(orders) if orders.is_empty() => view! {
            <tr>
                <td colspan="7" class="text-center">"No orders found"</td>
            </tr>
        }
        .into_any(),
        TableBody::Rows(orders) => orders
            .into_iter()
            .map(|order| {
                let badge = format!("badge bg-{}", order.status.color());
                view! {
                    <tr>
                        <td>{order.order_id}</td>
                        <td>{order.customer_name}</td>
                        <td>{format_date(order.order_date)}</td>
                        <td><span class=badge>{order.status.to_string()}</span></td>
                        <td>{order.category}</td>
                        <td>{format_money(order.subtotal_amount)}</td>
                        <td>{order.quantity}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any(),
    }
}
