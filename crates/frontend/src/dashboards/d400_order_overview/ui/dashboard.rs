use crate::dashboards::d400_order_overview::api::{load_dashboard, HttpStatsSource};
use crate::dashboards::d400_order_overview::charts::{
    category_revenue_chart_config, render_chart, status_chart_config, yearly_chart_config,
    ChartHandle,
};
use crate::layout::global_context::use_global_context;
use crate::shared::alerts::use_alerts;
use crate::shared::components::{CardTone, StatCard};
use crate::shared::config::AppConfig;
use crate::shared::feedback::BrowserFeedback;
use crate::shared::number_format::format_count;
use crate::shared::request_sequence::RequestSequence;
use contracts::dashboards::d400_order_overview::DashboardStats;
use leptos::html::Canvas;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Счетчик дубликатов пока не приходит с backend, показывается заглушка.
/// Replace with a real value once `/api/dashboard/stats` reports duplicates.
pub const DUPLICATES_PLACEHOLDER: &str = "2";

#[component]
pub fn OrderOverviewDashboard() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let ctx = use_global_context();
    let feedback = BrowserFeedback::new(use_alerts());

    let (stats, set_stats) = signal(None::<DashboardStats>);
    let sequence = StoredValue::new(RequestSequence::new());
    let config = StoredValue::new(config);

    let status_canvas = NodeRef::<Canvas>::new();
    let category_canvas = NodeRef::<Canvas>::new();
    let yearly_canvas = NodeRef::<Canvas>::new();
    // Chart.js instances are JS objects, keep them on this thread only
    let charts = StoredValue::new_local(Vec::<ChartHandle>::new());

    let draw_charts = move |data: &DashboardStats| {
        charts.update_value(|live| live.drain(..).for_each(ChartHandle::destroy));

        let targets = [
            (status_canvas, status_chart_config(&data.status_distribution), &[][..]),
            (category_canvas, category_revenue_chart_config(&data.category_revenue), &["y"][..]),
            (yearly_canvas, yearly_chart_config(&data.yearly_stats), &["y1"][..]),
        ];
        for (canvas_ref, chart_config, money_axes) in targets {
            let Some(canvas) = canvas_ref.get_untracked() else {
                log::warn!("dashboard canvas is not mounted");
                continue;
            };
            match render_chart(&canvas, &chart_config, money_axes) {
                Ok(handle) => charts.update_value(|live| live.push(handle)),
                Err(e) => log::error!("Failed to render chart: {:?}", e),
            }
        }
    };

    // первая загрузка и повторные по dashboard_reload
    Effect::new(move |_| {
        ctx.dashboard_reload.track();
        let sequence = sequence.get_value();
        let source = HttpStatsSource::new(config.get_value());
        spawn_local(async move {
            if let Some(data) = load_dashboard(&source, &sequence, &feedback).await {
                draw_charts(&data);
                set_stats.set(Some(data));
            }
        });
    });

    let total_orders = Signal::derive(move || {
        stats.with(|s| s.as_ref().map(|s| format_count(s.total_orders)))
    });
    let completed_orders = Signal::derive(move || {
        stats.with(|s| s.as_ref().map(|s| format_count(s.completed_orders())))
    });
    let duplicates = Signal::derive(move || {
        stats.with(|s| s.as_ref().map(|_| DUPLICATES_PLACEHOLDER.to_string()))
    });
    let categories = Signal::derive(move || {
        stats.with(|s| s.as_ref().map(|s| s.category_count().to_string()))
    });

    view! {
        <div class="d400-dashboard">
            <div class="row g-3 mb-4">
                <div class="col-md-3">
                    <StatCard label="Total orders" icon_name="orders" value=total_orders />
                </div>
                <div class="col-md-3">
                    <StatCard
                        label="Completed orders"
                        icon_name="quality"
                        value=completed_orders
                        tone=CardTone::Success
                    />
                </div>
                <div class="col-md-3">
                    <StatCard
                        label="Duplicates"
                        icon_name="cleaning"
                        value=duplicates
                        tone=CardTone::Warning
                    />
                </div>
                <div class="col-md-3">
                    <StatCard label="Categories" icon_name="dashboard" value=categories tone=CardTone::Info />
                </div>
            </div>
            <div class="row g-3">
                <div class="col-md-6">
                    <div class="card">
                        <div class="card-header">"Orders by status"</div>
                        <div class="card-body chart-container" style="height: 300px;">
                            <canvas node_ref=status_canvas></canvas>
                        </div>
                    </div>
                </div>
                <div class="col-md-6">
                    <div class="card">
                        <div class="card-header">"Revenue by category"</div>
                        <div class="card-body chart-container" style="height: 300px;">
                            <canvas node_ref=category_canvas></canvas>
                        </div>
                    </div>
                </div>
                <div class="col-12">
                    <div class="card">
                        <div class="card-header">"Yearly trend"</div>
                        <div class="card-body chart-container" style="height: 350px;">
                            <canvas node_ref=yearly_canvas></canvas>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
