//! Chart.js configurations for the overview dashboard
//!
//! Configs are plain JSON built from the stats response; only the tick
//! formatters are attached as JS functions when the chart is created.

use contracts::dashboards::d400_order_overview::YearlyStat;
use contracts::enums::order_status::OrderStatus;
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_json::{json, Value};
use serde_wasm_bindgen::Serializer;
use std::collections::BTreeMap;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

pub const CATEGORY_COLORS: [&str; 3] = ["#007bff", "#28a745", "#ffc107"];

const MONEY_TICK: &str = "return '$' + Number(value).toLocaleString();";

/// Slice colour of a status label, same palette as the status badges
pub fn status_slice_color(label: &str) -> &'static str {
    match OrderStatus::from_code(label).color() {
        "success" => "#28a745",
        "warning" => "#ffc107",
        "danger" => "#dc3545",
        _ => "#6c757d",
    }
}

/// Doughnut of order count per status
pub fn status_chart_config(distribution: &BTreeMap<String, u64>) -> Value {
    json!({
        "type": "doughnut",
        "data": {
            "labels": distribution.keys().collect::<Vec<_>>(),
            "datasets": [{
                "data": distribution.values().collect::<Vec<_>>(),
                "backgroundColor": distribution
                    .keys()
                    .map(|label| status_slice_color(label))
                    .collect::<Vec<_>>(),
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "position": "bottom" } }
        }
    })
}

/// Bar chart of revenue per category
pub fn category_revenue_chart_config(revenue: &BTreeMap<String, f64>) -> Value {
    json!({
        "type": "bar",
        "data": {
            "labels": revenue.keys().collect::<Vec<_>>(),
            "datasets": [{
                "label": "Revenue ($)",
                "data": revenue.values().collect::<Vec<_>>(),
                "backgroundColor": CATEGORY_COLORS,
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": { "y": { "beginAtZero": true } }
        }
    })
}

/// Orders (left axis) and revenue (right axis) per year
pub fn yearly_chart_config(yearly: &[YearlyStat]) -> Value {
    json!({
        "type": "line",
        "data": {
            "labels": yearly.iter().map(|y| y.year).collect::<Vec<_>>(),
            "datasets": [
                {
                    "label": "Orders",
                    "data": yearly.iter().map(|y| y.orders).collect::<Vec<_>>(),
                    "borderColor": "#007bff",
                    "backgroundColor": "rgba(0, 123, 255, 0.1)",
                    "tension": 0.4
                },
                {
                    "label": "Revenue ($)",
                    "data": yearly.iter().map(|y| y.revenue).collect::<Vec<_>>(),
                    "borderColor": "#28a745",
                    "backgroundColor": "rgba(40, 167, 69, 0.1)",
                    "tension": 0.4,
                    "yAxisID": "y1"
                }
            ]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": {
                "y": { "type": "linear", "display": true, "position": "left" },
                "y1": {
                    "type": "linear",
                    "display": true,
                    "position": "right",
                    "grid": { "drawOnChartArea": false }
                }
            }
        }
    })
}

/// Live Chart.js instance; destroyed explicitly before its canvas is reused
pub struct ChartHandle(JsValue);

impl ChartHandle {
    pub fn destroy(self) {
        let destroy = Reflect::get(&self.0, &JsValue::from_str("destroy"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        if let Some(destroy) = destroy {
            if let Err(e) = destroy.call0(&self.0) {
                log::warn!("Chart destroy failed: {:?}", e);
            }
        }
    }
}

/// `new Chart(canvas, config)`, with `$` tick labels on the listed axes
pub fn render_chart(
    canvas: &HtmlCanvasElement,
    config: &Value,
    money_axes: &[&str],
) -> Result<ChartHandle, JsValue> {
    let constructor: Function = Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("Chart.js is not loaded"))?;

    let config_js = config
        .serialize(&Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    for axis in money_axes {
        attach_money_ticks(&config_js, axis)?;
    }

    let instance = Reflect::construct(&constructor, &Array::of2(canvas, &config_js))?;
    Ok(ChartHandle(instance))
}

fn attach_money_ticks(config: &JsValue, axis: &str) -> Result<(), JsValue> {
    let options = Reflect::get(config, &JsValue::from_str("options"))?;
    let scales = Reflect::get(&options, &JsValue::from_str("scales"))?;
    let axis_value = Reflect::get(&scales, &JsValue::from_str(axis))?;
    if axis_value.is_undefined() {
        return Err(JsValue::from_str(&format!("axis '{}' not found", axis)));
    }

    let ticks = js_sys::Object::new();
    let callback = Function::new_with_args("value", MONEY_TICK);
    Reflect::set(&ticks, &JsValue::from_str("callback"), &callback)?;
    Reflect::set(&axis_value, &JsValue::from_str("ticks"), &ticks)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_chart_keeps_labels_and_counts_aligned() {
        let distribution = BTreeMap::from([
            ("Order Finished".to_string(), 700u64),
            ("Order Returned".to_string(), 200),
            ("Order Cancelled".to_string(), 100),
        ]);

        let config = status_chart_config(&distribution);

        assert_eq!(config["type"], "doughnut");
        assert_eq!(
            config["data"]["labels"],
            json!(["Order Cancelled", "Order Finished", "Order Returned"])
        );
        assert_eq!(config["data"]["datasets"][0]["data"], json!([100, 700, 200]));
        assert_eq!(
            config["data"]["datasets"][0]["backgroundColor"],
            json!(["#dc3545", "#28a745", "#ffc107"])
        );
    }

    #[test]
    fn unknown_status_slice_is_grey() {
        let distribution = BTreeMap::from([("On Hold".to_string(), 3u64)]);

        let config = status_chart_config(&distribution);

        assert_eq!(config["data"]["datasets"][0]["backgroundColor"], json!(["#6c757d"]));
    }

    #[test]
    fn yearly_chart_puts_revenue_on_second_axis() {
        let yearly = vec![
            YearlyStat { year: 2022, orders: 10, revenue: 1500.5 },
            YearlyStat { year: 2023, orders: 12, revenue: 1800.0 },
        ];

        let config = yearly_chart_config(&yearly);

        assert_eq!(config["data"]["labels"], json!([2022, 2023]));
        let datasets = &config["data"]["datasets"];
        assert_eq!(datasets[0]["data"], json!([10, 12]));
        assert_eq!(datasets[1]["data"], json!([1500.5, 1800.0]));
        assert_eq!(datasets[1]["yAxisID"], "y1");
        assert_eq!(config["options"]["scales"]["y1"]["position"], "right");
    }

    #[test]
    fn empty_inputs_give_empty_charts() {
        let config = category_revenue_chart_config(&BTreeMap::new());
        assert_eq!(config["data"]["labels"], json!([]));
        assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(yearly_chart_config(&[])["data"]["datasets"][0]["data"], json!([]));
    }
}
