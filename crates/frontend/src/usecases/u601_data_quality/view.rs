use super::api;
use crate::layout::global_context::use_global_context;
use crate::shared::components::{load_into, render_panel, PanelState};
use crate::shared::config::AppConfig;
use crate::shared::number_format::{format_count, format_number_with_decimals, format_percent};
use crate::shared::request_sequence::RequestSequence;
use contracts::usecases::u601_data_quality::{is_complete, DataQualityReport};
use leptos::prelude::*;

/// Badge class of a completeness percentage
pub fn completeness_badge(percentage: f64) -> &'static str {
    if is_complete(percentage) {
        "badge bg-success"
    } else {
        "badge bg-warning"
    }
}

#[component]
pub fn DataQualityReportView() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let ctx = use_global_context();
    let panel = RwSignal::new(PanelState::<DataQualityReport>::Empty);
    let sequence = StoredValue::new(RequestSequence::new());
    let config = StoredValue::new(config);

    // загружается при каждом входе в раздел и по "Refresh"
    Effect::new(move |_| {
        if ctx.quality_reload.get() == 0 {
            return;
        }
        let config = config.get_value();
        load_into(
            panel,
            sequence.get_value(),
            "Error loading the data quality report",
            async move { api::get_quality_report(&config).await },
        );
    });

    view! {
        <div class="card">
            <div class="card-body">
                {move || render_panel(panel.get(), render_report)}
            </div>
        </div>
    }
}

fn render_report(report: DataQualityReport) -> impl IntoView {
    let nulls = report
        .columns_with_nulls()
        .into_iter()
        .map(|(column, count)| (column.to_string(), count))
        .collect::<Vec<_>>();
    let no_nulls = nulls.is_empty();

    view! {
        <div class="row">
            <div class="col-md-6">
                <h6>"General statistics"</h6>
                <ul class="list-group">
                    <li class="list-group-item d-flex justify-content-between">
                        <span>"Total records:"</span>
                        <span class="badge bg-primary">{format_count(report.total_records)}</span>
                    </li>
                    <li class="list-group-item d-flex justify-content-between">
                        <span>"Total columns:"</span>
                        <span class="badge bg-primary">{report.total_columns}</span>
                    </li>
                    <li class="list-group-item d-flex justify-content-between">
                        <span>"Duplicate records:"</span>
                        <span class="badge bg-warning">{report.duplicate_records}</span>
                    </li>
                </ul>
            </div>
            <div class="col-md-6">
                <h6>"Data completeness"</h6>
                <ul class="list-group">
                    {report
                        .data_completeness
                        .into_iter()
                        .map(|(column, percentage)| {
                            view! {
                                <li class="list-group-item d-flex justify-content-between">
                                    <span>{format!("{}:", column)}</span>
                                    <span class=completeness_badge(percentage)>
                                        {format_percent(percentage)}
                                    </span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
        <div class="row mt-3">
            <div class="col-md-6">
                <h6>"Missing values"</h6>
                <Show when=move || no_nulls>
                    <p class="text-muted">"No missing values"</p>
                </Show>
                <ul class="list-group">
                    {nulls
                        .into_iter()
                        .map(|(column, count)| {
                            view! {
                                <li class="list-group-item d-flex justify-content-between">
                                    <span>{format!("{}:", column)}</span>
                                    <span class="badge bg-danger">{format_count(count)}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="col-md-6">
                <h6>"Numeric columns"</h6>
                <table class="table table-sm">
                    <thead>
                        <tr>
                            <th>"Column"</th>
                            <th>"Count"</th>
                            <th>"Mean"</th>
                            <th>"Min"</th>
                            <th>"Max"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {report
                            .basic_statistics
                            .into_iter()
                            .map(|(column, stats)| {
                                view! {
                                    <tr>
                                        <td>{column}</td>
                                        <td>{format_count(stats.count)}</td>
                                        <td>{format_number_with_decimals(stats.mean, 2)}</td>
                                        <td>{format_number_with_decimals(stats.min, 2)}</td>
                                        <td>{format_number_with_decimals(stats.max, 2)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_full_columns_get_the_success_badge() {
        assert_eq!(completeness_badge(100.0), "badge bg-success");
        assert_eq!(completeness_badge(99.99), "badge bg-warning");
        assert_eq!(completeness_badge(0.0), "badge bg-warning");
    }
}
