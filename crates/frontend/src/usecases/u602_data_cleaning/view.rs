use super::api::{run_check, CleaningCheck, CleaningResult};
use crate::shared::components::{load_into, render_panel, PanelState};
use crate::shared::config::AppConfig;
use crate::shared::date_utils::format_date_str;
use crate::shared::icons::icon;
use crate::shared::request_sequence::RequestSequence;
use contracts::usecases::u602_data_cleaning::{DuplicateScan, IncompleteScan, ValidationScan};
use leptos::prelude::*;
use thaw::*;

pub const NO_EXAMPLES_TEXT: &str = "No examples available";
pub const NO_IDS_TEXT: &str = "Not available";
pub const NO_DETAILS_TEXT: &str = "No details available";

/// Problem ids as a comma separated list, or the fallback when not reported
pub fn problem_ids_text(scan: &IncompleteScan) -> String {
    match &scan.summary.problematic_order_ids {
        Some(ids) => ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        None => NO_IDS_TEXT.to_string(),
    }
}

pub fn validation_issue_lines(scan: &ValidationScan) -> Vec<String> {
    match &scan.summary.validation_issues {
        Some(issues) => issues.clone(),
        None => vec![NO_DETAILS_TEXT.to_string()],
    }
}

#[component]
pub fn DataCleaningView() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let config = StoredValue::new(config);
    // один контейнер на все три проверки
    let panel = RwSignal::new(PanelState::<CleaningResult>::Empty);
    let sequence = StoredValue::new(RequestSequence::new());

    let run = move |check: CleaningCheck| {
        let config = config.get_value();
        load_into(panel, sequence.get_value(), check.failure_text(), async move {
            run_check(&config, check).await
        });
    };

    view! {
        <div class="card mb-3">
            <div class="card-body d-flex gap-2 flex-wrap">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| run(CleaningCheck::Duplicates)>
                    {icon("copy")}
                    " Check duplicates"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| run(CleaningCheck::Incomplete)>
                    {icon("search")}
                    " Check incomplete records"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| run(CleaningCheck::Validation)>
                    {icon("quality")}
                    " Validate data types"
                </Button>
            </div>
        </div>
        <div id="cleaning-results">
            {move || render_panel(panel.get(), render_result)}
        </div>
    }
}

fn render_result(result: CleaningResult) -> AnyView {
    match result {
        CleaningResult::Duplicates(scan) => render_duplicates(scan).into_any(),
        CleaningResult::Incomplete(scan) => render_incomplete(scan).into_any(),
        CleaningResult::Validation(scan) => render_validation(scan).into_any(),
    }
}

fn counter(value: u64, label: &'static str, tone: &'static str, width: &'static str) -> impl IntoView {
    view! {
        <div class=width>
            <div class="text-center">
                <h4 class=format!("text-{}", tone)>{value}</h4>
                <p class="mb-0">{label}</p>
            </div>
        </div>
    }
}

fn result_card(title: &'static str, body: AnyView) -> impl IntoView {
    view! {
        <div class="card mt-3">
            <div class="card-header">
                <h6>{title}</h6>
            </div>
            <div class="card-body">{body}</div>
        </div>
    }
}

fn render_duplicates(scan: DuplicateScan) -> impl IntoView {
    let unique = scan.unique_records();
    let details = if scan.duplicates_found > 0 {
        let rows = match scan.summary.duplicate_examples {
            Some(examples) => examples
                .into_iter()
                .map(|dup| {
                    view! {
                        <tr>
                            <td>{dup.order_id}</td>
                            <td>{dup.customer_name}</td>
                            <td>{format_date_str(&dup.order_date)}</td>
                            <td>{dup.category}</td>
                        </tr>
                    }
                })
                .collect_view()
                .into_any(),
            None => view! {
                <tr>
                    <td colspan="4">{NO_EXAMPLES_TEXT}</td>
                </tr>
            }
            .into_any(),
        };
        view! {
            <div class="mt-3">
                <h6>"Duplicate examples:"</h6>
                <div class="table-responsive">
                    <table class="table table-sm">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Customer"</th>
                                <th>"Date"</th>
                                <th>"Category"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            </div>
        }
        .into_any()
    } else {
        view! { <div class="alert alert-success mt-3">"No duplicates found!"</div> }.into_any()
    };

    let body = view! {
        <div class="row">
            {counter(scan.duplicates_found, "Duplicates found", "warning", "col-md-3")}
            {counter(scan.total_records, "Total records", "info", "col-md-3")}
            {counter(scan.warnings, "Warnings", "warning", "col-md-3")}
            {counter(unique, "Unique records", "success", "col-md-3")}
        </div>
        {details}
    }
    .into_any();
    result_card("Duplicate check results", body)
}

fn render_incomplete(scan: IncompleteScan) -> impl IntoView {
    let details = if scan.incomplete_records > 0 {
        view! {
            <div class="mt-3">
                <h6>"Problems found:"</h6>
                <div class="alert alert-warning">
                    <strong>"Problematic record IDs: "</strong>
                    {problem_ids_text(&scan)}
                </div>
            </div>
        }
        .into_any()
    } else {
        view! { <div class="alert alert-success mt-3">"No incomplete records found!"</div> }
            .into_any()
    };

    let body = view! {
        <div class="row">
            {counter(scan.incomplete_records, "Problematic records", "danger", "col-md-3")}
            {counter(scan.errors, "Errors", "danger", "col-md-3")}
            {counter(scan.warnings, "Warnings", "warning", "col-md-3")}
            {counter(scan.valid_records(), "Valid records", "success", "col-md-3")}
        </div>
        {details}
    }
    .into_any();
    result_card("Incomplete record check results", body)
}

fn render_validation(scan: ValidationScan) -> impl IntoView {
    let details = if scan.warnings > 0 {
        let items = validation_issue_lines(&scan)
            .into_iter()
            .map(|issue| view! { <li class="list-group-item">{issue}</li> })
            .collect_view();
        view! {
            <div class="mt-3">
                <h6>"Validation problems:"</h6>
                <ul class="list-group">{items}</ul>
            </div>
        }
        .into_any()
    } else {
        view! { <div class="alert alert-success mt-3">"All data passed validation!"</div> }
            .into_any()
    };

    let body = view! {
        <div class="row">
            {counter(scan.errors, "Errors", "danger", "col-md-4")}
            {counter(scan.warnings, "Warnings", "warning", "col-md-4")}
            {counter(scan.valid_records(), "Valid records", "success", "col-md-4")}
        </div>
        {details}
    }
    .into_any();
    result_card("Data type validation results", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u602_data_cleaning::{IncompleteSummary, ValidationSummary};

    #[test]
    fn missing_problem_ids_fall_back() {
        let mut scan = IncompleteScan {
            total_records: 10,
            incomplete_records: 2,
            ..IncompleteScan::default()
        };
        assert_eq!(problem_ids_text(&scan), "Not available");

        scan.summary = IncompleteSummary {
            problematic_order_ids: Some(vec![3, 8]),
        };
        assert_eq!(problem_ids_text(&scan), "3, 8");
    }

    #[test]
    fn missing_issues_fall_back() {
        let mut scan = ValidationScan {
            total_records: 10,
            warnings: 1,
            ..ValidationScan::default()
        };
        assert_eq!(validation_issue_lines(&scan), vec!["No details available"]);

        scan.summary = ValidationSummary {
            validation_issues: Some(vec!["quantity: negative value".into()]),
        };
        assert_eq!(validation_issue_lines(&scan), vec!["quantity: negative value"]);
    }
}
