//! Search → edit → update/delete cycle of a single order, plus bulk status
//! update and order creation.
//!
//! The editing session lives here and nowhere else: update and delete always
//! target the id of the last successful search.

use super::api::OrdersApi;
use super::form::OrderForm;
use super::input::{parse_bulk_ids, parse_order_id, InputError};
use crate::shared::alerts::Severity;
use crate::shared::api_utils::ApiError;
use crate::shared::feedback::UserFeedback;
use crate::shared::request_sequence::RequestSequence;
use contracts::domain::a001_order::{BulkStatusRequest, Order};
use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing { order_id: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Order loaded, session now targets it
    Found(Order),
    /// Backend rejected the lookup, session cleared
    NotFound,
    /// Input did not pass validation, nothing sent
    Invalid,
    /// Transport or decode failure, session unchanged
    Failed,
    /// A newer search was started while this one was in flight
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No session, declined confirmation or backend error
    NotDeleted,
    /// Order removed; `session_closed` is false when a newer search already
    /// moved the session to another order
    Deleted { session_closed: bool },
}

pub struct OrderEditWorkflow<A, F> {
    api: A,
    feedback: F,
    session: Cell<EditSession>,
    searches: RequestSequence,
}

impl<A: OrdersApi, F: UserFeedback> OrderEditWorkflow<A, F> {
    pub fn new(api: A, feedback: F) -> Self {
        Self {
            api,
            feedback,
            session: Cell::new(EditSession::Idle),
            searches: RequestSequence::new(),
        }
    }

    pub fn session(&self) -> EditSession {
        self.session.get()
    }

    pub fn editing_id(&self) -> Option<i64> {
        match self.session.get() {
            EditSession::Editing { order_id } => Some(order_id),
            EditSession::Idle => None,
        }
    }

    pub async fn search(&self, raw_id: &str) -> SearchOutcome {
        let order_id = match parse_order_id(raw_id) {
            Ok(id) => id,
            Err(e) => {
                self.warn(&e);
                return SearchOutcome::Invalid;
            }
        };

        let ticket = self.searches.issue();
        let result = self.api.get(order_id).await;
        if !self.searches.is_current(ticket) {
            log::debug!("search for order {} superseded", order_id);
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(order) => {
                self.session.set(EditSession::Editing {
                    order_id: order.order_id,
                });
                self.feedback.notify("Order found", Severity::Success);
                SearchOutcome::Found(order)
            }
            Err(e) if e.is_rejection() => {
                self.session.set(EditSession::Idle);
                self.report(&e, "Error searching for the order");
                SearchOutcome::NotFound
            }
            Err(e) => {
                self.report(&e, "Error searching for the order");
                SearchOutcome::Failed
            }
        }
    }

    /// PUT the edit form to the order of the current session
    pub async fn update(&self, form: &OrderForm) -> bool {
        let Some(order_id) = self.editing_id() else {
            self.warn(&InputError::NoEditingSession);
            return false;
        };
        let payload = match form.to_payload() {
            Ok(p) => p,
            Err(e) => {
                self.warn(&e);
                return false;
            }
        };

        match self.api.update(order_id, &payload).await {
            Ok(_) => {
                self.feedback
                    .notify("Order updated successfully", Severity::Success);
                true
            }
            Err(e) => {
                self.report(&e, "Error updating the order");
                false
            }
        }
    }

    pub async fn delete(&self) -> DeleteOutcome {
        let Some(order_id) = self.editing_id() else {
            self.warn(&InputError::NoEditingSession);
            return DeleteOutcome::NotDeleted;
        };
        let question = format!("Are you sure you want to delete order {}?", order_id);
        if !self.feedback.confirm(&question) {
            return DeleteOutcome::NotDeleted;
        }

        match self.api.delete(order_id).await {
            Ok(_) => {
                let session_closed = self.session.get() == EditSession::Editing { order_id };
                if session_closed {
                    // a search still in flight must not reopen the deleted order
                    self.searches.issue();
                    self.session.set(EditSession::Idle);
                } else {
                    log::debug!("order {} deleted, session already moved on", order_id);
                }
                self.feedback
                    .notify("Order deleted successfully", Severity::Success);
                DeleteOutcome::Deleted { session_closed }
            }
            Err(e) => {
                self.report(&e, "Error deleting the order");
                DeleteOutcome::NotDeleted
            }
        }
    }

    /// Returns the number of updated orders on success
    pub async fn bulk_update_status(&self, raw_ids: &str, status: &str) -> Option<u64> {
        let order_ids = match parse_bulk_ids(raw_ids) {
            Ok(ids) => ids,
            Err(e) => {
                self.warn(&e);
                return None;
            }
        };
        let question = format!(
            "Are you sure you want to update {} orders to status \"{}\"?",
            order_ids.len(),
            status
        );
        if !self.feedback.confirm(&question) {
            return None;
        }

        let request = BulkStatusRequest {
            order_ids,
            status: status.to_string(),
        };
        match self.api.bulk_status(&request).await {
            Ok(response) => {
                self.feedback.notify(
                    &format!("{} orders updated successfully", response.updated_count),
                    Severity::Success,
                );
                Some(response.updated_count)
            }
            Err(e) => {
                self.report(&e, "Error updating the orders");
                None
            }
        }
    }

    /// Returns the id assigned by the backend
    pub async fn create(&self, form: &OrderForm) -> Option<i64> {
        let payload = match form.to_payload() {
            Ok(p) => p,
            Err(e) => {
                self.warn(&e);
                return None;
            }
        };

        match self.api.create(&payload).await {
            Ok(created) => {
                self.feedback.notify(
                    &format!("Order created successfully with ID: {}", created.order_id),
                    Severity::Success,
                );
                Some(created.order_id)
            }
            Err(e) => {
                self.report(&e, "Error creating the order");
                None
            }
        }
    }

    fn warn(&self, error: &InputError) {
        self.feedback.notify(&error.to_string(), Severity::Warning);
    }

    fn report(&self, error: &ApiError, fallback: &str) {
        if !error.is_rejection() {
            log::error!("{}: {}", fallback, error);
        }
        self.feedback
            .notify(&error.user_message(fallback), Severity::Danger);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::feedback::testing::RecordingFeedback;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use contracts::domain::a001_order::{
        BulkStatusResponse, OrderListQuery, OrderListResponse, OrderMutationResponse,
        OrderPayload,
    };
    use contracts::enums::order_status::OrderStatus;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockApi {
        calls: RefCell<Vec<String>>,
        missing: Vec<i64>,
        offline: Cell<bool>,
        reject_mutations: Cell<bool>,
        // held open until the test releases it
        get_gate: RefCell<Option<oneshot::Receiver<()>>>,
        delete_gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl MockApi {
        fn record(&self, call: String) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call);
            if self.offline.get() {
                return Err(ApiError::Transport("connection refused".into()));
            }
            Ok(())
        }

        fn mutation(&self, order_id: i64) -> Result<OrderMutationResponse, ApiError> {
            if self.reject_mutations.get() {
                return Err(ApiError::Rejected {
                    status: 400,
                    message: "Invalid data".into(),
                });
            }
            Ok(OrderMutationResponse {
                message: "ok".into(),
                order_id,
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    fn sample_order(order_id: i64) -> Order {
        Order {
            order_id,
            customer_name: "Ana Torres".into(),
            order_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            status: OrderStatus::Finished,
            category: "Technology".into(),
            subcategory: "Phones".into(),
            quantity: 2,
            subtotal_amount: 100.0,
            tax_rate: 0.16,
            shipping_cost: 5.0,
        }
    }

    #[async_trait(?Send)]
    impl OrdersApi for MockApi {
        async fn list(&self, query: &OrderListQuery) -> Result<OrderListResponse, ApiError> {
            self.record(format!("GET list page={}", query.page))?;
            Ok(OrderListResponse {
                orders: vec![],
                total: 0,
                page: query.page,
                per_page: query.per_page,
                total_pages: 0,
            })
        }

        async fn get(&self, order_id: i64) -> Result<Order, ApiError> {
            self.record(format!("GET {}", order_id))?;
            let gate = self.get_gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            if self.missing.contains(&order_id) {
                return Err(ApiError::Rejected {
                    status: 404,
                    message: "Order not found".into(),
                });
            }
            Ok(sample_order(order_id))
        }

        async fn create(&self, _payload: &OrderPayload) -> Result<OrderMutationResponse, ApiError> {
            self.record("POST".into())?;
            self.mutation(1001)
        }

        async fn update(
            &self,
            order_id: i64,
            _payload: &OrderPayload,
        ) -> Result<OrderMutationResponse, ApiError> {
            self.record(format!("PUT {}", order_id))?;
            self.mutation(order_id)
        }

        async fn delete(&self, order_id: i64) -> Result<OrderMutationResponse, ApiError> {
            self.record(format!("DELETE {}", order_id))?;
            let gate = self.delete_gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            self.mutation(order_id)
        }

        async fn bulk_status(
            &self,
            request: &BulkStatusRequest,
        ) -> Result<BulkStatusResponse, ApiError> {
            self.record(format!("PATCH {:?} {}", request.order_ids, request.status))?;
            Ok(BulkStatusResponse {
                message: "ok".into(),
                updated_count: request.order_ids.len() as u64,
                new_status: request.status.clone(),
            })
        }
    }

    fn workflow(answer: bool) -> OrderEditWorkflow<MockApi, RecordingFeedback> {
        OrderEditWorkflow::new(MockApi::default(), RecordingFeedback::answering(answer))
    }

    #[test]
    fn delete_without_session_sends_nothing() {
        let wf = workflow(true);

        assert_eq!(block_on(wf.delete()), DeleteOutcome::NotDeleted);

        assert!(wf.api.calls().is_empty());
        assert!(wf.feedback.questions.borrow().is_empty());
        assert_eq!(wf.feedback.count(Severity::Warning), 1);
    }

    #[test]
    fn update_targets_the_last_successful_search() {
        let wf = workflow(true);

        assert!(matches!(block_on(wf.search("7")), SearchOutcome::Found(_)));
        assert!(matches!(block_on(wf.search(" 42 ")), SearchOutcome::Found(_)));
        let form = OrderForm::from_order(&sample_order(42));
        assert!(block_on(wf.update(&form)));

        assert_eq!(wf.api.calls(), vec!["GET 7", "GET 42", "PUT 42"]);
        assert_eq!(wf.session(), EditSession::Editing { order_id: 42 });
    }

    #[test]
    fn rejected_search_clears_the_session() {
        let wf = OrderEditWorkflow::new(
            MockApi {
                missing: vec![99],
                ..MockApi::default()
            },
            RecordingFeedback::answering(true),
        );

        block_on(wf.search("5"));
        assert_eq!(block_on(wf.search("99")), SearchOutcome::NotFound);

        assert_eq!(wf.session(), EditSession::Idle);
        assert_eq!(
            wf.feedback.last(),
            Some(("Error: Order not found".to_string(), Severity::Danger))
        );
    }

    #[test]
    fn transport_failure_keeps_the_session() {
        let wf = workflow(true);
        block_on(wf.search("5"));

        wf.api.offline.set(true);
        assert_eq!(block_on(wf.search("6")), SearchOutcome::Failed);

        assert_eq!(wf.session(), EditSession::Editing { order_id: 5 });
        assert_eq!(
            wf.feedback.last(),
            Some(("Error searching for the order".to_string(), Severity::Danger))
        );
    }

    #[test]
    fn blank_or_non_numeric_search_sends_nothing() {
        let wf = workflow(true);

        assert_eq!(block_on(wf.search("")), SearchOutcome::Invalid);
        assert_eq!(block_on(wf.search("abc")), SearchOutcome::Invalid);

        assert!(wf.api.calls().is_empty());
        assert_eq!(wf.feedback.count(Severity::Warning), 2);
    }

    #[test]
    fn declined_confirmation_keeps_the_order() {
        let wf = workflow(false);
        block_on(wf.search("42"));

        assert_eq!(block_on(wf.delete()), DeleteOutcome::NotDeleted);

        assert_eq!(wf.api.calls(), vec!["GET 42"]);
        assert_eq!(wf.session(), EditSession::Editing { order_id: 42 });
        assert_eq!(
            wf.feedback.questions.borrow().as_slice(),
            ["Are you sure you want to delete order 42?"]
        );
    }

    #[test]
    fn successful_delete_returns_to_idle() {
        let wf = workflow(true);
        block_on(wf.search("42"));

        assert_eq!(
            block_on(wf.delete()),
            DeleteOutcome::Deleted {
                session_closed: true
            }
        );

        assert_eq!(wf.api.calls(), vec!["GET 42", "DELETE 42"]);
        assert_eq!(wf.session(), EditSession::Idle);
    }

    #[test]
    fn search_during_delete_keeps_the_new_session() {
        let wf = workflow(true);
        block_on(wf.search("42"));
        let (release, gate) = oneshot::channel();
        wf.api.delete_gate.replace(Some(gate));

        let search_then_release = async {
            let outcome = wf.search("43").await;
            let _ = release.send(());
            outcome
        };
        let (deleted, found) = block_on(async { futures::join!(wf.delete(), search_then_release) });

        assert_eq!(
            deleted,
            DeleteOutcome::Deleted {
                session_closed: false
            }
        );
        assert!(matches!(found, SearchOutcome::Found(_)));
        assert_eq!(wf.session(), EditSession::Editing { order_id: 43 });
        assert_eq!(wf.api.calls(), vec!["GET 42", "DELETE 42", "GET 43"]);
    }

    #[test]
    fn search_in_flight_cannot_reopen_a_deleted_order() {
        let wf = workflow(true);
        block_on(wf.search("42"));
        let (release, gate) = oneshot::channel();
        wf.api.get_gate.replace(Some(gate));

        let delete_then_release = async {
            let outcome = wf.delete().await;
            let _ = release.send(());
            outcome
        };
        let (found, deleted) = block_on(async { futures::join!(wf.search("42"), delete_then_release) });

        assert_eq!(found, SearchOutcome::Superseded);
        assert_eq!(
            deleted,
            DeleteOutcome::Deleted {
                session_closed: true
            }
        );
        assert_eq!(wf.session(), EditSession::Idle);
    }

    #[test]
    fn failed_delete_stays_editing() {
        let wf = workflow(true);
        block_on(wf.search("42"));
        wf.api.reject_mutations.set(true);

        assert_eq!(block_on(wf.delete()), DeleteOutcome::NotDeleted);

        assert_eq!(wf.session(), EditSession::Editing { order_id: 42 });
        assert_eq!(
            wf.feedback.last(),
            Some(("Error: Invalid data".to_string(), Severity::Danger))
        );
    }

    #[test]
    fn bulk_update_sends_only_numeric_ids() {
        let wf = workflow(true);

        let updated = block_on(wf.bulk_update_status("1, 2, abc, 4", "Order Cancelled"));

        assert_eq!(updated, Some(3));
        assert_eq!(wf.api.calls(), vec!["PATCH [1, 2, 4] Order Cancelled"]);
        assert_eq!(
            wf.feedback.questions.borrow().as_slice(),
            ["Are you sure you want to update 3 orders to status \"Order Cancelled\"?"]
        );
    }

    #[test]
    fn bulk_update_without_valid_ids_sends_nothing() {
        let wf = workflow(true);

        assert_eq!(block_on(wf.bulk_update_status("abc, x", "Order Finished")), None);
        assert_eq!(block_on(wf.bulk_update_status("", "Order Finished")), None);

        assert!(wf.api.calls().is_empty());
        assert!(wf.feedback.questions.borrow().is_empty());
        assert_eq!(wf.feedback.count(Severity::Warning), 2);
    }

    #[test]
    fn create_with_invalid_quantity_sends_nothing() {
        let wf = workflow(true);
        let mut form = OrderForm::from_order(&sample_order(0));
        form.quantity = "lots".into();

        assert_eq!(block_on(wf.create(&form)), None);

        assert!(wf.api.calls().is_empty());
        assert_eq!(wf.feedback.count(Severity::Warning), 1);
    }

    #[test]
    fn create_reports_the_new_id() {
        let wf = workflow(true);
        let form = OrderForm::from_order(&sample_order(0));

        assert_eq!(block_on(wf.create(&form)), Some(1001));
        assert_eq!(
            wf.feedback.last(),
            Some((
                "Order created successfully with ID: 1001".to_string(),
                Severity::Success
            ))
        );
    }
}
