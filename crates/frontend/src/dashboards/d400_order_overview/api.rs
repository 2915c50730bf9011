use crate::shared::alerts::Severity;
use crate::shared::api_utils::{get_json, ApiError};
use crate::shared::config::AppConfig;
use crate::shared::feedback::UserFeedback;
use crate::shared::request_sequence::RequestSequence;
use async_trait::async_trait;
use contracts::dashboards::d400_order_overview::DashboardStats;

pub const LOAD_FAILED_TEXT: &str = "Error loading dashboard data";

#[async_trait(?Send)]
pub trait StatsSource {
    async fn fetch_stats(&self) -> Result<DashboardStats, ApiError>;
}

/// Агрегированная статистика для дашборда
pub struct HttpStatsSource {
    config: AppConfig,
}

impl HttpStatsSource {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl StatsSource for HttpStatsSource {
    async fn fetch_stats(&self) -> Result<DashboardStats, ApiError> {
        get_json(&self.config.api_url("/api/dashboard/stats")).await
    }
}

/// One dashboard load. Returns the stats to draw, or `None` when the load
/// failed (danger banner, no retry) or a newer load was started meanwhile.
pub async fn load_dashboard<S, F>(
    source: &S,
    sequence: &RequestSequence,
    feedback: &F,
) -> Option<DashboardStats>
where
    S: StatsSource,
    F: UserFeedback,
{
    let ticket = sequence.issue();
    let result = source.fetch_stats().await;
    if !sequence.is_current(ticket) {
        log::debug!("stale dashboard response dropped");
        return None;
    }
    match result {
        Ok(stats) => Some(stats),
        Err(e) => {
            log::error!("{}: {}", LOAD_FAILED_TEXT, e);
            feedback.notify(LOAD_FAILED_TEXT, Severity::Danger);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::feedback::testing::RecordingFeedback;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    type Reply = Result<DashboardStats, ApiError>;

    /// Each fetch waits for the next queued reply
    #[derive(Default)]
    struct QueuedSource {
        replies: RefCell<VecDeque<oneshot::Receiver<Reply>>>,
        fetches: Cell<usize>,
    }

    impl QueuedSource {
        fn expect_reply(&self) -> oneshot::Sender<Reply> {
            let (tx, rx) = oneshot::channel();
            self.replies.borrow_mut().push_back(rx);
            tx
        }
    }

    #[async_trait(?Send)]
    impl StatsSource for QueuedSource {
        async fn fetch_stats(&self) -> Result<DashboardStats, ApiError> {
            self.fetches.set(self.fetches.get() + 1);
            let reply = self.replies.borrow_mut().pop_front();
            match reply {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(ApiError::Transport("dropped".into()))),
                None => Err(ApiError::Transport("no reply queued".into())),
            }
        }
    }

    fn stats(total_orders: u64) -> DashboardStats {
        DashboardStats {
            total_orders,
            ..DashboardStats::default()
        }
    }

    #[test]
    fn older_response_arriving_last_is_dropped() {
        let source = QueuedSource::default();
        let sequence = RequestSequence::new();
        let feedback = RecordingFeedback::default();
        let first = source.expect_reply();
        let second = source.expect_reply();

        let answer_out_of_order = async {
            let _ = second.send(Ok(stats(20)));
            let _ = first.send(Ok(stats(10)));
        };
        let (old, new, ()) = block_on(async {
            futures::join!(
                load_dashboard(&source, &sequence, &feedback),
                load_dashboard(&source, &sequence, &feedback),
                answer_out_of_order
            )
        });

        assert!(old.is_none());
        assert_eq!(new.map(|s| s.total_orders), Some(20));
        assert!(feedback.notes.borrow().is_empty());
    }

    #[test]
    fn failure_raises_one_danger_banner_without_retry() {
        let source = QueuedSource::default();
        let sequence = RequestSequence::new();
        let feedback = RecordingFeedback::default();
        let reply = source.expect_reply();
        let _ = reply.send(Err(ApiError::Rejected {
            status: 500,
            message: "database is down".into(),
        }));

        assert!(block_on(load_dashboard(&source, &sequence, &feedback)).is_none());

        assert_eq!(source.fetches.get(), 1);
        assert_eq!(
            feedback.notes.borrow().as_slice(),
            [(LOAD_FAILED_TEXT.to_string(), Severity::Danger)]
        );
    }

    #[test]
    fn stale_failure_stays_silent() {
        let source = QueuedSource::default();
        let sequence = RequestSequence::new();
        let feedback = RecordingFeedback::default();
        let first = source.expect_reply();
        let second = source.expect_reply();

        let answer_out_of_order = async {
            let _ = second.send(Ok(stats(3)));
            let _ = first.send(Err(ApiError::Transport("timeout".into())));
        };
        let (old, new, ()) = block_on(async {
            futures::join!(
                load_dashboard(&source, &sequence, &feedback),
                load_dashboard(&source, &sequence, &feedback),
                answer_out_of_order
            )
        });

        assert!(old.is_none());
        assert!(new.is_some());
        assert_eq!(feedback.count(Severity::Danger), 0);
    }
}
