//! User-facing side of a workflow: banners and confirmation prompts
//!
//! Workflows talk to the user through [`UserFeedback`] so they can run
//! against a recording double in tests.

use crate::shared::alerts::{AlertService, Severity};

pub trait UserFeedback {
    fn notify(&self, message: &str, severity: Severity);

    /// Blocking yes/no question; `false` aborts the action
    fn confirm(&self, message: &str) -> bool;
}

/// Banners through [`AlertService`], questions through `window.confirm`
#[derive(Clone, Copy)]
pub struct BrowserFeedback {
    alerts: AlertService,
}

impl BrowserFeedback {
    pub fn new(alerts: AlertService) -> Self {
        Self { alerts }
    }
}

impl UserFeedback for BrowserFeedback {
    fn notify(&self, message: &str, severity: Severity) {
        self.alerts.show(message, severity);
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Records every banner and answers confirmations with a fixed value
    #[derive(Default)]
    pub struct RecordingFeedback {
        pub notes: RefCell<Vec<(String, Severity)>>,
        pub questions: RefCell<Vec<String>>,
        pub answer: Cell<bool>,
    }

    impl RecordingFeedback {
        pub fn answering(answer: bool) -> Self {
            let feedback = Self::default();
            feedback.answer.set(answer);
            feedback
        }

        pub fn last(&self) -> Option<(String, Severity)> {
            self.notes.borrow().last().cloned()
        }

        pub fn count(&self, severity: Severity) -> usize {
            self.notes
                .borrow()
                .iter()
                .filter(|(_, s)| *s == severity)
                .count()
        }
    }

    impl UserFeedback for RecordingFeedback {
        fn notify(&self, message: &str, severity: Severity) {
            self.notes.borrow_mut().push((message.to_string(), severity));
        }

        fn confirm(&self, message: &str) -> bool {
            self.questions.borrow_mut().push(message.to_string());
            self.answer.get()
        }
    }
}
