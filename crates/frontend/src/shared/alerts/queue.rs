/// Bootstrap contextual level of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Banners currently on screen, oldest first
#[derive(Debug, Clone, Default)]
pub struct AlertQueue {
    next_id: u64,
    items: Vec<Alert>,
}

impl AlertQueue {
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Alert {
            id,
            message: message.into(),
            severity,
        });
        id
    }

    /// Remove a banner. Returns false when it was already gone, which is
    /// the normal case for a timer firing after a manual dismissal.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|alert| alert.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Alert] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut queue = AlertQueue::default();
        let a = queue.push("first", Severity::Info);
        let b = queue.push("second", Severity::Danger);
        assert!(b > a);
        assert_eq!(queue.items().len(), 2);
        assert_eq!(queue.items()[1].severity.class(), "danger");
    }

    #[test]
    fn timer_after_manual_dismissal_is_a_no_op() {
        let mut queue = AlertQueue::default();
        let id = queue.push("Data refreshed", Severity::Success);
        let other = queue.push("Order found", Severity::Success);

        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, other);
    }
}
