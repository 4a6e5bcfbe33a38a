//! Notification sink boundary.
//!
//! Behavioral stubs (ticket purchase, shift-list access) only produce a
//! formatted message; where it ends up is the sink's business.

use std::cell::RefCell;

/// Receiver of human-readable notification messages.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Sink that emits notifications through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "cinema", "{message}");
    }
}

/// Sink that records messages in memory, for assertions in tests.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: RefCell<Vec<String>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_notifier_records_messages_in_order() {
        let sink = MemoryNotifier::new();
        sink.notify("first");
        sink.notify("second");
        assert_eq!(sink.messages(), vec!["first", "second"]);
    }
}
