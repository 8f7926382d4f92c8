//! Transient notification ("snackbar") state.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

/// A message currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub seq: u64,
    pub message: String,
}

/// At most one visible notification; newer messages replace older ones.
#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    pub current: Option<Notification>,
    next_seq: u64,
}

impl NotificationState {
    /// Show `message`, returning the sequence number needed to dismiss it.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.current = Some(Notification { seq, message: message.into() });
        seq
    }

    /// Hide the notification if `seq` is still the one displayed.
    pub fn dismiss(&mut self, seq: u64) {
        if self.current.as_ref().is_some_and(|n| n.seq == seq) {
            self.current = None;
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}
