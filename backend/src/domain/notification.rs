use log::debug;
use shared::{Notification, NotificationKind};

/// Tracks the one visible toast.
///
/// Each `show` issues a new ticket; a dismissal carrying an older ticket is
/// ignored, so a fresh toast always gets its full display time.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_ticket: u64,
    current: Option<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> Notification {
        self.next_ticket += 1;
        let notification = Notification {
            ticket: self.next_ticket,
            message: message.into(),
            kind,
        };
        debug!("Toast #{}: {}", notification.ticket, notification.message);
        self.current = Some(notification.clone());
        notification
    }

    /// Hide the toast if `ticket` is still the latest one
    pub fn dismiss(&mut self, ticket: u64) -> bool {
        match &self.current {
            Some(current) if current.ticket == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_current() {
        let mut center = NotificationCenter::new();
        let toast = center.show("Bali Escape added to cart", NotificationKind::Success);
        assert_eq!(center.current(), Some(&toast));
        assert!(center.dismiss(toast.ticket));
        assert!(center.current().is_none());
    }

    #[test]
    fn test_newer_toast_supersedes_pending_dismissal() {
        let mut center = NotificationCenter::new();
        let first = center.show("first", NotificationKind::Info);
        let second = center.show("second", NotificationKind::Info);

        assert!(second.ticket > first.ticket);
        assert!(!center.dismiss(first.ticket));
        assert_eq!(center.current().map(|n| n.message.as_str()), Some("second"));
        assert!(center.dismiss(second.ticket));
    }
}
