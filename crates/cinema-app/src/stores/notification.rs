use crate::actions::{Action, NotificationAction, NotificationLevel};
use crate::store::{Store, StoreState};

pub type NotificationStore = Store<NotificationState>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

/// Persistent messages that stay until dismissed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub items: Vec<Notification>,
    next_id: u64,
}

impl StoreState for NotificationState {
    const NAME: &'static str = "notification";

    fn reduce(&mut self, action: &Action) -> bool {
        match action {
            Action::Notification(NotificationAction::Push { level, message }) => {
                self.next_id += 1;
                self.items.push(Notification {
                    id: self.next_id,
                    level: *level,
                    message: message.clone(),
                });
                true
            }
            Action::Notification(NotificationAction::Dismiss(id)) => {
                let before = self.items.len();
                self.items.retain(|n| n.id != *id);
                self.items.len() != before
            }
            Action::Notification(NotificationAction::Clear) => {
                let changed = !self.items.is_empty();
                self.items.clear();
                changed
            }
            _ => false,
        }
    }
}
