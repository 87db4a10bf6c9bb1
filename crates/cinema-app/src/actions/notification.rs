use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// Notification actions
///
/// Unlike popups, notifications stay until they are dismissed.
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub enum NotificationAction {
    #[strum(serialize = "PUSH_NOTIFICATION")]
    Push {
        level: NotificationLevel,
        message: String,
    },
    #[strum(serialize = "DISMISS_NOTIFICATION")]
    Dismiss(u64),
    #[strum(serialize = "CLEAR_NOTIFICATIONS")]
    Clear,
}
