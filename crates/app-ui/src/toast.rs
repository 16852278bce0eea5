//! Toast notifications

use serde::{Deserialize, Serialize};

/// Default toast duration in milliseconds
pub const DEFAULT_TOAST_DURATION: u32 = 3000;

/// Duration of the offline demo login toast in milliseconds
pub const OFFLINE_TOAST_DURATION: u32 = 4000;

/// Toast variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Success notification
    Success,
    /// Informational notification
    Info,
    /// Error notification
    Error,
}

/// Individual toast notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Unique identifier
    pub id: String,
    /// Toast variant
    pub kind: ToastKind,
    /// First line
    pub title: String,
    /// Second line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Visibility in milliseconds
    pub duration: u32,
}

impl Toast {
    /// Create a toast with the default duration
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            title: title.into(),
            message: None,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Set the second line
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the visibility duration
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Login accepted by the server
    pub fn login_success() -> Self {
        Self::new(ToastKind::Success, "Login Successful").with_message("Welcome back!")
    }

    /// Login accepted through the offline demo fallback
    pub fn offline_login() -> Self {
        Self::new(ToastKind::Info, "Login Successful (Offline Mode)")
            .with_message("Network unavailable, using demo access.")
            .with_duration(OFFLINE_TOAST_DURATION)
    }

    /// Login failed
    pub fn login_failed(message: &str) -> Self {
        let message = if message.is_empty() { "Something went wrong" } else { message };
        Self::new(ToastKind::Error, "Login Failed").with_message(message)
    }

    /// Signed out
    pub fn logged_out() -> Self {
        Self::new(ToastKind::Success, "Logged out")
    }
}

/// Pending toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast
    pub fn push(&mut self, toast: Toast) {
        tracing::debug!(title = %toast.title, "toast shown");
        self.toasts.push(toast);
    }

    /// Remove a toast by ID
    pub fn dismiss(&mut self, id: &str) -> Option<Toast> {
        let pos = self.toasts.iter().position(|t| t.id == id)?;
        Some(self.toasts.remove(pos))
    }

    /// Most recent toast
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    /// Take every pending toast
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Get number of toasts
    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_toasts() {
        let ok = Toast::login_success();
        assert_eq!(ok.kind, ToastKind::Success);
        assert_eq!(ok.title, "Login Successful");
        assert_eq!(ok.message.as_deref(), Some("Welcome back!"));
        assert_eq!(ok.duration, DEFAULT_TOAST_DURATION);

        let offline = Toast::offline_login();
        assert_eq!(offline.kind, ToastKind::Info);
        assert_eq!(offline.title, "Login Successful (Offline Mode)");
        assert_eq!(offline.message.as_deref(), Some("Network unavailable, using demo access."));
        assert_eq!(offline.duration, 4000);
    }

    #[test]
    fn test_failure_toast_message() {
        let failed = Toast::login_failed("user not found");
        assert_eq!(failed.kind, ToastKind::Error);
        assert_eq!(failed.message.as_deref(), Some("user not found"));

        let blank = Toast::login_failed("");
        assert_eq!(blank.message.as_deref(), Some("Something went wrong"));
    }

    #[test]
    fn test_queue() {
        let mut queue = ToastQueue::new();
        assert!(queue.is_empty());

        let first = Toast::logged_out();
        let first_id = first.id.clone();
        queue.push(first);
        queue.push(Toast::login_success());
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.latest().map(|t| t.title.as_str()), Some("Login Successful"));

        assert!(queue.dismiss(&first_id).is_some());
        assert!(queue.dismiss(&first_id).is_none());

        assert_eq!(queue.drain().len(), 1);
        assert!(queue.is_empty());
    }
}
