//! Transient notifications (toasts)

use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;

/// How long a toast stays on screen unless the notification says otherwise
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5000);

/// Maximum toasts shown at once; older ones are dropped first
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Visual style of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient, non-blocking message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub duration: Duration,
    pub variant: NotificationVariant,
}

impl Notification {
    /// Shown after a lead reached the CRM
    pub fn lead_received() -> Self {
        Self {
            title: "Obrigado!".to_string(),
            description: "Em breve nossa equipe entrará em contato pelo WhatsApp.".to_string(),
            duration: Duration::from_millis(5000),
            variant: NotificationVariant::Default,
        }
    }

    /// Shown when the CRM did not accept the lead
    pub fn submission_failed() -> Self {
        Self {
            title: "Erro".to_string(),
            description: "Ocorreu um erro ao enviar o formulário. Tente novamente.".to_string(),
            duration: DEFAULT_TOAST_DURATION,
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Notification surface injected into the form controller.
///
/// Fire-and-forget: implementations must not block and nothing is returned.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl Notifier for UnboundedSender<Notification> {
    fn notify(&self, notification: Notification) {
        if self.send(notification).is_err() {
            tracing::debug!("Toast surface closed, notification dropped");
        }
    }
}

/// A notification currently on screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(notification: Notification) -> Self {
        Self {
            notification,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.notification.duration
    }
}

/// Toasts on screen, oldest first
#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn push(&mut self, notification: Notification) {
        self.toasts.push(Toast::new(notification));
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
    }

    /// Drop toasts whose duration has elapsed
    pub fn prune_expired(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    /// Dismiss the newest toast
    pub fn dismiss_latest(&mut self) -> Option<Toast> {
        self.toasts.pop()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
