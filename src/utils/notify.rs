use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(5000);

/// Toast severity, named after the alert styles the pages use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub shown_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant, dismiss_after: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= dismiss_after
    }
}

/// Queue of visible toasts; each one dismisses itself after a fixed delay.
#[derive(Debug)]
pub struct Toaster {
    dismiss_after: Duration,
    toasts: Vec<Toast>,
}

impl Toaster {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            dismiss_after,
            toasts: Vec::new(),
        }
    }

    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }

    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.show_at(message, severity, Instant::now());
    }

    /// Queues a toast, dropping any whose delay has already elapsed.
    pub fn show_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.prune(now);
        let message = message.into();
        match severity {
            Severity::Info | Severity::Success => tracing::info!("🔔 {}", message),
            Severity::Warning => tracing::warn!("🔔 {}", message),
            Severity::Danger => tracing::error!("🔔 {}", message),
        }
        self.toasts.push(Toast {
            message,
            severity,
            shown_at: now,
        });
    }

    /// Drops toasts whose delay has elapsed and returns the rest.
    pub fn active_at(&mut self, now: Instant) -> &[Toast] {
        self.prune(now);
        &self.toasts
    }

    pub fn active(&mut self) -> &[Toast] {
        self.active_at(Instant::now())
    }

    fn prune(&mut self, now: Instant) {
        let dismiss_after = self.dismiss_after;
        self.toasts.retain(|t| !t.is_expired(now, dismiss_after));
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS_AFTER)
    }
}
