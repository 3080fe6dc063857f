//! # Notification Channels
//!
//! Channel trait and the service that delegates alerts to one channel at a time.
//! Implementations: email over SMTP, SMS over a REST API (see `plug-notify`).

use crate::error::PlugResult;
use async_trait::async_trait;
use tracing::{error, info};

/// A way of getting a message to a recipient.
///
/// Implementors provide [`deliver`](NotificationChannel::deliver); callers use
/// [`send`](NotificationChannel::send), which reports failure only as `false`.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Attempt delivery, returning the cause on failure.
    async fn deliver(&self, message: &str, recipient: &str) -> PlugResult<()>;

    /// Channel name (for logging).
    fn channel_name(&self) -> &'static str;

    /// Send a message. Every error is logged and swallowed; nothing is retried.
    async fn send(&self, message: &str, recipient: &str) -> bool {
        match self.deliver(message, recipient).await {
            Ok(()) => {
                info!(channel = self.channel_name(), %recipient, "Notification sent");
                true
            }
            Err(e) => {
                error!(
                    channel = self.channel_name(),
                    %recipient,
                    kind = e.kind(),
                    "Failed to send notification: {}",
                    e
                );
                false
            }
        }
    }
}

/// Type alias for a boxed notification channel (dynamic dispatch)
pub type BoxedNotificationChannel = Box<dyn NotificationChannel>;

/// Sends alerts through the currently configured channel
pub struct NotificationService {
    notification: BoxedNotificationChannel,
}

impl NotificationService {
    pub fn new(notification: BoxedNotificationChannel) -> Self {
        Self { notification }
    }

    /// Send an alert through the current channel
    pub async fn send_alert(&self, message: &str, to: &str) -> bool {
        self.notification.send(message, to).await
    }

    /// Swap the channel; later alerts go only through the new one
    pub fn change_notification_method(&mut self, notification: BoxedNotificationChannel) {
        info!(
            from = self.notification.channel_name(),
            to = notification.channel_name(),
            "Changing notification method"
        );
        self.notification = notification;
    }

    pub fn channel_name(&self) -> &'static str {
        self.notification.channel_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlugError;
    use std::sync::{Arc, Mutex};

    type Log = Arc<Mutex<Vec<(&'static str, String, String)>>>;

    struct RecordingChannel {
        name: &'static str,
        log: Log,
        fail: bool,
    }

    impl RecordingChannel {
        fn boxed(name: &'static str, log: &Log, fail: bool) -> BoxedNotificationChannel {
            Box::new(Self {
                name,
                log: Arc::clone(log),
                fail,
            })
        }
    }

    #[async_trait]
    impl NotificationChannel for RecordingChannel {
        async fn deliver(&self, message: &str, recipient: &str) -> PlugResult<()> {
            self.log
                .lock()
                .unwrap()
                .push((self.name, message.to_string(), recipient.to_string()));
            if self.fail {
                return Err(PlugError::DeliveryFailed {
                    channel: self.name.to_string(),
                    message: "mailbox full".to_string(),
                });
            }
            Ok(())
        }

        fn channel_name(&self) -> &'static str {
            self.name
        }
    }

    #[tokio::test]
    async fn test_send_alert_delegates_to_channel() {
        let log: Log = Arc::default();
        let service = NotificationService::new(RecordingChannel::boxed("first", &log, false));

        assert!(service.send_alert("Important alert!", "ops@example.com").await);

        let calls = log.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![("first", "Important alert!".to_string(), "ops@example.com".to_string())]
        );
    }

    #[tokio::test]
    async fn test_change_notification_method() {
        let log: Log = Arc::default();
        let mut service = NotificationService::new(RecordingChannel::boxed("first", &log, false));

        service.send_alert("one", "a").await;
        service.change_notification_method(RecordingChannel::boxed("second", &log, false));
        assert_eq!(service.channel_name(), "second");

        service.send_alert("two", "b").await;
        service.send_alert("three", "c").await;

        let channels: Vec<&str> = log.lock().unwrap().iter().map(|(c, _, _)| *c).collect();
        assert_eq!(channels, vec!["first", "second", "second"]);
    }

    #[tokio::test]
    async fn test_failure_becomes_false() {
        let log: Log = Arc::default();
        let service = NotificationService::new(RecordingChannel::boxed("broken", &log, true));

        assert!(!service.send_alert("hello", "x").await);
        assert_eq!(log.lock().unwrap().len(), 1);
    }
}
