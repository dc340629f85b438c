use crate::domain::model::Booking;
use crate::domain::ports::Notifier;
use crate::utils::error::{BookingError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NotifyPayload<'a> {
    subject: &'a str,
    text: String,
    email: &'a str,
    preferred_time: String,
}

/// Posts a JSON notification to a configured endpoint on every successful
/// booking. Stands in for the original deployment's mail relay; any webhook
/// receiver (mail bridge, chat hook) works.
pub struct WebhookNotifier {
    client: Client,
    endpoint: String,
}

impl WebhookNotifier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, subject: &str, booking: &Booking) -> Result<()> {
        let payload = NotifyPayload {
            subject,
            text: format!("{} just booked an interview slot", booking.name),
            email: &booking.email,
            preferred_time: booking.preferred_time.to_rfc3339(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| BookingError::Notifier {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(BookingError::Notifier {
                message: format!("notification endpoint returned {}", response.status()),
            });
        }

        tracing::debug!(endpoint = %self.endpoint, "notification delivered");
        Ok(())
    }
}

/// Notifier that only writes to the log. Used when no endpoint is configured
/// and as the default in tests.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, subject: &str, booking: &Booking) -> Result<()> {
        tracing::info!(
            subject = subject,
            id = %booking.id,
            email = %booking.email,
            slot = %booking.preferred_time,
            "booking notification"
        );
        Ok(())
    }
}
