use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("notification service rejected the send: {status} - {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Template parameters of the order notification. The customer's phone
/// number is collected by the flow but is not part of this payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderNotification {
    pub customer_name: String,
    /// Stringified rental total, as the email template expects it.
    pub price: String,
    pub customer_email: String,
    /// Formatted as DD/MM/YYYY.
    pub start_date: String,
    /// Formatted as DD/MM/YYYY.
    pub end_date: String,
}

#[async_trait]
pub trait NotificationGateway: Send + Sync {
    async fn send_order(&self, notification: &OrderNotification) -> Result<(), NotifyError>;
}

/// REST client for the transactional-email service. Service, template and
/// key identify a pre-built template on the provider side.
pub struct EmailNotificationGateway {
    client: reqwest::Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailNotificationGateway {
    pub fn new(
        client: reqwest::Client,
        endpoint: String,
        service_id: String,
        template_id: String,
        public_key: String,
    ) -> Self {
        Self {
            client,
            endpoint,
            service_id,
            template_id,
            public_key,
        }
    }
}

#[async_trait]
impl NotificationGateway for EmailNotificationGateway {
    async fn send_order(&self, notification: &OrderNotification) -> Result<(), NotifyError> {
        let body = json!({
            "service_id": self.service_id,
            "template_id": self.template_id,
            "user_id": self.public_key,
            "template_params": notification,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "(no body)".to_string());
            Err(NotifyError::Rejected { status, body })
        }
    }
}
