use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment intent request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("payment service returned {0}")]
    Status(StatusCode),
}

#[derive(Debug, Clone, Serialize)]
pub struct IntentLineItem {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntentRequest {
    pub items: Vec<IntentLineItem>,
    /// Amount in minor currency units.
    pub amount: i64,
}

#[derive(Debug, Deserialize)]
pub struct IntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_intent(&self, request: &IntentRequest) -> Result<IntentResponse, PaymentError>;
}

/// Client for the payment-intent endpoint. The response carries the opaque
/// client secret the card-entry UI needs.
pub struct HttpPaymentGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPaymentGateway {
    pub fn new(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn create_intent(&self, request: &IntentRequest) -> Result<IntentResponse, PaymentError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PaymentError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}
