use std::sync::Arc;

use crate::{
    clients::{
        content::{ContentSource, HttpContentSource},
        notification::{EmailNotificationGateway, NotificationGateway},
        payment::{HttpPaymentGateway, PaymentGateway},
    },
    config::AppConfig,
    store::FlowStore,
};

/// Shared handles for the handlers. The three collaborators are injected
/// here so the process owns their lifecycle and tests can swap them out.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub flows: Arc<FlowStore>,
    pub content: Arc<dyn ContentSource>,
    pub notifier: Arc<dyn NotificationGateway>,
    pub payments: Arc<dyn PaymentGateway>,
}

impl AppState {
    /// Wires the reqwest-backed collaborators from configuration.
    pub fn new(config: AppConfig) -> Self {
        let client = reqwest::Client::new();

        let content = HttpContentSource::new(
            client.clone(),
            config.content_base_url.clone(),
            config.content_access_token.clone(),
        );
        let notifier = EmailNotificationGateway::new(
            client.clone(),
            config.notification_endpoint.clone(),
            config.notification_service_id.clone(),
            config.notification_template_id.clone(),
            config.notification_public_key.clone(),
        );
        let payments = HttpPaymentGateway::new(client, config.payment_intent_url.clone());

        Self::with_collaborators(
            config,
            Arc::new(content),
            Arc::new(notifier),
            Arc::new(payments),
        )
    }

    pub fn with_collaborators(
        config: AppConfig,
        content: Arc<dyn ContentSource>,
        notifier: Arc<dyn NotificationGateway>,
        payments: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            flows: Arc::new(FlowStore::default()),
            content,
            notifier,
            payments,
        }
    }
}
