use std::env;

/// All external identifiers and credentials live here; none of them are
/// hard-coded in the flow logic itself.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Fixed rental rate in major currency units per calendar day.
    pub daily_rate: i64,
    pub content_base_url: String,
    pub content_access_token: String,
    pub notification_endpoint: String,
    pub notification_service_id: String,
    pub notification_template_id: String,
    pub notification_public_key: String,
    pub payment_intent_url: String,
    /// Line-item id sent with every payment intent. The upstream checkout
    /// expects a catalogue id here, not the product entry being viewed.
    pub payable_item_id: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let daily_rate = env::var("RENTAL_DAILY_RATE")
            .ok()
            .and_then(|r| r.parse::<i64>().ok())
            .unwrap_or(100);
        let content_base_url = env::var("CONTENT_BASE_URL")?;
        let content_access_token = env::var("CONTENT_ACCESS_TOKEN")?;
        let notification_endpoint = env::var("NOTIFICATION_ENDPOINT")
            .unwrap_or_else(|_| "https://api.emailjs.com/api/v1.0/email/send".to_string());
        let notification_service_id = env::var("NOTIFICATION_SERVICE_ID")?;
        let notification_template_id = env::var("NOTIFICATION_TEMPLATE_ID")?;
        let notification_public_key = env::var("NOTIFICATION_PUBLIC_KEY")?;
        let payment_intent_url = env::var("PAYMENT_INTENT_URL")?;
        let payable_item_id =
            env::var("PAYABLE_ITEM_ID").unwrap_or_else(|_| "xl-tshirt".to_string());

        Ok(Self {
            host,
            port,
            daily_rate,
            content_base_url,
            content_access_token,
            notification_endpoint,
            notification_service_id,
            notification_template_id,
            notification_public_key,
            payment_intent_url,
            payable_item_id,
        })
    }
}
