use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{ContactInfo, FlowStatus, Product, RentalFlow};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFlowRequest {
    pub product_id: String,
}

/// Either or both dates. The start date is applied first; only an end-date
/// change triggers a price recompute.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DateRangeRequest {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone_number: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FlowView {
    pub id: Uuid,
    pub product: Product,
    pub status: FlowStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub elapsed_days: i64,
    pub total_price: i64,
    pub confirmed: bool,
    pub submitting: bool,
    pub email_sent: bool,
    pub submission_error: Option<String>,
    pub client_secret: Option<String>,
    pub payment_intent_failed: bool,
    pub contact: ContactInfo,
}

impl From<&RentalFlow> for FlowView {
    fn from(flow: &RentalFlow) -> Self {
        Self {
            id: flow.id,
            product: flow.product.clone(),
            status: flow.status(),
            start_date: flow.period.start_date,
            end_date: flow.period.end_date,
            elapsed_days: flow.elapsed_days,
            total_price: flow.total_price,
            confirmed: flow.confirmed,
            submitting: flow.submitting,
            email_sent: flow.email_sent,
            submission_error: flow.submission_error.clone(),
            client_secret: flow.client_secret.clone(),
            payment_intent_failed: flow.intent_failed,
            contact: flow.contact.clone(),
        }
    }
}
