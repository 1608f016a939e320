use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::pricing;

/// Product fields supplied by the content source. Read-only for this service;
/// `price` is the displayed price and is not an input to the rental formula.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    pub featured_image: Option<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct RentalPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ContactInfo {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone_number: Option<String>,
}

impl ContactInfo {
    /// Name and email are required before an order can be submitted.
    pub fn is_complete(&self) -> bool {
        !self.customer_name.trim().is_empty() && !self.customer_email.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FlowStatus {
    Idle,
    AwaitingContactInfo,
    Submitting,
    Sent,
}

/// Outcome of an end-date change, used to decide whether a payment intent
/// must be (re)issued.
#[derive(Debug, Clone, Copy)]
pub struct PriceChange {
    pub previous: i64,
    pub current: i64,
}

impl PriceChange {
    /// A payment intent is issued only when the total moved to a new
    /// non-zero value. A zero total short-circuits; an unchanged total
    /// issues nothing.
    pub fn needs_intent(&self) -> bool {
        self.current != 0 && self.current != self.previous
    }
}

/// Component-local state of one rental order flow. Lives in memory for the
/// lifetime of the shopper's session; nothing is persisted.
#[derive(Debug, Clone)]
pub struct RentalFlow {
    pub id: Uuid,
    pub product: Product,
    pub period: RentalPeriod,
    pub elapsed_days: i64,
    pub total_price: i64,
    pub contact: ContactInfo,
    pub confirmed: bool,
    pub submitting: bool,
    pub email_sent: bool,
    pub submission_error: Option<String>,
    /// Opaque handle from the payment service. Never cleared once set.
    pub client_secret: Option<String>,
    /// Sequence of the most recently issued intent request; responses
    /// carrying an older sequence are discarded.
    pub intent_seq: u64,
    pub intent_failed: bool,
    pub created_at: DateTime<Utc>,
}

impl RentalFlow {
    pub fn new(product: Product, today: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            product,
            period: RentalPeriod {
                start_date: today,
                end_date: today,
            },
            elapsed_days: 0,
            total_price: 0,
            contact: ContactInfo::default(),
            confirmed: false,
            submitting: false,
            email_sent: false,
            submission_error: None,
            client_secret: None,
            intent_seq: 0,
            intent_failed: false,
            created_at: Utc::now(),
        }
    }

    pub fn status(&self) -> FlowStatus {
        if self.email_sent {
            FlowStatus::Sent
        } else if self.submitting {
            FlowStatus::Submitting
        } else if self.confirmed {
            FlowStatus::AwaitingContactInfo
        } else {
            FlowStatus::Idle
        }
    }

    /// Replaces the start date only. The total is recomputed on the next
    /// end-date change, matching the picker's behavior.
    pub fn set_start(&mut self, date: NaiveDate) {
        self.period.start_date = date;
        tracing::debug!(flow_id = %self.id, start_date = %date, "rental start date changed");
    }

    /// Replaces the end date and recomputes elapsed days and the total.
    /// A reversed range is clamped to zero days before pricing.
    pub fn set_end(&mut self, date: NaiveDate, daily_rate: i64) -> PriceChange {
        self.period.end_date = date;

        let raw_days = pricing::elapsed_days(self.period.start_date, date);
        if raw_days < 0 {
            tracing::warn!(
                flow_id = %self.id,
                start_date = %self.period.start_date,
                end_date = %date,
                elapsed_days = raw_days,
                "reversed rental range, clamping to zero days"
            );
        }
        self.elapsed_days = raw_days.max(0);

        let previous = self.total_price;
        self.total_price = pricing::total(self.elapsed_days, daily_rate);
        tracing::debug!(
            flow_id = %self.id,
            end_date = %date,
            elapsed_days = self.elapsed_days,
            total_price = self.total_price,
            "rental end date changed"
        );

        PriceChange {
            previous,
            current: self.total_price,
        }
    }

    /// Flips the confirmation gate. Contact data entered so far is kept.
    pub fn toggle_confirmation(&mut self) -> bool {
        self.confirmed = !self.confirmed;
        self.confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn product() -> Product {
        Product {
            id: "prod-1".into(),
            name: "Canoe".into(),
            price: 750,
            description: None,
            featured_image: None,
            images: vec![],
        }
    }

    #[test]
    fn new_flow_starts_today_with_zero_total() {
        let flow = RentalFlow::new(product(), date(2024, 1, 1));
        assert_eq!(flow.period.start_date, flow.period.end_date);
        assert_eq!(flow.total_price, 0);
        assert_eq!(flow.status(), FlowStatus::Idle);
    }

    #[test]
    fn end_date_change_recomputes_total() {
        let mut flow = RentalFlow::new(product(), date(2024, 1, 1));
        let change = flow.set_end(date(2024, 1, 5), 100);
        assert_eq!(flow.elapsed_days, 4);
        assert_eq!(flow.total_price, 400);
        assert!(change.needs_intent());
    }

    #[test]
    fn start_date_change_alone_does_not_recompute() {
        let mut flow = RentalFlow::new(product(), date(2024, 1, 1));
        flow.set_end(date(2024, 1, 5), 100);
        flow.set_start(date(2024, 1, 3));
        // Stale until the end date is touched again.
        assert_eq!(flow.total_price, 400);
        let change = flow.set_end(date(2024, 1, 5), 100);
        assert_eq!(flow.total_price, 200);
        assert!(change.needs_intent());
    }

    #[test]
    fn reversed_range_clamps_to_zero() {
        let mut flow = RentalFlow::new(product(), date(2024, 1, 5));
        let change = flow.set_end(date(2024, 1, 1), 100);
        assert_eq!(flow.elapsed_days, 0);
        assert_eq!(flow.total_price, 0);
        assert!(!change.needs_intent());
    }

    #[test]
    fn unchanged_total_does_not_need_a_new_intent() {
        let mut flow = RentalFlow::new(product(), date(2024, 1, 1));
        assert!(flow.set_end(date(2024, 1, 5), 100).needs_intent());
        assert!(!flow.set_end(date(2024, 1, 5), 100).needs_intent());
    }

    #[test]
    fn confirmation_toggles_and_keeps_contact_data() {
        let mut flow = RentalFlow::new(product(), date(2024, 1, 1));
        flow.contact.customer_name = "Ada".into();

        assert!(flow.toggle_confirmation());
        assert_eq!(flow.status(), FlowStatus::AwaitingContactInfo);

        assert!(!flow.toggle_confirmation());
        assert_eq!(flow.status(), FlowStatus::Idle);
        assert_eq!(flow.contact.customer_name, "Ada");
    }

    #[test]
    fn contact_requires_name_and_email() {
        let mut contact = ContactInfo::default();
        assert!(!contact.is_complete());
        contact.customer_name = "Ada".into();
        assert!(!contact.is_complete());
        contact.customer_email = "ada@example.com".into();
        assert!(contact.is_complete());
    }
}
