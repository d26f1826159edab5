use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A service a detailer offers (wash, interior detail, ceramic coating...).
/// `duration_min` is optional; bookings without it fall back to the detailer's
/// default duration via `DetailerTimingSettings::effective_duration`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Service {
    pub id: String,
    pub detailer_id: String,
    pub name: String,
    pub price_cents: i32,
    pub duration_min: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Service {
    pub fn new(
        detailer_id: String,
        name: String,
        price_cents: i32,
        duration_min: Option<i32>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            detailer_id,
            name,
            price_cents,
            duration_min,
            created_at: Utc::now(),
        }
    }
}
