use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const STATUS_CONFIRMED: &str = "CONFIRMED";
pub const STATUS_CANCELLED: &str = "CANCELLED";

/// A booked appointment. `duration_min` is the effective duration captured at
/// booking time; later recomputation of other slots always uses this stamped
/// value, never a recomputed default.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Appointment {
    pub id: String,
    pub detailer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub service_name: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_min: i32,
    pub status: String,
    pub confirmation_code: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewAppointmentParams {
    pub detailer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub service_name: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_min: i32,
}

impl Appointment {
    pub fn new(params: NewAppointmentParams) -> Self {
        let code: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();

        Self {
            id: Uuid::new_v4().to_string(),
            detailer_id: params.detailer_id,
            customer_name: params.customer_name,
            customer_email: params.customer_email,
            service_name: params.service_name,
            date: params.date,
            time: params.time,
            duration_min: params.duration_min,
            status: STATUS_CONFIRMED.to_string(),
            confirmation_code: code,
            created_at: Utc::now(),
        }
    }
}
