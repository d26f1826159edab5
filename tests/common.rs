use chrono::{NaiveDate, NaiveTime};
use detailing_scheduler::domain::models::availability::WeeklyAvailability;
use detailing_scheduler::domain::models::service::Service;
use detailing_scheduler::domain::models::settings::DetailerTimingSettings;
use detailing_scheduler::domain::ports::DetailerSettingsRepository;
use detailing_scheduler::domain::ports::ServiceRepository;
use detailing_scheduler::domain::services::booking::{BookingRequest, SchedulingService};
use detailing_scheduler::infra::repositories::memory::{
    MemoryAppointmentRepo, MemoryServiceRepo, MemorySettingsRepo,
};
use std::sync::Arc;

pub const DETAILER: &str = "detailer-1";

#[allow(dead_code)]
pub struct TestHarness {
    pub scheduler: SchedulingService,
    pub settings_repo: Arc<MemorySettingsRepo>,
    pub service_repo: Arc<MemoryServiceRepo>,
    pub appointment_repo: Arc<MemoryAppointmentRepo>,
}

impl TestHarness {
    pub async fn new(weekly: WeeklyAvailability, timing: DetailerTimingSettings) -> Self {
        let settings_repo = Arc::new(MemorySettingsRepo::new());
        let service_repo = Arc::new(MemoryServiceRepo::new());
        let appointment_repo = Arc::new(MemoryAppointmentRepo::new());

        settings_repo
            .upsert_weekly_availability(DETAILER, &weekly)
            .await
            .expect("seed template");
        settings_repo
            .upsert_timing_settings(DETAILER, &timing)
            .await
            .expect("seed settings");

        let scheduler = SchedulingService::new(
            settings_repo.clone(),
            service_repo.clone(),
            appointment_repo.clone(),
        );

        Self {
            scheduler,
            settings_repo,
            service_repo,
            appointment_repo,
        }
    }

    #[allow(dead_code)]
    pub async fn add_service(&self, name: &str, price_cents: i32, duration_min: Option<i32>) {
        self.service_repo
            .create(&Service::new(
                DETAILER.to_string(),
                name.to_string(),
                price_cents,
                duration_min,
            ))
            .await
            .expect("seed service");
    }
}

pub fn timing(default_duration: i32, buffer: i32, capacity: i32) -> DetailerTimingSettings {
    DetailerTimingSettings {
        default_duration_min: default_duration,
        buffer_min: buffer,
        max_appointments_per_slot: capacity,
    }
}

/// Builds a template from its stored JSON document form; days left out of the
/// document are inactive.
pub fn template_from_json(doc: serde_json::Value) -> WeeklyAvailability {
    WeeklyAvailability::from_json(&doc.to_string()).expect("valid template fixture")
}

pub fn booking_request(date: NaiveDate, time: &str, service: Option<&str>) -> BookingRequest {
    BookingRequest {
        detailer_id: DETAILER.to_string(),
        customer_name: "Taylor".to_string(),
        customer_email: "taylor@example.com".to_string(),
        service_name: service.map(|s| s.to_string()),
        date,
        time: clock(time),
    }
}

/// 2025-06-02, a Monday. Dates are explicit inputs to the engine, so the tests
/// pin the calendar instead of deriving "next Monday" from the wall clock.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

#[allow(dead_code)]
pub fn sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

pub fn clock(raw: &str) -> NaiveTime {
    NaiveTime::parse_from_str(raw, "%H:%M").unwrap()
}
