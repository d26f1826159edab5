use crate::domain::models::{
    appointment::Appointment, availability::WeeklyAvailability, service::Service,
    settings::DetailerTimingSettings,
};
use crate::error::ScheduleError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Weekly template and timing settings, keyed 1:1 by detailer identity.
#[async_trait]
pub trait DetailerSettingsRepository: Send + Sync {
    async fn weekly_availability(
        &self,
        detailer_id: &str,
    ) -> Result<Option<WeeklyAvailability>, ScheduleError>;
    async fn timing_settings(
        &self,
        detailer_id: &str,
    ) -> Result<Option<DetailerTimingSettings>, ScheduleError>;
    async fn upsert_weekly_availability(
        &self,
        detailer_id: &str,
        weekly: &WeeklyAvailability,
    ) -> Result<(), ScheduleError>;
    async fn upsert_timing_settings(
        &self,
        detailer_id: &str,
        settings: &DetailerTimingSettings,
    ) -> Result<(), ScheduleError>;
}

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, service: &Service) -> Result<Service, ScheduleError>;
    async fn find_by_name(
        &self,
        detailer_id: &str,
        name: &str,
    ) -> Result<Option<Service>, ScheduleError>;
    async fn list(&self, detailer_id: &str) -> Result<Vec<Service>, ScheduleError>;
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn create(&self, appointment: &Appointment) -> Result<Appointment, ScheduleError>;
    async fn find_by_id(
        &self,
        detailer_id: &str,
        id: &str,
    ) -> Result<Option<Appointment>, ScheduleError>;
    /// Active (non-cancelled) appointments for one detailer on one date.
    async fn list_for_day(
        &self,
        detailer_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, ScheduleError>;
    async fn list_by_detailer(&self, detailer_id: &str)
        -> Result<Vec<Appointment>, ScheduleError>;
    async fn cancel(&self, detailer_id: &str, id: &str) -> Result<Appointment, ScheduleError>;
}
