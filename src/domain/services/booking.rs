use crate::domain::models::appointment::{Appointment, NewAppointmentParams};
use crate::domain::models::availability::WeeklyAvailability;
use crate::domain::models::settings::DetailerTimingSettings;
use crate::domain::ports::{
    AppointmentRepository, DetailerSettingsRepository, ServiceRepository,
};
use crate::domain::services::availability::{calculate_slots, validate_booking, BookingCheck};
use crate::error::ScheduleError;
use chrono::{Duration, NaiveDate, NaiveTime};
use std::sync::Arc;
use tracing::{info, warn};

pub struct BookingRequest {
    pub detailer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub service_name: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Orchestrates the availability engine against the store ports: load the
/// detailer's template, settings and day bookings, delegate the time
/// arithmetic, persist accepted bookings with their stamped duration.
///
/// Validation and persistence are NOT atomic. Two concurrent `book` calls for
/// the same detailer and day can both pass validation against a stale snapshot
/// and overshoot `max_appointments_per_slot`. Callers must serialize booking
/// attempts per detailer+date or enforce the capacity constraint in their
/// storage layer.
pub struct SchedulingService {
    settings_repo: Arc<dyn DetailerSettingsRepository>,
    service_repo: Arc<dyn ServiceRepository>,
    appointment_repo: Arc<dyn AppointmentRepository>,
}

impl SchedulingService {
    pub fn new(
        settings_repo: Arc<dyn DetailerSettingsRepository>,
        service_repo: Arc<dyn ServiceRepository>,
        appointment_repo: Arc<dyn AppointmentRepository>,
    ) -> Self {
        Self {
            settings_repo,
            service_repo,
            appointment_repo,
        }
    }

    async fn load_context(
        &self,
        detailer_id: &str,
        service_name: Option<&str>,
    ) -> Result<(WeeklyAvailability, DetailerTimingSettings, Option<i32>), ScheduleError> {
        let weekly = self
            .settings_repo
            .weekly_availability(detailer_id)
            .await?
            .ok_or_else(|| {
                ScheduleError::NotFound(format!(
                    "No availability template for detailer {}",
                    detailer_id
                ))
            })?;

        let settings = self
            .settings_repo
            .timing_settings(detailer_id)
            .await?
            .ok_or_else(|| {
                ScheduleError::NotFound(format!("No timing settings for detailer {}", detailer_id))
            })?;

        let service_duration = match service_name {
            Some(name) => {
                let service = self
                    .service_repo
                    .find_by_name(detailer_id, name)
                    .await?
                    .ok_or_else(|| {
                        ScheduleError::NotFound(format!("Service not found: {}", name))
                    })?;
                service.duration_min
            }
            None => None,
        };

        Ok((weekly, settings, service_duration))
    }

    /// Bookable "HH:MM" start times for one date.
    pub async fn available_slots(
        &self,
        detailer_id: &str,
        service_name: Option<&str>,
        date: NaiveDate,
    ) -> Result<Vec<String>, ScheduleError> {
        let (weekly, settings, service_duration) =
            self.load_context(detailer_id, service_name).await?;
        let existing = self.appointment_repo.list_for_day(detailer_id, date).await?;

        calculate_slots(&weekly, &settings, service_duration, &existing, date)
    }

    /// Dates in `[start, end]` (inclusive) with at least one bookable slot,
    /// as ISO "YYYY-MM-DD" strings.
    pub async fn available_dates(
        &self,
        detailer_id: &str,
        service_name: Option<&str>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<String>, ScheduleError> {
        let (weekly, settings, service_duration) =
            self.load_context(detailer_id, service_name).await?;

        let mut available_dates = Vec::new();
        let mut current_date = start;
        while current_date <= end {
            let existing = self
                .appointment_repo
                .list_for_day(detailer_id, current_date)
                .await?;
            let slots =
                calculate_slots(&weekly, &settings, service_duration, &existing, current_date)?;
            if !slots.is_empty() {
                available_dates.push(current_date.to_string());
            }
            current_date += Duration::days(1);
        }

        Ok(available_dates)
    }

    /// Validates and persists a booking. The effective duration computed at
    /// validation time is stamped onto the stored appointment, so later slot
    /// computations see the true historical duration even if the detailer's
    /// defaults change.
    pub async fn book(&self, request: BookingRequest) -> Result<Appointment, ScheduleError> {
        info!(
            "book: {} requesting {} {} for detailer {}",
            request.customer_email, request.date, request.time, request.detailer_id
        );

        let (weekly, settings, service_duration) = self
            .load_context(&request.detailer_id, request.service_name.as_deref())
            .await?;
        let existing = self
            .appointment_repo
            .list_for_day(&request.detailer_id, request.date)
            .await?;

        let duration_min = match validate_booking(
            &weekly,
            &settings,
            service_duration,
            &existing,
            request.date,
            request.time,
        )? {
            BookingCheck::Accepted { duration_min } => duration_min,
            BookingCheck::Rejected(reason) => {
                warn!(
                    "Booking rejected: {} {} for detailer {}: {}",
                    request.date, request.time, request.detailer_id, reason
                );
                return Err(ScheduleError::SlotUnavailable(reason));
            }
        };

        let appointment = Appointment::new(NewAppointmentParams {
            detailer_id: request.detailer_id,
            customer_name: request.customer_name,
            customer_email: request.customer_email,
            service_name: request.service_name,
            date: request.date,
            time: request.time,
            duration_min,
        });

        let created = self.appointment_repo.create(&appointment).await?;
        info!("Booking confirmed: {} ({})", created.id, created.confirmation_code);
        Ok(created)
    }

    /// Marks an appointment cancelled; it stops occupying its interval in
    /// subsequent availability computations.
    pub async fn cancel(
        &self,
        detailer_id: &str,
        appointment_id: &str,
    ) -> Result<Appointment, ScheduleError> {
        let cancelled = self.appointment_repo.cancel(detailer_id, appointment_id).await?;
        info!("Booking cancelled: {}", cancelled.id);
        Ok(cancelled)
    }
}
