use crate::domain::models::{
    appointment::{Appointment, STATUS_CANCELLED},
    availability::WeeklyAvailability,
    service::Service,
    settings::DetailerTimingSettings,
};
use crate::domain::ports::{
    AppointmentRepository, DetailerSettingsRepository, ServiceRepository,
};
use crate::error::ScheduleError;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-process store for embedding and tests. Each method is individually
/// atomic; there is no cross-call transaction, so the check-then-write race
/// documented on `SchedulingService::book` applies here too.
#[derive(Default)]
pub struct MemorySettingsRepo {
    templates: Mutex<HashMap<String, String>>,
    timings: Mutex<HashMap<String, DetailerTimingSettings>>,
}

impl MemorySettingsRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DetailerSettingsRepository for MemorySettingsRepo {
    async fn weekly_availability(
        &self,
        detailer_id: &str,
    ) -> Result<Option<WeeklyAvailability>, ScheduleError> {
        let templates = self
            .templates
            .lock()
            .map_err(|_| ScheduleError::Storage("settings store poisoned".into()))?;
        // Templates are held in their stored JSON document form.
        templates
            .get(detailer_id)
            .map(|raw| WeeklyAvailability::from_json(raw))
            .transpose()
    }

    async fn timing_settings(
        &self,
        detailer_id: &str,
    ) -> Result<Option<DetailerTimingSettings>, ScheduleError> {
        let timings = self
            .timings
            .lock()
            .map_err(|_| ScheduleError::Storage("settings store poisoned".into()))?;
        Ok(timings.get(detailer_id).cloned())
    }

    async fn upsert_weekly_availability(
        &self,
        detailer_id: &str,
        weekly: &WeeklyAvailability,
    ) -> Result<(), ScheduleError> {
        let raw = serde_json::to_string(weekly)
            .map_err(|e| ScheduleError::Storage(format!("serialize template: {}", e)))?;
        let mut templates = self
            .templates
            .lock()
            .map_err(|_| ScheduleError::Storage("settings store poisoned".into()))?;
        templates.insert(detailer_id.to_string(), raw);
        Ok(())
    }

    async fn upsert_timing_settings(
        &self,
        detailer_id: &str,
        settings: &DetailerTimingSettings,
    ) -> Result<(), ScheduleError> {
        let mut timings = self
            .timings
            .lock()
            .map_err(|_| ScheduleError::Storage("settings store poisoned".into()))?;
        timings.insert(detailer_id.to_string(), settings.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryServiceRepo {
    services: Mutex<Vec<Service>>,
}

impl MemoryServiceRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ServiceRepository for MemoryServiceRepo {
    async fn create(&self, service: &Service) -> Result<Service, ScheduleError> {
        let mut services = self
            .services
            .lock()
            .map_err(|_| ScheduleError::Storage("service store poisoned".into()))?;
        if services
            .iter()
            .any(|s| s.detailer_id == service.detailer_id && s.name == service.name)
        {
            return Err(ScheduleError::Conflict(format!(
                "Service already exists: {}",
                service.name
            )));
        }
        services.push(service.clone());
        Ok(service.clone())
    }

    async fn find_by_name(
        &self,
        detailer_id: &str,
        name: &str,
    ) -> Result<Option<Service>, ScheduleError> {
        let services = self
            .services
            .lock()
            .map_err(|_| ScheduleError::Storage("service store poisoned".into()))?;
        Ok(services
            .iter()
            .find(|s| s.detailer_id == detailer_id && s.name == name)
            .cloned())
    }

    async fn list(&self, detailer_id: &str) -> Result<Vec<Service>, ScheduleError> {
        let services = self
            .services
            .lock()
            .map_err(|_| ScheduleError::Storage("service store poisoned".into()))?;
        Ok(services
            .iter()
            .filter(|s| s.detailer_id == detailer_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryAppointmentRepo {
    appointments: Mutex<Vec<Appointment>>,
}

impl MemoryAppointmentRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentRepository for MemoryAppointmentRepo {
    async fn create(&self, appointment: &Appointment) -> Result<Appointment, ScheduleError> {
        let mut appointments = self
            .appointments
            .lock()
            .map_err(|_| ScheduleError::Storage("appointment store poisoned".into()))?;
        appointments.push(appointment.clone());
        Ok(appointment.clone())
    }

    async fn find_by_id(
        &self,
        detailer_id: &str,
        id: &str,
    ) -> Result<Option<Appointment>, ScheduleError> {
        let appointments = self
            .appointments
            .lock()
            .map_err(|_| ScheduleError::Storage("appointment store poisoned".into()))?;
        Ok(appointments
            .iter()
            .find(|a| a.detailer_id == detailer_id && a.id == id)
            .cloned())
    }

    async fn list_for_day(
        &self,
        detailer_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, ScheduleError> {
        let appointments = self
            .appointments
            .lock()
            .map_err(|_| ScheduleError::Storage("appointment store poisoned".into()))?;
        Ok(appointments
            .iter()
            .filter(|a| {
                a.detailer_id == detailer_id && a.date == date && a.status != STATUS_CANCELLED
            })
            .cloned()
            .collect())
    }

    async fn list_by_detailer(
        &self,
        detailer_id: &str,
    ) -> Result<Vec<Appointment>, ScheduleError> {
        let appointments = self
            .appointments
            .lock()
            .map_err(|_| ScheduleError::Storage("appointment store poisoned".into()))?;
        let mut result: Vec<Appointment> = appointments
            .iter()
            .filter(|a| a.detailer_id == detailer_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));
        Ok(result)
    }

    async fn cancel(&self, detailer_id: &str, id: &str) -> Result<Appointment, ScheduleError> {
        let mut appointments = self
            .appointments
            .lock()
            .map_err(|_| ScheduleError::Storage("appointment store poisoned".into()))?;
        let appointment = appointments
            .iter_mut()
            .find(|a| a.detailer_id == detailer_id && a.id == id)
            .ok_or(ScheduleError::NotFound("Appointment not found".into()))?;
        appointment.status = STATUS_CANCELLED.to_string();
        Ok(appointment.clone())
    }
}
