use crate::domain::models::appointment::Appointment;
use icalendar::{Calendar, Component, Event as IcalEvent, EventLike};

/// Generates an iCalendar (.ics) string for a booked appointment. Times are
/// floating local values, matching the naive clock model of the scheduler.
pub fn generate_ics(detailer_name: &str, appointment: &Appointment) -> String {
    let start = appointment.date.and_time(appointment.time);
    let end = start + chrono::Duration::minutes(appointment.duration_min as i64);

    let summary = match &appointment.service_name {
        Some(service) => format!("{} with {}", service, detailer_name),
        None => format!("Detailing appointment with {}", detailer_name),
    };

    let mut calendar = Calendar::new();

    let ical_event = IcalEvent::new()
        .summary(&summary)
        .description(&format!(
            "Confirmation code: {}",
            appointment.confirmation_code
        ))
        .starts(start)
        .ends(end)
        .uid(&appointment.id)
        .done();

    calendar.push(ical_event);
    calendar.to_string()
}
