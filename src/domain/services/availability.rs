use crate::domain::models::appointment::Appointment;
use crate::domain::models::availability::{DayHours, WeeklyAvailability};
use crate::domain::models::settings::DetailerTimingSettings;
use crate::error::{BookingRejection, ScheduleError};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use tracing::debug;

const MINUTES_PER_DAY: i32 = 1440;

/// Candidate start times are walked on a fixed half-hour grid.
pub const SLOT_INTERVAL_MIN: i32 = 30;

/// Outcome of validating a proposed booking time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingCheck {
    /// The slot is bookable. `duration_min` is the effective duration the
    /// caller must stamp onto the persisted appointment.
    Accepted { duration_min: i32 },
    Rejected(BookingRejection),
}

/// The detailer's working window for one day, on a linear minutes-since-midnight
/// axis. For an overnight shift `end` exceeds 1440.
struct DayWindow {
    start: i32,
    end: i32,
    wraps: bool,
}

fn parse_clock(raw: &str) -> Result<i32, ScheduleError> {
    let t = NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| ScheduleError::Validation(format!("Invalid clock time: {}", raw)))?;
    Ok((t.hour() * 60 + t.minute()) as i32)
}

fn format_clock(minutes: i32) -> String {
    let m = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", m / 60, m % 60)
}

fn day_window(hours: &DayHours) -> Result<DayWindow, ScheduleError> {
    let start = parse_clock(&hours.start)?;
    let mut end = parse_clock(&hours.end)?;
    let wraps = end < start;
    if wraps {
        end += MINUTES_PER_DAY;
    }
    Ok(DayWindow { start, end, wraps })
}

fn check_settings(
    settings: &DetailerTimingSettings,
    duration: i32,
) -> Result<(), ScheduleError> {
    if duration <= 0 {
        return Err(ScheduleError::Validation(format!(
            "Duration must be positive, got {}",
            duration
        )));
    }
    if settings.buffer_min < 0 {
        return Err(ScheduleError::Validation(format!(
            "Buffer must not be negative, got {}",
            settings.buffer_min
        )));
    }
    if settings.max_appointments_per_slot < 1 {
        return Err(ScheduleError::Validation(format!(
            "Slot capacity must be at least 1, got {}",
            settings.max_appointments_per_slot
        )));
    }
    Ok(())
}

/// Occupied intervals `[start, start + duration + buffer)` of the existing
/// appointments, shifted onto the window's linear axis. Inside an overnight
/// window an appointment whose raw clock time lies before the raw window start
/// belongs to the next-day portion and is pushed forward by one day.
fn occupied_intervals(
    existing: &[Appointment],
    window: &DayWindow,
    buffer: i32,
) -> Vec<(i32, i32)> {
    existing
        .iter()
        .map(|appt| {
            let mut start = (appt.time.hour() * 60 + appt.time.minute()) as i32;
            if window.wraps && start < window.start {
                start += MINUTES_PER_DAY;
            }
            (start, start + appt.duration_min + buffer)
        })
        .collect()
}

fn overlap_count(occupied: &[(i32, i32)], start: i32, end: i32) -> i32 {
    occupied
        .iter()
        .filter(|(s, e)| *s < end && start < *e)
        .count() as i32
}

/// Enumerates the bookable start times for `date` as ordered "HH:MM" strings.
///
/// `service_duration` is the duration of the specific service being scheduled;
/// when absent the detailer's default applies. `existing` must be the
/// appointments already booked for this detailer on `date`. Days the detailer
/// does not work yield an empty vector, which is a normal result.
pub fn calculate_slots(
    weekly: &WeeklyAvailability,
    settings: &DetailerTimingSettings,
    service_duration: Option<i32>,
    existing: &[Appointment],
    date: NaiveDate,
) -> Result<Vec<String>, ScheduleError> {
    let hours = weekly.for_weekday(date.weekday());
    if !hours.active {
        return Ok(Vec::new());
    }

    let window = day_window(hours)?;
    let duration = settings.effective_duration(service_duration);
    check_settings(settings, duration)?;

    let total_needed = duration + settings.buffer_min;
    let occupied = occupied_intervals(existing, &window, settings.buffer_min);

    let mut valid_slots = Vec::new();
    let mut cursor = window.start;
    while cursor + total_needed <= window.end {
        let clashes = overlap_count(&occupied, cursor, cursor + total_needed);
        if clashes < settings.max_appointments_per_slot {
            valid_slots.push(format_clock(cursor));
        } else {
            debug!("Slot {} full ({} existing)", format_clock(cursor), clashes);
        }
        cursor += SLOT_INTERVAL_MIN;
    }

    Ok(valid_slots)
}

/// Re-checks a concrete proposed time before commit. Used when the time was
/// entered directly rather than picked from `calculate_slots`; the time is not
/// required to sit on the half-hour grid.
///
/// On `Accepted` the caller persists the appointment with the returned
/// `duration_min` stamped onto the record.
pub fn validate_booking(
    weekly: &WeeklyAvailability,
    settings: &DetailerTimingSettings,
    service_duration: Option<i32>,
    existing: &[Appointment],
    date: NaiveDate,
    time: NaiveTime,
) -> Result<BookingCheck, ScheduleError> {
    let hours = weekly.for_weekday(date.weekday());
    if !hours.active {
        return Ok(BookingCheck::Rejected(BookingRejection::NotAvailableThisDay));
    }

    let window = day_window(hours)?;
    let duration = settings.effective_duration(service_duration);
    check_settings(settings, duration)?;

    let mut candidate = (time.hour() * 60 + time.minute()) as i32;
    if window.wraps && candidate < window.start {
        candidate += MINUTES_PER_DAY;
    }

    let total_needed = duration + settings.buffer_min;
    if candidate < window.start || candidate + total_needed > window.end {
        return Ok(BookingCheck::Rejected(BookingRejection::OutsideHours));
    }

    let occupied = occupied_intervals(existing, &window, settings.buffer_min);
    if overlap_count(&occupied, candidate, candidate + total_needed)
        >= settings.max_appointments_per_slot
    {
        return Ok(BookingCheck::Rejected(BookingRejection::Overlaps));
    }

    Ok(BookingCheck::Accepted {
        duration_min: duration,
    })
}
