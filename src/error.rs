use thiserror::Error;

/// Closed set of reasons a proposed booking is turned down.
///
/// These are ordinary return values, not errors: "the slot is taken" is a
/// normal business outcome the caller surfaces to the end user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingRejection {
    #[error("Detailer is not available on this day")]
    NotAvailableThisDay,
    #[error("Requested time does not fit within business hours")]
    OutsideHours,
    #[error("Time slot is already booked to capacity")]
    Overlaps,
}

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Slot unavailable: {0}")]
    SlotUnavailable(BookingRejection),
    #[error("Storage error: {0}")]
    Storage(String),
}
