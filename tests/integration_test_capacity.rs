mod common;

use common::{booking_request, monday, template_from_json, timing, TestHarness};
use detailing_scheduler::error::{BookingRejection, ScheduleError};
use serde_json::json;

fn workday() -> serde_json::Value {
    json!({
        "monday": { "active": true, "start": "09:00", "end": "18:00" }
    })
}

#[tokio::test]
async fn test_two_bays_allow_two_concurrent_bookings() {
    let harness = TestHarness::new(template_from_json(workday()), timing(60, 0, 2)).await;

    harness
        .scheduler
        .book(booking_request(monday(), "10:00", None))
        .await
        .expect("first booking fills bay one");

    harness
        .scheduler
        .book(booking_request(monday(), "10:00", None))
        .await
        .expect("second booking fills bay two");

    let third = harness
        .scheduler
        .book(booking_request(monday(), "10:00", None))
        .await;
    assert!(matches!(
        third,
        Err(ScheduleError::SlotUnavailable(BookingRejection::Overlaps))
    ));
}

#[tokio::test]
async fn test_slot_listed_until_capacity_reached() {
    let harness = TestHarness::new(template_from_json(workday()), timing(60, 0, 2)).await;

    harness
        .scheduler
        .book(booking_request(monday(), "10:00", None))
        .await
        .unwrap();

    let slots = harness
        .scheduler
        .available_slots(common::DETAILER, None, monday())
        .await
        .unwrap();
    assert!(
        slots.contains(&"10:00".to_string()),
        "one of two bays is still free"
    );

    harness
        .scheduler
        .book(booking_request(monday(), "10:00", None))
        .await
        .unwrap();

    let slots = harness
        .scheduler
        .available_slots(common::DETAILER, None, monday())
        .await
        .unwrap();
    assert!(!slots.contains(&"10:00".to_string()), "both bays taken");
    assert!(!slots.contains(&"09:30".to_string()), "09:30 would overlap both");
    assert!(slots.contains(&"11:00".to_string()));
}

#[tokio::test]
async fn test_partial_overlaps_count_against_capacity() {
    let harness = TestHarness::new(template_from_json(workday()), timing(60, 0, 2)).await;

    // Staggered bookings both overlap the 10:00-11:00 interval.
    harness
        .scheduler
        .book(booking_request(monday(), "09:30", None))
        .await
        .unwrap();
    harness
        .scheduler
        .book(booking_request(monday(), "10:30", None))
        .await
        .unwrap();

    let rejected = harness
        .scheduler
        .book(booking_request(monday(), "10:00", None))
        .await;
    assert!(matches!(
        rejected,
        Err(ScheduleError::SlotUnavailable(BookingRejection::Overlaps))
    ));
}
