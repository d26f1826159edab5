use chrono::{NaiveDate, NaiveTime};
use colored::*;
use detailing_scheduler::domain::models::appointment::{Appointment, NewAppointmentParams};
use detailing_scheduler::domain::models::availability::WeeklyAvailability;
use detailing_scheduler::domain::models::service::Service;
use detailing_scheduler::domain::models::settings::DetailerTimingSettings;
use detailing_scheduler::domain::ports::{
    AppointmentRepository, DetailerSettingsRepository, ServiceRepository,
};
use detailing_scheduler::domain::services::booking::SchedulingService;
use detailing_scheduler::infra::repositories::memory::{
    MemoryAppointmentRepo, MemoryServiceRepo, MemorySettingsRepo,
};
use hdrhistogram::Histogram;
use rand::Rng;
use std::sync::Arc;
use std::time::Instant;

const ITERATIONS: u64 = 10_000;
const DETAILER_ID: &str = "bench-detailer";

#[tokio::main]
async fn main() {
    println!("{}", "🚀 Availability Engine Benchmark".bold().green());
    println!("Iterations per stage: {}", ITERATIONS);

    let settings_repo = Arc::new(MemorySettingsRepo::new());
    let service_repo = Arc::new(MemoryServiceRepo::new());
    let appointment_repo = Arc::new(MemoryAppointmentRepo::new());

    setup_detailer(settings_repo.as_ref(), service_repo.as_ref()).await;

    let service = SchedulingService::new(
        settings_repo.clone(),
        service_repo.clone(),
        appointment_repo.clone(),
    );

    // One date per stage so earlier stages' seed data stays out of the way.
    let booked_stages = vec![0usize, 10, 50, 200];
    let base_date = NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date");

    println!("\n{}", "=".repeat(64));
    println!("Benchmarking: {}", "available_slots".cyan().bold());
    println!("{}", "=".repeat(64));
    println!(
        "{:<12} | {:<15} | {:<15} | {:<10}",
        "Booked", "Mean (us)", "P99 (us)", "Slots"
    );
    println!("{:-<12}-+-{:-<15}-+-{:-<15}-+-{:-<10}", "", "", "", "");

    for (stage, &booked) in booked_stages.iter().enumerate() {
        let date = base_date + chrono::Duration::weeks(stage as i64);
        seed_appointments(appointment_repo.as_ref(), date, booked).await;

        let mut histogram = Histogram::<u64>::new(3).expect("histogram");
        let mut slot_count = 0usize;

        for _ in 0..ITERATIONS {
            let start = Instant::now();
            let slots = service
                .available_slots(DETAILER_ID, Some("Exterior Wash"), date)
                .await
                .expect("slot calculation failed");
            histogram
                .record(start.elapsed().as_micros() as u64)
                .expect("record latency");
            slot_count = slots.len();
        }

        println!(
            "{:<12} | {:<15.2} | {:<15.2} | {:<10}",
            booked,
            histogram.mean(),
            histogram.value_at_quantile(0.99) as f64,
            slot_count
        );
    }

    println!("\n{}", "✅ Benchmark complete.".green());
}

async fn setup_detailer(settings_repo: &MemorySettingsRepo, service_repo: &MemoryServiceRepo) {
    let weekly = WeeklyAvailability::standard();

    settings_repo
        .upsert_weekly_availability(DETAILER_ID, &weekly)
        .await
        .expect("seed template");
    settings_repo
        .upsert_timing_settings(
            DETAILER_ID,
            &DetailerTimingSettings {
                default_duration_min: 60,
                buffer_min: 15,
                max_appointments_per_slot: 2,
            },
        )
        .await
        .expect("seed settings");

    service_repo
        .create(&Service::new(
            DETAILER_ID.to_string(),
            "Exterior Wash".to_string(),
            4999,
            Some(45),
        ))
        .await
        .expect("seed service");
}

async fn seed_appointments(repo: &MemoryAppointmentRepo, date: NaiveDate, count: usize) {
    let mut rng = rand::thread_rng();
    for i in 0..count {
        let minutes: u32 = 9 * 60 + rng.gen_range(0..480);
        let appointment = Appointment::new(NewAppointmentParams {
            detailer_id: DETAILER_ID.to_string(),
            customer_name: format!("Bench Customer {}", i),
            customer_email: format!("bench{}@example.com", i),
            service_name: Some("Exterior Wash".to_string()),
            date,
            time: NaiveTime::from_num_seconds_from_midnight_opt(minutes * 60, 0)
                .expect("valid time"),
            duration_min: 45,
        });
        repo.create(&appointment).await.expect("seed appointment");
    }
}
