//! Scheduling core for a car-detailing marketplace: weekly availability
//! templates, per-detailer timing settings, and a pure availability engine
//! that enumerates bookable slots and validates proposed bookings, including
//! overnight-shift wraparound.

pub mod domain;
pub mod error;
pub mod infra;

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Installs a pretty stdout layer (filtered via `RUST_LOG`) and a JSON daily
/// file layer under `./logs`. Keep the returned guard alive for the process
/// lifetime or buffered file logs are lost.
pub fn init_logging() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("./logs", "detailing-scheduler.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .json()
        .with_writer(non_blocking)
        .with_filter(EnvFilter::new("info,detailing_scheduler=debug"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .with_target(false)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()));

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();

    info!("Logging initialized. Writing JSON logs to ./logs/");
    guard
}
