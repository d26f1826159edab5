use serde::{Deserialize, Serialize};

/// Per-detailer scalar scheduling configuration.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DetailerTimingSettings {
    /// Minutes assumed for a service with no explicit duration.
    pub default_duration_min: i32,
    /// Idle minutes enforced after every appointment before another may begin.
    pub buffer_min: i32,
    /// Concurrent capacity per slot (multiple bays / staff).
    pub max_appointments_per_slot: i32,
}

impl Default for DetailerTimingSettings {
    fn default() -> Self {
        Self {
            default_duration_min: 60,
            buffer_min: 0,
            max_appointments_per_slot: 1,
        }
    }
}

impl DetailerTimingSettings {
    /// Resolves a service's optional duration against the detailer default.
    /// The fallback lives here so call sites never coalesce it themselves.
    pub fn effective_duration(&self, service_duration: Option<i32>) -> i32 {
        service_duration.unwrap_or(self.default_duration_min)
    }
}
