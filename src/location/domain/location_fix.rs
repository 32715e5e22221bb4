use super::Coordinate;
use chrono::Utc;
use serde::Serialize;

/// Altitude reported with every fix, in meters
pub const FIX_ALTITUDE_M: f64 = 0.0;

/// Horizontal accuracy radius reported with every fix, in meters
pub const FIX_ACCURACY_M: f32 = 5.0;

/// A single instantaneous position report injected into a provider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationFix {
    provider: String,
    #[serde(flatten)]
    coordinate: Coordinate,
    altitude_m: f64,
    accuracy_m: f32,
    /// Wall-clock time in milliseconds since the Unix epoch
    time_ms: i64,
    /// Monotonic elapsed-time tag, when the host has such a clock
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_realtime_nanos: Option<u64>,
}

impl LocationFix {
    /// Builds a fix for `coordinate` stamped with the current wall-clock time
    pub fn now(
        provider: &str,
        coordinate: Coordinate,
        elapsed_realtime_nanos: Option<u64>,
    ) -> Self {
        Self {
            provider: provider.to_string(),
            coordinate,
            altitude_m: FIX_ALTITUDE_M,
            accuracy_m: FIX_ACCURACY_M,
            time_ms: Utc::now().timestamp_millis(),
            elapsed_realtime_nanos,
        }
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn latitude(&self) -> f64 {
        self.coordinate.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.coordinate.longitude()
    }

    pub fn altitude_m(&self) -> f64 {
        self.altitude_m
    }

    pub fn accuracy_m(&self) -> f32 {
        self.accuracy_m
    }

    pub fn time_ms(&self) -> i64 {
        self.time_ms
    }

    pub fn elapsed_realtime_nanos(&self) -> Option<u64> {
        self.elapsed_realtime_nanos
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}
