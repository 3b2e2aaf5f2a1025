use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Latency thresholds the pool's detector buckets proxies by
pub const SPEED_THRESHOLDS: [Duration; 2] = [Duration::from_millis(750), Duration::from_millis(1500)];

/// Coarse latency class accepted by `/proxies/one`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedBucket {
    Fast,
    Medium,
    Slow,
}

impl SpeedBucket {
    /// Query value sent to the backend
    pub fn as_param(&self) -> &'static str {
        match self {
            SpeedBucket::Fast => "0",
            SpeedBucket::Medium => "1",
            SpeedBucket::Slow => "2",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        match s.trim() {
            "0" => Some(SpeedBucket::Fast),
            "1" => Some(SpeedBucket::Medium),
            "2" => Some(SpeedBucket::Slow),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpeedBucket::Fast => "<750ms",
            SpeedBucket::Medium => "<1500ms",
            SpeedBucket::Slow => ">=1500ms",
        }
    }

    pub fn classify(latency: Duration) -> Self {
        if latency < SPEED_THRESHOLDS[0] {
            SpeedBucket::Fast
        } else if latency < SPEED_THRESHOLDS[1] {
            SpeedBucket::Medium
        } else {
            SpeedBucket::Slow
        }
    }

    pub fn all() -> &'static [SpeedBucket] {
        &[SpeedBucket::Fast, SpeedBucket::Medium, SpeedBucket::Slow]
    }
}
