use crate::error::{ProcessingError, Result};
use crate::models::RegionAccumulation;
use serde::{Deserialize, Serialize};

/// Min/max/average of temperature and humidity for one canonical region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionStatistics {
    pub max_temperature: f64,
    pub min_temperature: f64,
    pub avg_temperature: f64,
    pub max_humidity: f64,
    pub min_humidity: f64,
    pub avg_humidity: f64,
}

impl RegionStatistics {
    /// Reduce an accumulation. Fails with `EmptyAccumulation` when either series is empty.
    pub fn from_accumulation(region: &str, accumulation: &RegionAccumulation) -> Result<Self> {
        let empty = || ProcessingError::EmptyAccumulation {
            region: region.to_string(),
        };

        let (min_temperature, max_temperature, avg_temperature) =
            summarize(&accumulation.temperatures).ok_or_else(empty)?;
        let (min_humidity, max_humidity, avg_humidity) =
            summarize(&accumulation.humidities).ok_or_else(empty)?;

        Ok(Self {
            max_temperature,
            min_temperature,
            avg_temperature,
            max_humidity,
            min_humidity,
            avg_humidity,
        })
    }

    /// Values in report column order.
    pub fn as_row(&self) -> [f64; 6] {
        [
            self.max_temperature,
            self.min_temperature,
            self.avg_temperature,
            self.max_humidity,
            self.min_humidity,
            self.avg_humidity,
        ]
    }
}

/// (min, max, mean) of a non-empty series. The mean is held within [min, max] against
/// accumulated rounding error.
fn summarize(values: &[f64]) -> Option<(f64, f64, f64)> {
    if values.is_empty() {
        return None;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;

    for &value in values {
        min = min.min(value);
        max = max.max(value);
        sum += value;
    }

    Some((min, max, (sum / values.len() as f64).clamp(min, max)))
}
