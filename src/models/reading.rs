use crate::utils::constants::{HUMIDITY_MARKER, READING_FIELD_COUNT, READING_FIELD_DELIMITER};
use serde::{Deserialize, Serialize};

/// One observed sample from a weather source line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub city: String,
    /// Region identifier as written in the source, abbreviation or full name in any case.
    pub region: String,
    pub temperature: f64,
    pub humidity: f64,
}

impl Reading {
    pub fn new(city: String, region: String, temperature: f64, humidity: f64) -> Self {
        Self {
            city,
            region,
            temperature,
            humidity,
        }
    }

    /// Parse a `"<City>, <Region>, <Temperature> <unit>, <Humidity>%"` line.
    ///
    /// The error string describes what was wrong; callers attach the source location.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let parts: Vec<&str> = line.split(READING_FIELD_DELIMITER).map(|s| s.trim()).collect();

        if parts.len() != READING_FIELD_COUNT {
            return Err(format!(
                "expected {} fields, found {}",
                READING_FIELD_COUNT,
                parts.len()
            ));
        }

        let temperature = parse_temperature(parts[2])?;
        let humidity = parse_humidity(parts[3])?;

        Ok(Self::new(
            parts[0].to_string(),
            parts[1].to_string(),
            temperature,
            humidity,
        ))
    }
}

/// Parse the leading number of a temperature field such as `"55.0 F"`; the unit is discarded.
pub fn parse_temperature(field: &str) -> std::result::Result<f64, String> {
    field
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("invalid temperature '{}'", field))
}

/// Parse a humidity field such as `"60%"`.
pub fn parse_humidity(field: &str) -> std::result::Result<f64, String> {
    let value = field.strip_suffix(HUMIDITY_MARKER).unwrap_or(field).trim();
    value
        .parse::<f64>()
        .ok()
        .filter(|humidity| humidity.is_finite())
        .ok_or_else(|| format!("invalid humidity '{}'", field))
}

/// Unreduced temperature and humidity samples collected for one canonical region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionAccumulation {
    pub temperatures: Vec<f64>,
    pub humidities: Vec<f64>,
}

impl RegionAccumulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, reading: &Reading) {
        self.temperatures.push(reading.temperature);
        self.humidities.push(reading.humidity);
    }

    /// Append every sample of `other`, as when merging per-source accumulations.
    pub fn merge(&mut self, other: RegionAccumulation) {
        self.temperatures.extend(other.temperatures);
        self.humidities.extend(other.humidities);
    }

    pub fn sample_count(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty() || self.humidities.is_empty()
    }
}
