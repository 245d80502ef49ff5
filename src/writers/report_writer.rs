use crate::error::Result;
use crate::models::{RegionDirectory, RegionStatistics};
use crate::utils::constants::{COLUMN_WIDTH, NO_DATA_MARKER, REPORT_HEADERS, REPORT_PRECISION};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A requested region that has statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(flatten)]
    pub statistics: RegionStatistics,
}

/// Requested regions partitioned into those with data and those without, each in
/// request order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionReport {
    pub with_data: Vec<ReportRow>,
    pub without_data: Vec<String>,
}

impl RegionReport {
    pub fn regions_with_data(&self) -> Vec<&str> {
        self.with_data.iter().map(|row| row.region.as_str()).collect()
    }

    /// Fixed-width table: header, one row per region with data, then one
    /// "No data available" row per region without.
    pub fn render(&self) -> String {
        let mut output = String::new();

        for header in REPORT_HEADERS {
            output.push_str(&format!("{:<width$}", header, width = COLUMN_WIDTH));
        }
        output.push('\n');

        for row in &self.with_data {
            output.push_str(&format!("{:<width$}", row.region, width = COLUMN_WIDTH));
            for value in row.statistics.as_row() {
                output.push_str(&format!(
                    "{:<width$.precision$}",
                    value,
                    width = COLUMN_WIDTH,
                    precision = REPORT_PRECISION
                ));
            }
            output.push('\n');
        }

        for region in &self.without_data {
            output.push_str(&format!(
                "{:<width$}{}\n",
                region,
                NO_DATA_MARKER,
                width = COLUMN_WIDTH
            ));
        }

        output
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for RegionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

pub struct ReportPresenter;

impl ReportPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Normalize each requested identifier and split the request into regions with and
    /// without statistics. Unknown identifiers keep their trimmed text and land in the
    /// no-data group.
    pub fn present<S: AsRef<str>>(
        &self,
        requested: &[S],
        statistics: &HashMap<String, RegionStatistics>,
        directory: &RegionDirectory,
    ) -> RegionReport {
        let mut report = RegionReport::default();

        for identifier in requested {
            let region = directory.resolve(identifier.as_ref());

            match statistics.get(&region) {
                Some(stats) => report.with_data.push(ReportRow {
                    abbreviation: directory.abbreviation_for(&region).map(str::to_string),
                    region,
                    statistics: *stats,
                }),
                None => report.without_data.push(region),
            }
        }

        report
    }
}

impl Default for ReportPresenter {
    fn default() -> Self {
        Self::new()
    }
}
