use crate::error::Result;
use crate::models::{RegionAccumulation, RegionStatistics};
use std::collections::HashMap;
use tracing::debug;

pub struct StatisticsAggregator;

impl StatisticsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Reduce every region's accumulation to min/max/average statistics.
    ///
    /// No rounding is applied here; the report formats values for display.
    pub fn aggregate(
        &self,
        accumulations: &HashMap<String, RegionAccumulation>,
    ) -> Result<HashMap<String, RegionStatistics>> {
        let mut statistics = HashMap::with_capacity(accumulations.len());

        for (region, accumulation) in accumulations {
            let stats = RegionStatistics::from_accumulation(region, accumulation)?;
            statistics.insert(region.clone(), stats);
        }

        debug!("Aggregated statistics for {} regions", statistics.len());
        Ok(statistics)
    }
}

impl Default for StatisticsAggregator {
    fn default() -> Self {
        Self::new()
    }
}
