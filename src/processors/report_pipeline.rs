use crate::config::Settings;
use crate::error::Result;
use crate::models::{RegionDirectory, RegionStatistics};
use crate::processors::StatisticsAggregator;
use crate::readers::{IngestSummary, ReadingIngester, RegionReader};
use crate::writers::{RegionReport, ReportPresenter};
use std::collections::HashMap;
use tracing::info;

/// Everything the report stage needs: the directory and per-region statistics.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub directory: RegionDirectory,
    pub statistics: HashMap<String, RegionStatistics>,
    pub summary: IngestSummary,
}

impl PipelineOutput {
    /// Answer a query of region identifiers against the loaded statistics
    pub fn report<S: AsRef<str>>(&self, requested: &[S]) -> RegionReport {
        ReportPresenter::new().present(requested, &self.statistics, &self.directory)
    }
}

pub struct ReportPipeline {
    settings: Settings,
}

impl ReportPipeline {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Load the region table only
    pub fn load_directory(&self) -> Result<RegionDirectory> {
        RegionReader::new().read_directory(&self.settings.region_table_path())
    }

    /// Region table → ingestion → aggregation
    pub fn run(&self) -> Result<PipelineOutput> {
        let directory = self.load_directory()?;

        let ingestion =
            ReadingIngester::new().ingest(&self.settings.source_paths(), &directory)?;

        let statistics = StatisticsAggregator::new().aggregate(&ingestion.accumulations)?;

        info!(
            "Aggregated {} readings into {} regions",
            ingestion.summary.readings_accepted,
            statistics.len()
        );

        Ok(PipelineOutput {
            directory,
            statistics,
            summary: ingestion.summary,
        })
    }
}
