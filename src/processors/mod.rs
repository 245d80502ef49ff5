pub mod report_pipeline;
pub mod statistics_aggregator;

pub use report_pipeline::{PipelineOutput, ReportPipeline};
pub use statistics_aggregator::StatisticsAggregator;
