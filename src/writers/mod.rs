pub mod report_writer;

pub use report_writer::{RegionReport, ReportPresenter, ReportRow};
