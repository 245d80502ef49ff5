pub mod reading_reader;
pub mod region_reader;

pub use reading_reader::{IngestSummary, Ingestion, ReadingIngester};
pub use region_reader::RegionReader;
