pub mod reading;
pub mod region;
pub mod statistics;

pub use reading::{Reading, RegionAccumulation};
pub use region::{RegionDirectory, RegionRecord};
pub use statistics::RegionStatistics;
