use crate::error::Result;
use crate::models::RegionDirectory;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

pub struct RegionReader;

impl RegionReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the region table file and build a directory from it
    pub fn read_directory(&self, path: &Path) -> Result<RegionDirectory> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;

        let directory = RegionDirectory::build_from_source(&path.display().to_string(), lines)?;
        info!(
            "Loaded {} regions from {}",
            directory.len(),
            path.display()
        );

        Ok(directory)
    }
}

impl Default for RegionReader {
    fn default() -> Self {
        Self::new()
    }
}
