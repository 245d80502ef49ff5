use crate::error::{ProcessingError, Result};
use crate::models::{Reading, RegionAccumulation, RegionDirectory};
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Counters describing one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub sources_read: usize,
    pub sources_skipped: usize,
    pub readings_accepted: usize,
    pub readings_dropped: usize,
}

impl IngestSummary {
    fn merge(&mut self, other: IngestSummary) {
        self.sources_read += other.sources_read;
        self.sources_skipped += other.sources_skipped;
        self.readings_accepted += other.readings_accepted;
        self.readings_dropped += other.readings_dropped;
    }
}

/// Readings grouped by canonical region name.
#[derive(Debug, Clone, Default)]
pub struct Ingestion {
    pub accumulations: HashMap<String, RegionAccumulation>,
    pub summary: IngestSummary,
}

impl Ingestion {
    /// Fold another ingestion into this one, appending samples per region.
    pub fn merge(&mut self, other: Ingestion) {
        for (region, accumulation) in other.accumulations {
            self.accumulations
                .entry(region)
                .or_default()
                .merge(accumulation);
        }
        self.summary.merge(other.summary);
    }
}

pub struct ReadingIngester;

impl ReadingIngester {
    pub fn new() -> Self {
        Self
    }

    /// Ingest every source in order. Missing files contribute nothing; a malformed line
    /// in an existing file aborts the whole run.
    pub fn ingest<P: AsRef<Path>>(
        &self,
        sources: &[P],
        directory: &RegionDirectory,
    ) -> Result<Ingestion> {
        sources.iter().try_fold(Ingestion::default(), |mut total, path| {
            total.merge(self.ingest_source(path.as_ref(), directory)?);
            Ok(total)
        })
    }

    /// Ingest a single source file
    pub fn ingest_source(&self, path: &Path, directory: &RegionDirectory) -> Result<Ingestion> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Weather source {} not found, skipping", path.display());
                return Ok(Ingestion {
                    summary: IngestSummary {
                        sources_skipped: 1,
                        ..IngestSummary::default()
                    },
                    ..Ingestion::default()
                });
            }
            Err(e) => return Err(e.into()),
        };

        debug!("Reading weather source {}", path.display());
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;

        let mut ingestion = self.ingest_lines(&path.display().to_string(), lines, directory)?;
        ingestion.summary.sources_read = 1;

        info!(
            "Read {} readings from {} ({} dropped for unknown regions)",
            ingestion.summary.readings_accepted,
            path.display(),
            ingestion.summary.readings_dropped
        );

        Ok(ingestion)
    }

    /// Ingest lines from an in-memory source, naming `origin` in any error
    pub fn ingest_lines<I, S>(
        &self,
        origin: &str,
        lines: I,
        directory: &RegionDirectory,
    ) -> Result<Ingestion>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ingestion = Ingestion::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref().trim_end_matches('\r');

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let reading =
                Reading::parse(line).map_err(|reason| ProcessingError::MalformedReadingLine {
                    origin: origin.to_string(),
                    line: index + 1,
                    reason,
                })?;

            // Unknown regions are dropped, not reported
            let Some(region) = directory.lookup(&reading.region) else {
                debug!(
                    "Dropping reading for unknown region '{}' at {}:{}",
                    reading.region,
                    origin,
                    index + 1
                );
                ingestion.summary.readings_dropped += 1;
                continue;
            };

            ingestion
                .accumulations
                .entry(region.to_string())
                .or_default()
                .push(&reading);
            ingestion.summary.readings_accepted += 1;
        }

        Ok(ingestion)
    }
}

impl Default for ReadingIngester {
    fn default() -> Self {
        Self::new()
    }
}
