use crate::error::{ProcessingError, Result};
use crate::utils::constants::REGION_FIELD_DELIMITER;
use crate::utils::text::title_case;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// One entry of the region table: an abbreviation and its canonical full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegionRecord {
    #[validate(length(min = 1))]
    pub abbreviation: String,

    #[validate(length(min = 1))]
    pub name: String,
}

impl RegionRecord {
    pub fn new(abbreviation: &str, name: &str) -> Self {
        Self {
            abbreviation: abbreviation.trim().to_uppercase(),
            name: title_case(name.trim()),
        }
    }

    /// Parse a `"<FullName>, <Abbreviation>"` line.
    pub fn parse(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split(REGION_FIELD_DELIMITER).collect();
        if parts.len() != 2 {
            return None;
        }

        let record = Self::new(parts[1], parts[0]);
        record.validate().ok()?;
        Some(record)
    }
}

/// Bidirectional, case-insensitive lookup between abbreviations and canonical names.
///
/// Immutable once built. Both the uppercased abbreviation and the title-cased full name
/// map to the same canonical value.
#[derive(Debug, Clone, Default)]
pub struct RegionDirectory {
    records: Vec<RegionRecord>,
    by_abbreviation: HashMap<String, String>,
    by_name: HashMap<String, String>,
}

impl RegionDirectory {
    /// Build a directory from region table lines.
    pub fn build<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_from_source("<input>", lines)
    }

    /// Build a directory from region table lines, naming `origin` in any error.
    pub fn build_from_source<I, S>(origin: &str, lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut directory = Self::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref().trim_end_matches('\r');

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let record =
                RegionRecord::parse(line).ok_or_else(|| ProcessingError::MalformedRegionRecord {
                    origin: origin.to_string(),
                    line: index + 1,
                    content: line.to_string(),
                })?;
            directory.insert(record);
        }

        Ok(directory)
    }

    fn insert(&mut self, record: RegionRecord) {
        self.by_abbreviation
            .insert(record.abbreviation.clone(), record.name.clone());
        self.by_name.insert(record.name.clone(), record.name.clone());
        self.records.push(record);
    }

    /// Strict lookup: the canonical name for `identifier`, or `None` when neither the
    /// abbreviation nor the full-name form is known.
    pub fn lookup(&self, identifier: &str) -> Option<&str> {
        let identifier = identifier.trim();
        self.by_abbreviation
            .get(&identifier.to_uppercase())
            .or_else(|| self.by_name.get(&title_case(identifier)))
            .map(String::as_str)
    }

    /// Lenient lookup: the canonical name for `identifier`, falling back to the trimmed
    /// input when there is no match.
    pub fn resolve(&self, identifier: &str) -> String {
        self.lookup(identifier)
            .map(str::to_string)
            .unwrap_or_else(|| identifier.trim().to_string())
    }

    /// Reverse lookup from a canonical name to its abbreviation.
    pub fn abbreviation_for(&self, name: &str) -> Option<&str> {
        let name = title_case(name.trim());
        self.records
            .iter()
            .rev()
            .find(|record| record.name == name)
            .map(|record| record.abbreviation.as_str())
    }

    /// Records in table order.
    pub fn records(&self) -> &[RegionRecord] {
        &self.records
    }

    /// Number of distinct canonical regions.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_directory() -> RegionDirectory {
        RegionDirectory::build([
            "Massachusetts, MA",
            "california, ca",
            "NEW YORK, NY",
            "Texas, TX",
        ])
        .unwrap()
    }

    #[test]
    fn test_parse_region_record() {
        let record = RegionRecord::parse("new hampshire, nh ").unwrap();
        assert_eq!(record.abbreviation, "NH");
        assert_eq!(record.name, "New Hampshire");

        assert!(RegionRecord::parse("Massachusetts").is_none());
        assert!(RegionRecord::parse("Massachusetts, MA, extra").is_none());
        assert!(RegionRecord::parse(", MA").is_none());
        assert!(RegionRecord::parse("Massachusetts,MA").is_none());
    }

    #[test]
    fn test_resolve_both_forms() {
        let directory = sample_directory();

        assert_eq!(directory.resolve("MA"), "Massachusetts");
        assert_eq!(directory.resolve("ma"), "Massachusetts");
        assert_eq!(directory.resolve("massachusetts"), "Massachusetts");
        assert_eq!(directory.resolve("  MASSACHUSETTS "), "Massachusetts");
        assert_eq!(directory.resolve("ca"), "California");
        assert_eq!(directory.resolve("new york"), "New York");
    }

    #[test]
    fn test_abbreviation_and_name_agree() {
        let directory = sample_directory();
        for record in directory.records() {
            assert_eq!(
                directory.resolve(&record.abbreviation),
                directory.resolve(&record.name)
            );
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let directory = sample_directory();
        for identifier in ["ny", "New york", "TX"] {
            let once = directory.resolve(identifier);
            assert_eq!(directory.resolve(&once), once);
        }
    }

    #[test]
    fn test_unknown_identifier() {
        let directory = sample_directory();
        assert_eq!(directory.lookup("Nonexistent"), None);
        assert_eq!(directory.resolve(" Nonexistent "), "Nonexistent");
    }

    #[test]
    fn test_abbreviation_for() {
        let directory = sample_directory();
        assert_eq!(directory.abbreviation_for("New York"), Some("NY"));
        assert_eq!(directory.abbreviation_for("texas"), Some("TX"));
        assert_eq!(directory.abbreviation_for("Ohio"), None);
    }

    #[test]
    fn test_duplicate_abbreviation_last_wins() {
        let directory = RegionDirectory::build(["Massachusetts, MA", "Michigan, MA"]).unwrap();

        assert_eq!(directory.resolve("MA"), "Michigan");
        assert_eq!(directory.resolve("massachusetts"), "Massachusetts");
        assert_eq!(directory.records().len(), 2);
        assert_eq!(directory.records()[0].name, "Massachusetts");
        assert_eq!(directory.abbreviation_for("Michigan"), Some("MA"));
    }

    #[test]
    fn test_expanding_case_letters_round_trip() {
        let directory = RegionDirectory::build(["ßtadt, ST"]).unwrap();

        let canonical = directory.resolve("ST");
        assert_eq!(canonical, "Stadt");
        assert_eq!(directory.lookup("ßtadt"), Some("Stadt"));
        assert_eq!(directory.resolve(&canonical), canonical);
    }

    #[test]
    fn test_malformed_record_reports_line() {
        let err = RegionDirectory::build(["Massachusetts, MA", "", "Texas"]).unwrap_err();
        match err {
            ProcessingError::MalformedRegionRecord { line, content, .. } => {
                assert_eq!(line, 3);
                assert_eq!(content, "Texas");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_lines_skipped() {
        let directory = RegionDirectory::build(["", "Ohio, OH\r", "   "]).unwrap();
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.resolve("oh"), "Ohio");
    }
}
