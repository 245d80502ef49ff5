/// File names
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_REGION_TABLE: &str = "states.txt";
pub const DEFAULT_SOURCES: [&str; 4] = [
    "weather_1.txt",
    "weather_2.txt",
    "weather_3.txt",
    "weather_4.txt",
];
pub const CONFIG_FILE: &str = "weather-report.toml";
pub const ENV_PREFIX: &str = "WEATHER_REPORT";

/// Line formats
pub const REGION_FIELD_DELIMITER: &str = ", ";
pub const READING_FIELD_DELIMITER: char = ',';
pub const READING_FIELD_COUNT: usize = 4;
pub const HUMIDITY_MARKER: char = '%';
pub const QUERY_DELIMITER: char = ',';

/// Report layout
pub const COLUMN_WIDTH: usize = 15;
pub const REPORT_PRECISION: usize = 2;
pub const REPORT_HEADERS: [&str; 7] = [
    "State",
    "Max Temp (F)",
    "Min Temp (F)",
    "Avg Temp (F)",
    "Max Hum (%)",
    "Min Hum (%)",
    "Avg Hum (%)",
];
pub const NO_DATA_MARKER: &str = "No data available";
pub const QUERY_PROMPT: &str = "Enter states (comma separated): ";

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
