use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "weather-report")]
#[command(about = "Regional weather report generator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        short,
        long,
        global = true,
        help = "Configuration file [default: weather-report.toml if present]"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Folder containing the region table and weather sources"
    )]
    pub data_dir: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Region table file name within the data folder")]
    pub region_table: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print statistics for the requested states
    Report {
        #[arg(
            short,
            long,
            help = "Comma separated states, e.g. \"MA, Texas\" [default: prompt on stdin]"
        )]
        query: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Parse every input file and summarize what was read
    Validate,

    /// List the states known to the region table
    Regions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
