use crate::cli::args::{Cli, Commands, OutputFormat};
use crate::config::Settings;
use crate::processors::ReportPipeline;
use crate::utils::constants::QUERY_PROMPT;
use crate::utils::text::parse_query;
use anyhow::Context;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    setup_logging(cli.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(cli, &mut stdin.lock(), &mut stdout.lock())
}

/// Run a command against explicit input and output streams
pub fn execute<R: BufRead, W: Write>(cli: Cli, input: &mut R, output: &mut W) -> anyhow::Result<()> {
    let settings = Settings::load(cli.config.as_deref())?
        .with_data_dir(cli.data_dir)
        .with_region_table(cli.region_table);
    let pipeline = ReportPipeline::new(settings);

    match cli.command {
        Commands::Report { query, format } => {
            let pipeline_output = pipeline.run()?;

            let line = match query {
                Some(query) => query,
                None => prompt_query(input, output)?,
            };
            let requested = parse_query(&line);
            debug!("Requested regions: {:?}", requested);

            let report = pipeline_output.report(&requested);
            match format {
                OutputFormat::Text => write!(output, "{}", report.render())?,
                OutputFormat::Json => writeln!(output, "{}", report.to_json()?)?,
            }
        }

        Commands::Validate => {
            let settings = pipeline.settings();
            writeln!(output, "Validating weather data...")?;
            writeln!(output, "Region table: {}", settings.region_table_path().display())?;

            let pipeline_output = pipeline.run()?;
            let summary = pipeline_output.summary;

            writeln!(output, "Regions in table: {}", pipeline_output.directory.len())?;
            writeln!(
                output,
                "Sources read: {}, skipped (missing): {}",
                summary.sources_read, summary.sources_skipped
            )?;
            writeln!(
                output,
                "Readings accepted: {}, dropped (unknown region): {}",
                summary.readings_accepted, summary.readings_dropped
            )?;
            writeln!(
                output,
                "Regions with data: {}",
                pipeline_output.statistics.len()
            )?;
            writeln!(output, "✅ All input files parsed successfully")?;
        }

        Commands::Regions => {
            let directory = pipeline.load_directory()?;
            for record in directory.records() {
                writeln!(output, "{:<4}{}", record.abbreviation, record.name)?;
            }
        }
    }

    output.flush()?;
    Ok(())
}

/// Show the prompt and read one line of region identifiers
fn prompt_query<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<String> {
    write!(output, "{}", QUERY_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read states from standard input")?;
    Ok(line)
}

/// Set up structured logging on stderr, leaving stdout for the report
pub fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = if verbose { "debug" } else { "warn" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("weather_report={}", log_level)));

    // Ignore a second initialization, e.g. when called from tests
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}
