use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use weather_report::models::RegionDirectory;
use weather_report::processors::StatisticsAggregator;
use weather_report::readers::ReadingIngester;
use weather_report::writers::ReportPresenter;

const STATES: [(&str, &str); 6] = [
    ("Massachusetts", "MA"),
    ("California", "CA"),
    ("Texas", "TX"),
    ("New York", "NY"),
    ("Ohio", "OH"),
    ("Rhode Island", "RI"),
];

// Create test data for benchmarking
fn create_test_lines(readings: usize) -> (Vec<String>, Vec<String>) {
    let table = STATES
        .iter()
        .map(|(name, abbreviation)| format!("{}, {}", name, abbreviation))
        .collect();

    let lines = (0..readings)
        .map(|i| {
            let (name, abbreviation) = STATES[i % STATES.len()];
            // Alternate between identifier forms and an unknown region
            let region = match i % 3 {
                0 => abbreviation.to_lowercase(),
                1 => name.to_uppercase(),
                _ => "Nowhere".to_string(),
            };
            format!(
                "City {}, {}, {:.1} F, {:.0}%",
                i,
                region,
                30.0 + (i % 70) as f64,
                (i % 100) as f64
            )
        })
        .collect();

    (table, lines)
}

fn benchmark_ingestion(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingestion");

    for readings in [1_000, 10_000] {
        let (table, lines) = create_test_lines(readings);
        let directory = RegionDirectory::build(&table).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(readings), &lines, |b, lines| {
            b.iter(|| {
                ReadingIngester::new()
                    .ingest_lines("bench", black_box(lines), &directory)
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn benchmark_aggregation_and_report(c: &mut Criterion) {
    let (table, lines) = create_test_lines(10_000);
    let directory = RegionDirectory::build(&table).unwrap();
    let ingestion = ReadingIngester::new()
        .ingest_lines("bench", &lines, &directory)
        .unwrap();

    c.bench_function("aggregate", |b| {
        b.iter(|| {
            StatisticsAggregator::new()
                .aggregate(black_box(&ingestion.accumulations))
                .unwrap()
        })
    });

    let statistics = StatisticsAggregator::new()
        .aggregate(&ingestion.accumulations)
        .unwrap();
    let requested = ["ma", "California", "tx", "Nowhere", "new york", "OH", "ri"];

    c.bench_function("present_and_render", |b| {
        b.iter(|| {
            ReportPresenter::new()
                .present(black_box(&requested), &statistics, &directory)
                .render()
        })
    });
}

criterion_group!(
    benches,
    benchmark_ingestion,
    benchmark_aggregation_and_report
);
criterion_main!(benches);
