//! Benchmarks for the dashboard computations
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use launch_dash::analytics::{aggregate, project};
use launch_dash::dataset::{
    Dataset, DatasetLoader, LaunchRecord, Outcome, PayloadRange, SiteSelector,
};
use launch_dash::figure::{payload_scatter, success_pie, svg};

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn create_test_dataset(count: usize) -> Dataset {
    (0..count)
        .map(|i| {
            let outcome = if i % 3 == 0 { Outcome::Failure } else { Outcome::Success };
            LaunchRecord::new(
                SITES[i % SITES.len()],
                (i * 37 % 9600) as f64,
                outcome,
                BOOSTERS[i % BOOSTERS.len()],
            )
        })
        .collect()
}

fn create_test_csv(count: usize) -> String {
    let mut csv = String::from("Launch Site,Payload Mass (kg),class,Booster Version Category\n");
    for record in create_test_dataset(count).records() {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            record.site,
            record.payload_mass_kg.unwrap_or_default(),
            record.outcome.class(),
            record.booster_category
        ));
    }
    csv
}

fn bench_analytics(c: &mut Criterion) {
    let mut group = c.benchmark_group("analytics");

    for size in [56, 1000, 10000] {
        let dataset = create_test_dataset(size);
        let range = PayloadRange::new(2000.0, 8000.0);
        let site = SiteSelector::from("KSC LC-39A");

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("aggregate_all_{}", size), |b| {
            b.iter(|| aggregate(black_box(&dataset), &SiteSelector::All))
        });

        group.bench_function(format!("aggregate_site_{}", size), |b| {
            b.iter(|| aggregate(black_box(&dataset), &site))
        });

        group.bench_function(format!("project_{}", size), |b| {
            b.iter(|| project(black_box(&dataset), &SiteSelector::All, range))
        });
    }

    group.finish();
}

fn bench_figures(c: &mut Criterion) {
    let mut group = c.benchmark_group("figures");
    let dataset = create_test_dataset(1000);
    let range = PayloadRange::new(0.0, 9600.0);

    group.bench_function("pie_svg", |b| {
        b.iter(|| svg::render_pie(&success_pie(black_box(&dataset), &SiteSelector::All)))
    });

    group.bench_function("scatter_svg", |b| {
        b.iter(|| {
            let figure = payload_scatter(black_box(&dataset), &SiteSelector::All, range);
            svg::render_scatter(&figure)
        })
    });

    group.finish();
}

fn bench_loader(c: &mut Criterion) {
    let mut group = c.benchmark_group("loader");
    let csv = create_test_csv(1000);
    let loader = DatasetLoader::new();

    group.throughput(Throughput::Elements(1000));
    group.bench_function("load_str_1000", |b| {
        b.iter(|| loader.load_str(black_box(&csv)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_analytics, bench_figures, bench_loader);
criterion_main!(benches);
