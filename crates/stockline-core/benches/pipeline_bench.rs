use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stockline_core::{filter, parse, project, PlotRect, ScalePair, Selection};

fn gen_csv(rows: usize) -> String {
    let companies = ["Apple", "Google", "Tesla"];
    let mut csv = String::from("Company,Date,Open,Close\n");
    for i in 0..rows {
        let company = companies[i % companies.len()];
        let month = (i / 28) % 12 + 1;
        let day = i % 28 + 1;
        let open = 100.0 + (i as f64 * 0.07).sin() * 20.0;
        let close = open + (i as f64 * 0.11).cos() * 3.0;
        csv.push_str(&format!(
            "{company},2023-{month:02}-{day:02},{open:.2},{close:.2}\n"
        ));
    }
    csv
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for &n in &[1_000usize, 5_000usize] {
        let text = gen_csv(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| black_box(parse(text)));
        });
    }
    group.finish();
}

fn bench_filter_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_project");
    for &n in &[1_000usize, 5_000usize] {
        let dataset = parse(&gen_csv(n));
        let selection = Selection::default_for(&dataset).expect("generated data has choices");
        group.bench_with_input(BenchmarkId::from_parameter(n), &dataset, |b, ds| {
            b.iter(|| {
                let series = filter(ds, &selection);
                let scales =
                    ScalePair::build(&series, PlotRect::default()).expect("non-empty series");
                black_box(project(&series, &scales));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_filter_project);
criterion_main!(benches);
