use criterion::{black_box, criterion_group, criterion_main, Criterion};
use instpatch::{check_version, version, Version};

fn benchmark_version_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("Version_Query");

    group.bench_function("version_triple", |b| b.iter(|| black_box(version())));
    group.bench_function("check_version", |b| {
        b.iter(|| check_version(black_box(1), black_box(0), black_box(0)))
    });
    group.bench_function("display", |b| b.iter(|| Version::current().to_string()));

    group.finish();
}

fn benchmark_version_parse(c: &mut Criterion) {
    c.bench_function("Version_Parse", |b| {
        b.iter(|| Version::parse(black_box("1.1.4")))
    });
}

criterion_group!(benches, benchmark_version_query, benchmark_version_parse);
criterion_main!(benches);
