use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trafficguard_core::{time::ManualTime, ReadingLog, SensorRegistry};

fn append_readings(c: &mut Criterion) {
    c.bench_function("reading_log_append_1000", |b| {
        b.iter(|| {
            let mut log = ReadingLog::new();
            for i in 0..1000 {
                log.append(black_box((i % 1000) as f32)).unwrap();
            }
            log
        })
    });
}

fn lookup_by_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_find");

    for size in [16u32, 128, 512] {
        let mut registry = SensorRegistry::with_time_source(ManualTime::new(0));
        for id in 0..size {
            registry.add(id, "bench").unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| registry.find(black_box(size - 1)).is_some())
        });
    }

    group.finish();
}

criterion_group!(benches, append_readings, lookup_by_id);
criterion_main!(benches);
