//! Benchmarks for rangekv range and point operations

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rangekv::{Config, Database, Key};
use tempfile::TempDir;

const POPULATION: u32 = 10_000;

fn open_populated() -> (TempDir, Database) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .path(temp_dir.path().join("bench"))
        .build()
        .unwrap();
    let db = Database::open(config).unwrap();
    let entries: Vec<(Key, Vec<u8>)> = (0..POPULATION)
        .map(|i| (Key::U32(i), i.to_be_bytes().to_vec()))
        .collect();
    db.put_many("bench", &entries).unwrap();
    (temp_dir, db)
}

fn range_benchmarks(c: &mut Criterion) {
    let (_temp, db) = open_populated();

    c.bench_function("scan_range_100", |b| {
        b.iter(|| db.scan_range("bench", black_box(5_000u32), black_box(5_099u32)).unwrap())
    });

    c.bench_function("scan_range_extended_100", |b| {
        b.iter(|| {
            db.scan_range_extended("bench", black_box(5_000u32), black_box(5_099u32))
                .unwrap()
        })
    });

    c.bench_function("get", |b| {
        b.iter(|| db.get("bench", black_box(4_242u32)).unwrap())
    });
}

fn write_benchmarks(c: &mut Criterion) {
    c.bench_function("put_many_1000", |b| {
        b.iter_batched(
            || {
                let temp_dir = TempDir::new().unwrap();
                let db = Database::open_path(temp_dir.path().join("bench")).unwrap();
                let entries: Vec<(Key, Vec<u8>)> =
                    (0..1_000u32).map(|i| (Key::U32(i), vec![0; 64])).collect();
                (temp_dir, db, entries)
            },
            |(_temp, db, entries)| db.put_many("bench", &entries).unwrap(),
            BatchSize::PerIteration,
        )
    });

    c.bench_function("delete_range_100", |b| {
        b.iter_batched(
            open_populated,
            |(_temp, db)| db.delete_range("bench", 5_000u32, 5_099u32).unwrap(),
            BatchSize::PerIteration,
        )
    });
}

criterion_group!(benches, range_benchmarks, write_benchmarks);
criterion_main!(benches);
