//! Benchmarks for leafdb storage operations

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use leafdb::constants::{LEAF_NODE_MAX_CELLS, ROW_SIZE};
use leafdb::{Row, Table};
use tempfile::TempDir;

fn row_codec_benchmarks(c: &mut Criterion) {
    let row = Row::new(1, "user1", "user1@example.com");
    let mut buf = [0u8; ROW_SIZE];

    c.bench_function("row_serialize", |b| {
        b.iter(|| row.serialize(black_box(&mut buf[..])))
    });

    row.serialize(&mut buf[..]);
    c.bench_function("row_deserialize", |b| {
        b.iter(|| Row::deserialize(black_box(&buf[..])))
    });
}

fn insert_benchmarks(c: &mut Criterion) {
    c.bench_function("fill_one_leaf", |b| {
        b.iter_batched(
            || {
                let dir = TempDir::new().unwrap();
                let table = Table::open(&dir.path().join("bench.db")).unwrap();
                (dir, table)
            },
            |(_dir, mut table)| {
                for id in 0..LEAF_NODE_MAX_CELLS as u32 {
                    let row = Row::new(id, "user", "user@example.com");
                    let mut cursor = table.find(id).unwrap();
                    cursor.insert(id, &row).unwrap();
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, row_codec_benchmarks, insert_benchmarks);
criterion_main!(benches);
