use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tempfile::TempDir;

use chaincode_kv::{KVStore, MemoryStore, RedbStore, create_composite_key};

fn bench_redb_set(c: &mut Criterion) {
    let tmp = TempDir::new().unwrap();
    let store = RedbStore::open(&tmp.path().join("bench.redb")).unwrap();

    c.bench_function("redb_set", |b| {
        let mut i = 0u64;
        b.iter(|| {
            let key = create_composite_key("contract", &[i.to_string().as_str()]).unwrap();
            store.set(black_box(&key), black_box(b"{\"code\":\"C\"}")).unwrap();
            i += 1;
        });
    });
}

fn bench_redb_get(c: &mut Criterion) {
    let tmp = TempDir::new().unwrap();
    let store = RedbStore::open(&tmp.path().join("bench.redb")).unwrap();

    let keys: Vec<String> = (0..1000)
        .map(|i| create_composite_key("contract", &[format!("C{:04}", i).as_str()]).unwrap())
        .collect();
    for key in &keys {
        store.set(key, b"{\"code\":\"C\"}").unwrap();
    }

    c.bench_function("redb_get", |b| {
        let mut i = 0usize;
        b.iter(|| {
            let _ = store.get(black_box(&keys[i % keys.len()])).unwrap();
            i += 1;
        });
    });
}

fn bench_redb_checked_batch(c: &mut Criterion) {
    let tmp = TempDir::new().unwrap();
    let store = RedbStore::open(&tmp.path().join("bench.redb")).unwrap();

    c.bench_function("redb_insert_if_absent", |b| {
        let mut i = 0u64;
        b.iter(|| {
            let key = create_composite_key("contract", &[i.to_string().as_str()]).unwrap();
            store
                .batch_set_if_unchanged(&[(key.as_str(), None)], &[(key.as_str(), &b"{}"[..])])
                .unwrap();
            i += 1;
        });
    });
}

fn bench_memory_scan(c: &mut Criterion) {
    let store = MemoryStore::new();
    for i in 0..1000 {
        let key = create_composite_key("contract", &[format!("C{:04}", i).as_str()]).unwrap();
        store.set(&key, b"{}").unwrap();
    }
    let prefix = create_composite_key("contract", &[]).unwrap();

    c.bench_function("memory_scan_1000", |b| {
        b.iter(|| {
            let results = store.scan(black_box(&prefix)).unwrap();
            assert_eq!(results.len(), 1000);
        });
    });
}

criterion_group!(
    benches,
    bench_redb_set,
    bench_redb_get,
    bench_redb_checked_batch,
    bench_memory_scan,
);
criterion_main!(benches);
