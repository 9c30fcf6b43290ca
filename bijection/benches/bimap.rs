use bijection::Bimap;
use criterion::{
    BenchmarkId, Criterion, black_box, criterion_group, criterion_main,
};

fn build(n: u64) -> Bimap<u64, u64> {
    (0..n).map(|i| (i, i.wrapping_mul(0x9e37_79b9_7f4a_7c15))).collect()
}

pub fn set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");
    for n in [10, 100, 1000] {
        group.bench_function(BenchmarkId::new("fresh", n), |b| {
            b.iter(|| black_box(build(n)))
        });
        // Keys and values come from a tiny domain, so most inserts evict
        group.bench_function(BenchmarkId::new("colliding", n), |b| {
            b.iter(|| {
                let mut m = Bimap::with_capacity(4);
                for i in 0..n {
                    m.set(i % 4, (i / 3) % 4);
                }
                black_box(m)
            })
        });
    }
}

pub fn lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    for n in [10, 100, 1000] {
        let m = build(n);
        let values: Vec<u64> = m.values().copied().collect();
        group.bench_function(BenchmarkId::new("by key", n), |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(m.get(&i));
                }
            })
        });
        group.bench_function(BenchmarkId::new("by value", n), |b| {
            b.iter(|| {
                for v in &values {
                    black_box(m.get_by_value(v));
                }
            })
        });
    }
}

pub fn delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    for n in [10, 100, 1000] {
        let m = build(n);
        group.bench_function(BenchmarkId::new("front to back", n), |b| {
            b.iter(|| {
                let mut m = m.clone();
                for i in 0..n {
                    black_box(m.delete(&i));
                }
            })
        });
        group.bench_function(BenchmarkId::new("back to front", n), |b| {
            b.iter(|| {
                let mut m = m.clone();
                for i in (0..n).rev() {
                    black_box(m.delete(&i));
                }
            })
        });
    }
}

criterion_group!(benches, set, lookup, delete);
criterion_main!(benches);
