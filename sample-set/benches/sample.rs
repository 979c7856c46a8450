use criterion::{criterion_group, criterion_main, Criterion};

use rand::{rngs::StdRng, SeedableRng};
use sample_set::SampleSet;

/// All four operations should stay flat as the set grows; the churn
/// loop is the interesting number since it exercises the swap-remove
/// repacking on every iteration.
fn bench_sample_set(c: &mut Criterion) {
    let set: SampleSet<u32> = (0..10_000).collect();
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("insert - duplicate", |b| {
        let mut set = set.clone();
        b.iter(|| set.insert(5_000))
    });
    c.bench_function("insert/remove - round trip", |b| {
        let mut set = set.clone();
        b.iter(|| {
            set.insert(10_001);
            set.remove(&10_001)
        })
    });

    c.bench_function("remove - miss", |b| {
        let mut set = set.clone();
        b.iter(|| set.remove(&20_000))
    });

    c.bench_function("sample", |b| b.iter(|| *set.sample_with(&mut rng).unwrap()));

    c.bench_function("churn - sample then replace", |b| {
        let mut set = set.clone();
        let mut rng = StdRng::seed_from_u64(2);
        b.iter(|| {
            let victim = *set.sample_with(&mut rng).unwrap();
            set.remove(&victim);
            set.insert(victim)
        })
    });
}

criterion_group!(benches, bench_sample_set);
criterion_main!(benches);
