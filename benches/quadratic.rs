use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sortviz::{Algorithm, Frame, Never, Runner, Sequence, SortConfig};

const N: usize = 1024;

// counts frames so emission is not optimized away
fn benchmark_quadratic(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let data = Sequence::shuffled(N, &mut rng).unwrap();
    let mut group = c.benchmark_group("quadratic 1Ki");
    for algorithm in [Algorithm::Bubble, Algorithm::Selection, Algorithm::Insertion] {
        let runner = Runner::new(SortConfig::new(N, algorithm)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(algorithm), &data, |b, data| {
            b.iter(|| {
                let mut seq = data.clone();
                let mut frames = 0u64;
                let mut sink = |f: Frame<'_>| frames += f.accessed.len() as u64;
                runner.run(&mut seq, &mut sink, &Never).unwrap();
                black_box(frames);
            })
        });
    }
    group.finish();
}

criterion_group!(name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_quadratic);
criterion_main!(benches);
