use std::collections::VecDeque;
use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{Distribution, apply_runtime_config, generate_dataset, seeded_rng};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use merge_insertion::{
    DEFAULT_PARAMS, InsertableSequence, Variant, all_variants, sort_variant_into, variant_name,
};

const BENCH_SIZES: [usize; 4] = [10, 100, 500, 3000];

#[derive(Clone, Copy)]
enum Backing {
    Vec,
    VecDeque,
}

impl Backing {
    const ALL: [Backing; 2] = [Backing::Vec, Backing::VecDeque];

    fn label(self) -> &'static str {
        match self {
            Self::Vec => "vec",
            Self::VecDeque => "vec_deque",
        }
    }
}

fn run_once<S: InsertableSequence<Item = i32>>(variant: Variant, base: &[i32]) -> Duration {
    let data = base.to_vec();
    let start = Instant::now();
    let sorted: S = sort_variant_into(variant, data, |a, b| a < b, &DEFAULT_PARAMS);
    let elapsed = start.elapsed();
    black_box(&sorted);
    elapsed
}

fn bench_merge_insertion(c: &mut Criterion) {
    for dist in Distribution::ALL {
        let mut group = c.benchmark_group(format!("merge_insertion/{}", dist.label()));

        for &size in &BENCH_SIZES {
            apply_runtime_config(&mut group, size);
            let base = generate_dataset(&mut seeded_rng(size as u64), dist, size);

            for &variant in all_variants() {
                for backing in Backing::ALL {
                    let id = format!("{}/{}", variant_name(variant), backing.label());
                    group.bench_function(BenchmarkId::new(id, size), |bencher| {
                        bencher.iter_custom(|iters| {
                            let mut total = Duration::ZERO;
                            for _ in 0..iters {
                                total += match backing {
                                    Backing::Vec => run_once::<Vec<i32>>(variant, &base),
                                    Backing::VecDeque => {
                                        run_once::<VecDeque<i32>>(variant, &base)
                                    }
                                };
                            }
                            total
                        });
                    });
                }
            }

            group.bench_function(BenchmarkId::new("std_stable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = Instant::now();
                        data.sort();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_merge_insertion);
criterion_main!(benches);
