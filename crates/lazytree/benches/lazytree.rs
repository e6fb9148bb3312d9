use bench::apply_large_runtime_config;
use bench::apply_medium_runtime_config;
use bench::apply_small_runtime_config;
use bench::default_rng;
use bench::random_closed_ranges;
use bench::random_values;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;
use lazytree::{AddMax, AddSum, LazyTree, RangeAlgebra};
use std::hint::black_box;

const SIZES: [usize; 4] = [1_024, 4_096, 16_384, 65_536];
const VALUE_BOUND: i64 = 1_000_000_000;

#[derive(Clone, Copy, Debug)]
enum Workload {
    QueryHeavy,
    Mixed,
    UpdateHeavy,
}

impl Workload {
    fn label(self) -> &'static str {
        match self {
            Self::QueryHeavy => "query_heavy",
            Self::Mixed => "mixed",
            Self::UpdateHeavy => "update_heavy",
        }
    }

    /// Every `stride`-th operation is an update.
    fn update_stride(self) -> usize {
        match self {
            Self::QueryHeavy => 8,
            Self::Mixed => 2,
            Self::UpdateHeavy => 1,
        }
    }
}

fn apply_runtime_config_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 4_096 {
        apply_small_runtime_config(group);
    } else if size <= 16_384 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

fn bench_algebra<M, A>(
    group: &mut BenchmarkGroup<'_, M>,
    name: &str,
    size: usize,
    values: &[i64],
    ranges: &[(usize, usize)],
    update_stride: usize,
) where
    M: Measurement,
    A: RangeAlgebra<Value = i64, Delta = i64>,
{
    group.bench_function(BenchmarkId::new(name, size), |bencher| {
        bencher.iter(|| {
            let mut tree = LazyTree::<A>::from_values(black_box(values)).unwrap();
            let mut acc = 0_i64;
            for (op, &(lo, hi)) in ranges.iter().enumerate() {
                if op % update_stride == 0 {
                    tree.update(black_box(lo), black_box(hi), (op as i64 & 0xFF) - 128)
                        .unwrap();
                } else {
                    acc ^= tree.query(black_box(lo), black_box(hi)).unwrap();
                }
            }
            black_box(acc);
        })
    });
}

fn bench_lazytree(c: &mut Criterion) {
    let workloads = [Workload::QueryHeavy, Workload::Mixed, Workload::UpdateHeavy];
    let mut rng = default_rng();

    for workload in workloads {
        let mut group = c.benchmark_group(format!("lazytree/workload/{}", workload.label()));

        for &size in &SIZES {
            apply_runtime_config_for_size(&mut group, size);
            let values = random_values(&mut rng, size, VALUE_BOUND);
            let ranges = random_closed_ranges(&mut rng, size, 4 * size);
            let stride = workload.update_stride();

            bench_algebra::<_, AddSum>(&mut group, "add_sum", size, &values, &ranges, stride);
            bench_algebra::<_, AddMax>(&mut group, "add_max", size, &values, &ranges, stride);
        }

        group.finish();
    }
}

criterion_group!(benches, bench_lazytree);
criterion_main!(benches);
