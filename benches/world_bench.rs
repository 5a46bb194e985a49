//! World throughput benchmarks: scattered writes, reads, save and culled walks.

use cgmath::{Deg, Matrix4, Point3, Vector3};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hearth_world::persistence::{self, MemoryStorage};
use hearth_world::{
    AcceptAll, DefaultNodeFactory, FrustumClippingPredicate, TrailingChunkPolicy, VoxelPos, World,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GLOBAL_SHIFT: u8 = 10;
const VOXEL_COUNT: usize = 10_000;

fn scattered_positions(count: usize) -> Vec<VoxelPos> {
    let mut rng = StdRng::seed_from_u64(42);
    let side = 1i32 << GLOBAL_SHIFT;
    (0..count)
        .map(|_| {
            VoxelPos::new(
                rng.gen_range(0..side),
                rng.gen_range(0..side),
                rng.gen_range(0..side),
            )
        })
        .collect()
}

fn filled_world(leaf_shift: u8, positions: &[VoxelPos]) -> World {
    let mut world = World::new(DefaultNodeFactory::new(leaf_shift), GLOBAL_SHIFT)
        .expect("valid shifts");
    for (n, pos) in positions.iter().enumerate() {
        world.put(*pos, (n % 255) as u8 + 1).expect("inside world");
    }
    world
}

fn bench_put(c: &mut Criterion) {
    let positions = scattered_positions(VOXEL_COUNT);
    let mut group = c.benchmark_group("put_scattered");
    group.throughput(Throughput::Elements(VOXEL_COUNT as u64));

    for leaf_shift in [3u8, 4, 5] {
        group.bench_with_input(BenchmarkId::from_parameter(leaf_shift), &leaf_shift, |b, &shift| {
            b.iter(|| black_box(filled_world(shift, &positions)))
        });
    }

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let positions = scattered_positions(VOXEL_COUNT);
    let world = filled_world(4, &positions);
    let mut group = c.benchmark_group("get_scattered");
    group.throughput(Throughput::Elements(VOXEL_COUNT as u64));

    group.bench_function("written", |b| {
        b.iter(|| positions.iter().map(|p| world.get(*p) as u64).sum::<u64>())
    });

    group.finish();
}

fn bench_save_load(c: &mut Criterion) {
    let world = filled_world(4, &scattered_positions(VOXEL_COUNT));
    let storage = MemoryStorage::new();

    c.bench_function("save_memory", |b| {
        b.iter(|| persistence::save(&world, &storage, "bench.world").expect("save"))
    });

    persistence::save(&world, &storage, "bench.world").expect("save");
    c.bench_function("load_memory", |b| {
        b.iter(|| {
            persistence::load(
                &storage,
                "bench.world",
                DefaultNodeFactory::new(4),
                TrailingChunkPolicy::Reject,
            )
            .expect("load")
        })
    });
}

fn bench_culled_walk(c: &mut Criterion) {
    let world = filled_world(4, &scattered_positions(VOXEL_COUNT));
    let side = world.side() as f32;
    let view = Matrix4::look_at_rh(
        Point3::new(side * 0.5, side * 0.5, -side * 0.25),
        Point3::new(side * 0.5, side * 0.5, side * 0.5),
        Vector3::unit_y(),
    );
    let view_proj = cgmath::perspective(Deg(60.0), 16.0 / 9.0, 0.1, side * 2.0) * view;

    let mut group = c.benchmark_group("visit_leaves");
    group.bench_function("unculled", |b| {
        b.iter(|| {
            let mut count = 0usize;
            world.visit_leaves(&mut AcceptAll, |_| count += 1);
            count
        })
    });
    group.bench_function("frustum_culled", |b| {
        let mut predicate = FrustumClippingPredicate::from_matrix(&view_proj, 1.0);
        b.iter(|| {
            let mut count = 0usize;
            world.visit_leaves(&mut predicate, |_| count += 1);
            count
        })
    });
    group.finish();
}

criterion_group!(benches, bench_put, bench_get, bench_save_load, bench_culled_walk);
criterion_main!(benches);
