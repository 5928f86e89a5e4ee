use criterion::{criterion_group, criterion_main, Criterion};
use maze_tiles::{
    generators,
    grid::Grid,
    units::{Height, Width},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_hunt_and_kill_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("hunt_and_kill_maze_32", move |b| {
        b.iter(|| {
            let mut g = Grid::new(Width(32), Height(32)).unwrap();
            generators::carve(&mut g, &mut rng);
            g
        })
    });
}

fn bench_hunt_and_kill_maze_128(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(128);
    c.bench_function("hunt_and_kill_maze_128", move |b| {
        b.iter(|| {
            let mut g = Grid::new(Width(128), Height(128)).unwrap();
            generators::carve(&mut g, &mut rng);
            g
        })
    });
}

fn bench_hunt_full_grid_64(c: &mut Criterion) {
    let mut g = Grid::new(Width(64), Height(64)).unwrap();
    generators::carve_seeded(&mut g, 64);
    c.bench_function("hunt_full_grid_64", move |b| {
        b.iter(|| generators::hunt(&g))
    });
}

criterion_group!(
    benches,
    bench_hunt_and_kill_maze_32,
    bench_hunt_and_kill_maze_128,
    bench_hunt_full_grid_64
);
criterion_main!(benches);
