use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use glam::{IVec2, UVec2};

use costmap_region::types::{COST_FREE, COST_INFLATED, COST_OCCUPIED, MapInfo};
use costmap_region::{CellRegion, Costmap, Kernel, RegionInflator, inflate};

#[derive(Clone, Copy)]
enum ObstaclePattern {
    Empty,
    SingleCenter,
    Sparse(u32),
}

fn grid_with_obstacles(width: u32, height: u32, pattern: ObstaclePattern) -> Costmap {
    let info = MapInfo::new(width, height);
    let mut grid = Costmap::filled(info, COST_FREE).unwrap();

    match pattern {
        ObstaclePattern::Empty => {}
        ObstaclePattern::SingleCenter => {
            let _ = grid.set(UVec2::new(width / 2, height / 2), COST_OCCUPIED);
        }
        ObstaclePattern::Sparse(step) => {
            let step = step.max(1) as usize;
            for y in (0..height).step_by(step) {
                for x in (0..width).step_by(step) {
                    let _ = grid.set(UVec2::new(x, y), COST_OCCUPIED);
                }
            }
        }
    }

    grid
}

fn bench_kernel(c: &mut Criterion, name: &str, grid: &Costmap, kernel: &Kernel) {
    c.bench_function(name, |b| {
        b.iter_batched(
            || grid.clone(),
            |mut g| {
                inflate(&mut g, COST_OCCUPIED, kernel, COST_INFLATED);
                black_box(g);
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_inflation(c: &mut Criterion) {
    let uniform_11 = Kernel::uniform(11).unwrap();
    let ellipse_11 = Kernel::ellipse(11).unwrap();

    bench_kernel(
        c,
        "inflate_empty_256_uniform_11",
        &grid_with_obstacles(256, 256, ObstaclePattern::Empty),
        &uniform_11,
    );
    bench_kernel(
        c,
        "inflate_single_center_128_ellipse_11",
        &grid_with_obstacles(128, 128, ObstaclePattern::SingleCenter),
        &ellipse_11,
    );
    bench_kernel(
        c,
        "inflate_sparse_256_ellipse_11",
        &grid_with_obstacles(256, 256, ObstaclePattern::Sparse(16)),
        &ellipse_11,
    );

    let mut group = c.benchmark_group("disk_strip");
    group.sample_size(10);
    group.bench_function("gaussian_51", |b| {
        let grid =
            Costmap::filled_disk(MapInfo::new(1000, 1000), IVec2::splat(500), 300, COST_OCCUPIED)
                .unwrap();
        let inflator = RegionInflator::new(Kernel::gaussian(51, 10.0).unwrap());
        let region = CellRegion::new(100, 700, 399, 799);
        b.iter_batched(
            || grid.clone(),
            |mut g| {
                let report = inflator.inflate_region(&mut g, region).unwrap();
                black_box(report);
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_inflation);
criterion_main!(benches);
