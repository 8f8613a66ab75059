extern crate maze_search;
use env_logger::Env;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use log::info;
use maze_search::{compare::solve_all, prelude::*};
use nanorand::{Rng, WyRand};

#[derive(Clone)]
struct Map {
    rows: Vec<Vec<u8>>,
}

impl Map {
    pub fn new(width: usize, height: usize) -> Self {
        Map {
            rows: vec![vec![0; width]; height],
        }
    }

    /// about one in four Cells blocked, with the corners kept open
    pub fn new_random(width: usize, height: usize) -> Self {
        let mut rng = WyRand::new_seed(4);
        let mut rows = vec![vec![0; width]; height];
        for row in rows.iter_mut() {
            for marker in row.iter_mut() {
                *marker = u8::from(rng.generate_range(0_u8..4) == 0);
            }
        }
        rows[0][0] = 0;
        rows[height - 1][width - 1] = 0;
        Map { rows }
    }

    fn grid(&self) -> Grid {
        Grid::from_rows(&self.rows).unwrap()
    }
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // Change this to debug or trace to see every search.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("Strategies");
    group.sample_size(20);

    init();

    let map_sizes = [32, 128];

    for map_size in map_sizes {
        for (label, map) in [
            ("Uniform map", Map::new(map_size, map_size)),
            ("Random map", Map::new_random(map_size, map_size)),
        ] {
            let grid = map.grid();
            let start = Cell::new(0, 0);
            let goal = Cell::new(map_size - 1, map_size - 1);

            for strategy in Strategy::ALL {
                let id = BenchmarkId::new(
                    format!("{}, {}", strategy, label),
                    format!("({}, {})", map_size, map_size),
                );
                group.bench_with_input(id, &grid, |b, grid| {
                    b.iter(|| search(strategy, grid, start, goal))
                });
            }
        }
    }
}

fn bench_solve_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solve all");
    group.sample_size(10);

    let map_size = 256;
    let grid = Map::new_random(map_size, map_size).grid();
    let start = Cell::new(0, 0);
    let goal = Cell::new(map_size - 1, map_size - 1);
    let config = SearchConfig::with_size_hint(map_size * map_size);

    for (strategy, outcome) in solve_all(&grid, start, goal, config) {
        match outcome {
            Ok(Some(path)) => info!("{}: Path of Cost {}", strategy, path.cost()),
            Ok(None) => info!("{}: no Path", strategy),
            Err(err) => info!("{}: {}", strategy, err),
        }
    }

    #[cfg(feature = "parallel")]
    let id = format!("Parallel, Map Size: ({}, {})", map_size, map_size);
    #[cfg(not(feature = "parallel"))]
    let id = format!("Single Threaded, Map Size: ({}, {})", map_size, map_size);

    group.bench_function(&id, |b| b.iter(|| solve_all(&grid, start, goal, config)));
}

criterion_group!(benches, bench_strategies, bench_solve_all);
criterion_main!(benches);
