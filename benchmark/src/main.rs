use maze_search::{prelude::*, Cost};
use rand::Rng;
use std::collections::HashMap;
use std::time::Instant;

const SIZE: usize = 512;

fn main() {
    let mut rng = rand::thread_rng();

    let config = SearchConfig::with_size_hint(SIZE * SIZE);

    let mut results: HashMap<Strategy, Vec<(u128, Option<Cost>)>> = Strategy::ALL
        .iter()
        .map(|&strategy| (strategy, vec![]))
        .collect();

    let points = [
        Cell::new(0, 0),
        Cell::new(0, SIZE - 1),
        Cell::new(SIZE - 1, 0),
        Cell::new(SIZE - 1, SIZE - 1),
    ];

    for _ in 0..10 {
        let mut rows: Vec<Vec<u8>> = Vec::with_capacity(SIZE);
        for _ in 0..SIZE {
            rows.push((0..SIZE).map(|_| u8::from(rng.gen_ratio(1, 4))).collect());
        }
        for p in points.iter() {
            rows[p.row][p.col] = 0;
        }
        let grid = Grid::from_rows(&rows).unwrap();

        println!("finished Grid gen");

        for &strategy in Strategy::ALL.iter() {
            let results = results.get_mut(&strategy).unwrap();
            for i in 0..4 {
                for j in (0..4).filter(|x| *x != i) {
                    let start_time = Instant::now();
                    let path = search_with_config(strategy, &grid, points[i], points[j], config)
                        .unwrap();
                    let dt = start_time.elapsed().as_nanos();
                    results.push((dt, path.map(|p| p.cost())));
                }
            }
        }
    }

    let best = results[&Strategy::BreadthFirst]
        .iter()
        .map(|(_, cost)| cost)
        .cloned()
        .collect::<Vec<_>>();

    for strategy in Strategy::ALL {
        let results = &results[&strategy];
        let times = results.iter().map(|r| r.0);
        let min_time = times.clone().min().unwrap() as f64 / 1_000_000.0;
        let max_time = times.clone().max().unwrap() as f64 / 1_000_000.0;
        let avg_time = times.sum::<u128>() as f64 / results.len() as f64 / 1_000_000.0;

        assert!(results
            .iter()
            .zip(best.iter())
            .all(|(a, b)| a.1.is_some() == b.is_some()));

        let costs = results
            .iter()
            .filter_map(|r| r.1)
            .zip(best.iter().filter_map(|p| *p))
            .map(|(cost, best)| best as f64 / cost as f64);

        let min_cost = costs.clone().fold(f64::INFINITY, |a, b| a.min(b));
        let max_cost = costs.clone().fold(0.0_f64, |a, b| a.max(b));
        let avg_cost = costs.clone().sum::<f64>() / costs.count() as f64;

        println!(
            "{:>20} | {:.3}ms - {:.3}ms; {:.3}ms | {:.2}% - {:.2}%; {:.2}%",
            strategy.name(),
            min_time,
            max_time,
            avg_time,
            min_cost * 100.0,
            max_cost * 100.0,
            avg_cost * 100.0,
        );
    }
}
