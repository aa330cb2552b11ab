use std::time::{Duration, Instant};
use flight_planner::algorithm::{Algorithm, Outcome};
use flight_planner::graph::generators::generate_flight_network;
use flight_planner::graph::{CostMatrix, Graph};
use flight_planner::pricing::price_itineraries;
use flight_planner::PlannerConfig;

const ITERATIONS: u32 = 10_000;

// Average time of one run of `algorithm` from city 0
fn benchmark_algorithm(algorithm: Algorithm, graph: &CostMatrix<f64>) -> Duration {
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        match algorithm.run::<f64, _>(graph, 0) {
            Ok(Outcome::Converged(_)) => {}
            Ok(Outcome::NegativeCycleDetected) => println!("  - {}: negative cycle", algorithm),
            Err(e) => println!("  - {}: {}", algorithm, e),
        }
    }
    start.elapsed() / ITERATIONS
}

fn main() {
    let city_counts = [2, 4, 6, 8, 10];
    let density = 0.4;
    let carriers = PlannerConfig::default().carriers;

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs Bellman-Ford vs Floyd-Warshall");
    println!("Edge density: {}", density);
    println!("=====================================================");

    let mut results = Vec::new();

    for &n in &city_counts {
        let graph = generate_flight_network(n, density);
        println!("\n{} cities, {} edges", graph.vertex_count(), graph.edge_count());

        let timings: Vec<Duration> = Algorithm::ALL
            .iter()
            .map(|&algorithm| benchmark_algorithm(algorithm, &graph))
            .collect();

        let start = Instant::now();
        if let Ok(Outcome::Converged(paths)) = Algorithm::Dijkstra.run(&graph, 0) {
            for _ in 0..ITERATIONS {
                if let Err(e) = price_itineraries(&paths, &carriers, &graph) {
                    println!("  - pricing failed: {}", e);
                    break;
                }
            }
        }
        let pricing = start.elapsed() / ITERATIONS;

        results.push((n, timings, pricing));
    }

    println!("\n=====================================================");
    println!("Summary of Results (average per run)");
    println!("=====================================================");
    println!(
        "{:<8} | {:<15} | {:<15} | {:<15} | {:<15}",
        "Cities", "Dijkstra", "Bellman-Ford", "Floyd-Warshall", "Pricing"
    );
    println!("-----------------------------------------------------");

    for (n, timings, pricing) in &results {
        println!(
            "{:<8} | {:<15?} | {:<15?} | {:<15?} | {:<15?}",
            n, timings[0], timings[1], timings[2], pricing
        );
    }
}
