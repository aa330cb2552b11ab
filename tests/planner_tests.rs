mod common;

use common::{labels, negative_triangle, three_cities};
use flight_planner::algorithm::Algorithm;
use flight_planner::graph::{Graph, ParseMode};
use flight_planner::planner::RouteRecord;
use flight_planner::{Error, NodeLimits, Planner, PlannerConfig};

fn sequential_planner() -> Planner {
    Planner::new(PlannerConfig {
        parallel_pricing: false,
        ..Default::default()
    })
}

#[test]
fn test_plan_by_name_end_to_end() {
    let planner = Planner::default();
    let graph = planner
        .parse_graph(labels(&["A", "B", "C"]), "0 4 INF\nINF 0 1\n2 INF 0\n")
        .unwrap();

    let plan = planner
        .plan_by_name(&graph, " A ", Algorithm::Dijkstra, &["Vistara", "IndiGo"])
        .unwrap()
        .converged()
        .unwrap();

    assert_eq!(plan.paths.distances, vec![Some(0.0), Some(4.0), Some(5.0)]);
    assert_eq!(plan.best_carrier().unwrap().carrier.name, "IndiGo");

    let records = plan.route_records(&graph).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(
        records[1],
        RouteRecord {
            carrier: "IndiGo".to_string(),
            source: "A".to_string(),
            destination: "C".to_string(),
            base_cost: 5.0,
            tax: 0.0,
            flat_fee: 200.0,
            cost: 205.0,
            algorithm_used: "Dijkstra".to_string(),
        }
    );
    assert!(records[2..].iter().all(|r| r.carrier == "Vistara"));
}

#[test]
fn test_every_algorithm_prices_the_same() {
    let planner = sequential_planner();
    let graph = three_cities();
    let carriers = planner.config().carriers.clone();

    let plans: Vec<_> = Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            planner
                .plan(&graph, 0, algorithm, &carriers)
                .unwrap()
                .converged()
                .unwrap()
        })
        .collect();

    for plan in &plans[1..] {
        assert_eq!(plan.itineraries, plans[0].itineraries);
    }
    assert_eq!(plans[1].route_records(&graph).unwrap()[0].algorithm_used, "Bellman-Ford");
}

#[test]
fn test_negative_cycle_prices_nothing() {
    let planner = Planner::default();
    let graph = negative_triangle();

    for algorithm in [Algorithm::BellmanFord, Algorithm::FloydWarshall] {
        let outcome = planner.plan_by_name::<_, &str>(&graph, "A", algorithm, &[]).unwrap();
        assert!(outcome.is_negative_cycle());
    }
    assert!(planner.all_pairs(&graph).is_negative_cycle());
}

#[test]
fn test_dijkstra_on_negative_graph_is_an_error() {
    let planner = Planner::default();
    let graph = negative_triangle();
    assert!(matches!(
        planner.plan_by_name::<_, &str>(&graph, "A", Algorithm::Dijkstra, &[]),
        Err(Error::NegativeEdgeNotSupported { from: 2, to: 0 })
    ));
}

#[test]
fn test_unknown_city_and_carrier() {
    let planner = Planner::default();
    let graph = three_cities();
    assert!(matches!(
        planner.plan_by_name::<_, &str>(&graph, "Z", Algorithm::Dijkstra, &[]),
        Err(Error::UnknownLabel(name)) if name == "Z"
    ));
    assert!(matches!(
        planner.plan_by_name(&graph, "A", Algorithm::Dijkstra, &["Nope"]),
        Err(Error::UnknownCarrier(_))
    ));
}

#[test]
fn test_parse_mode_and_limits_come_from_config() {
    let strict = Planner::new(PlannerConfig {
        parse_mode: ParseMode::Strict,
        ..Default::default()
    });
    let lenient = Planner::default();
    let text = "0 abc\n1 0";

    assert!(matches!(
        strict.parse_graph(labels(&["A", "B"]), text),
        Err(Error::MalformedToken { row: 0, col: 1, .. })
    ));
    let graph = lenient.parse_graph(labels(&["A", "B"]), text).unwrap();
    assert_eq!(graph.weight(0, 1).unwrap(), None);
    assert_eq!(graph.weight(1, 0).unwrap(), Some(1.0));

    let names: Vec<String> = (0..12).map(|i| format!("C{}", i)).collect();
    let row = vec!["0"; 12].join(" ");
    let text = vec![row; 12].join("\n");
    assert!(matches!(
        lenient.parse_graph(names.clone(), &text),
        Err(Error::NodeCountOutOfRange { count: 12, .. })
    ));

    let unbounded = Planner::new(PlannerConfig {
        limits: NodeLimits::unbounded(),
        ..Default::default()
    });
    assert_eq!(unbounded.parse_graph(names, &text).unwrap().vertex_count(), 12);
}

#[test]
fn test_parse_rejects_missing_rows() {
    let planner = Planner::default();
    assert!(matches!(
        planner.parse_graph(labels(&["A", "B", "C"]), "0 1 2\n\n3 0 4\n"),
        Err(Error::InvalidDimension { what: "rows", expected: 3, found: 2 })
    ));
}

#[test]
fn test_parsed_labels_are_trimmed() {
    let planner = Planner::default();
    let graph = planner
        .parse_graph(labels(&[" Pune", "Goa "]), "0 7\n7 0")
        .unwrap();

    assert_eq!(graph.labels(), &["Pune".to_string(), "Goa".to_string()]);
    let plan = planner
        .plan_by_name::<_, &str>(&graph, "Pune", Algorithm::Dijkstra, &[])
        .unwrap()
        .converged()
        .unwrap();
    assert_eq!(plan.route_records(&graph).unwrap()[0].source, "Pune");
}
