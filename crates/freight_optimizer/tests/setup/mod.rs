#![allow(dead_code)]

use freight_optimizer::{
    json::types::JsonDeliveryProblem,
    problem::delivery_problem::{DeliveryProblem, DeliveryProblemBuilder},
    solver::{search_params::SearchParams, solver::Solver},
};
use tracing::Level;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub type EdgeInput<'a> = (&'a str, &'a str, f64);
pub type TrainInput<'a> = (&'a str, f64, &'a str);
pub type PackageInput<'a> = (&'a str, f64, &'a str, &'a str);

pub fn create_test_problem(
    edges: &[EdgeInput],
    trains: &[TrainInput],
    packages: &[PackageInput],
) -> DeliveryProblem {
    let mut builder = DeliveryProblemBuilder::default();

    for &(from, to, distance) in edges {
        builder.add_edge(from, to, distance);
    }
    for &(name, capacity, start) in trains {
        builder.add_train(name, capacity, start);
    }
    for &(name, weight, origin, destination) in packages {
        builder.add_package(name, weight, origin, destination);
    }

    builder.build().expect("test problem is valid")
}

pub fn create_solver(problem: DeliveryProblem, params: SearchParams) -> Solver {
    init_tracing();
    Solver::new(problem, params)
}

pub fn create_solver_from_json(input: serde_json::Value) -> Solver {
    let json_problem: JsonDeliveryProblem =
        serde_json::from_value(input).expect("input is a delivery problem");
    create_solver(
        json_problem.build_problem().expect("input is valid"),
        SearchParams::default(),
    )
}
