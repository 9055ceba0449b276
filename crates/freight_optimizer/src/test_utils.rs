use freight_routing::Distance;

use crate::problem::{
    delivery_problem::{DeliveryProblem, DeliveryProblemBuilder},
    package::Weight,
};

#[derive(Default)]
pub struct TestProblemBuilder {
    builder: DeliveryProblemBuilder,
}

impl TestProblemBuilder {
    pub fn edge(mut self, from: &str, to: &str, distance: Distance) -> Self {
        self.builder.add_edge(from, to, distance);
        self
    }

    pub fn train(mut self, name: &str, capacity: Weight, start: &str) -> Self {
        self.builder.add_train(name, capacity, start);
        self
    }

    pub fn package(mut self, name: &str, weight: Weight, origin: &str, destination: &str) -> Self {
        self.builder.add_package(name, weight, origin, destination);
        self
    }

    pub fn build(self) -> DeliveryProblem {
        self.builder.build().expect("test problem is valid")
    }
}

/// A - 30 - B - 10 - C, one train at B, one package from A to C.
pub fn line_problem() -> DeliveryProblem {
    TestProblemBuilder::default()
        .edge("A", "B", 30.0)
        .edge("B", "C", 10.0)
        .train("Q1", 6.0, "B")
        .package("K1", 5.0, "A", "C")
        .build()
}

fn grid_node(row: usize, column: usize) -> String {
    format!("{row}-{column}")
}

/// `size` x `size` grid with two trains in opposite corners and `packages` packages
/// spread over the grid.
pub fn grid_problem(size: usize, packages: usize) -> DeliveryProblem {
    let mut builder = TestProblemBuilder::default();

    for row in 0..size {
        for column in 0..size {
            if column + 1 < size {
                builder = builder.edge(
                    &grid_node(row, column),
                    &grid_node(row, column + 1),
                    (1 + (row + column) % 3) as Distance,
                );
            }
            if row + 1 < size {
                builder = builder.edge(
                    &grid_node(row, column),
                    &grid_node(row + 1, column),
                    2.0,
                );
            }
        }
    }

    let last = size - 1;
    builder = builder
        .train("Q1", 10.0, &grid_node(0, 0))
        .train("Q2", 10.0, &grid_node(last, last));

    let node_count = size * size;
    for package in 0..packages {
        let origin = (package * 7 + 1) % node_count;
        let destination = (package * 5 + node_count / 2) % node_count;

        builder = builder.package(
            &format!("K{package}"),
            (3 + package % 3) as Weight,
            &grid_node(origin / size, origin % size),
            &grid_node(destination / size, destination % size),
        );
    }

    builder.build()
}
