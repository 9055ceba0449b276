use freight_routing::Distance;
use serde::{Deserialize, Serialize};

use crate::{
    problem::{
        delivery_problem::{DeliveryProblem, DeliveryProblemBuilder},
        error::ProblemError,
        package::{PackageIdx, Weight},
    },
    solver::movement::Movement,
};

pub trait FromProblem<T> {
    fn from_problem(value: T, problem: &DeliveryProblem) -> Self;
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename = "DeliveryProblem")]
pub struct JsonDeliveryProblem {
    pub edges: Vec<JsonEdge>,
    pub trains: Vec<JsonTrain>,
    pub packages: Vec<JsonPackage>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields, rename = "Edge")]
pub struct JsonEdge {
    pub from: String,
    pub to: String,
    pub distance: Distance,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields, rename = "Train")]
pub struct JsonTrain {
    pub name: String,
    pub capacity: Weight,
    pub start: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields, rename = "Package")]
pub struct JsonPackage {
    pub name: String,
    pub weight: Weight,
    pub from: String,
    pub to: String,
}

impl JsonDeliveryProblem {
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn build_problem(&self) -> Result<DeliveryProblem, ProblemError> {
        let mut builder = DeliveryProblemBuilder::default();

        for edge in &self.edges {
            builder.add_edge(&edge.from, &edge.to, edge.distance);
        }

        for train in &self.trains {
            builder.add_train(&train.name, train.capacity, &train.start);
        }

        for package in &self.packages {
            builder.add_package(&package.name, package.weight, &package.from, &package.to);
        }

        builder.build()
    }
}

/// One movement of a plan, with train and packages referenced by name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename = "Movement")]
pub struct JsonMovement {
    #[serde(rename = "W")]
    pub start_time: Distance,
    #[serde(rename = "T")]
    pub train: String,
    #[serde(rename = "N1")]
    pub from: String,
    #[serde(rename = "P1")]
    pub picked_up: Vec<String>,
    #[serde(rename = "N2")]
    pub to: String,
    #[serde(rename = "P2")]
    pub delivered: Vec<String>,
}

impl FromProblem<&Movement> for JsonMovement {
    fn from_problem(value: &Movement, problem: &DeliveryProblem) -> Self {
        let package_names = |packages: &[PackageIdx]| -> Vec<String> {
            packages
                .iter()
                .map(|&package_id| problem.package(package_id).name().to_owned())
                .collect()
        };

        JsonMovement {
            start_time: value.start_time(),
            train: problem.train(value.train()).name().to_owned(),
            from: value.from().to_owned(),
            picked_up: package_names(value.picked_up()),
            to: value.to().to_owned(),
            delivered: package_names(value.delivered()),
        }
    }
}
