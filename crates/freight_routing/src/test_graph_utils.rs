use crate::route_graph::{Distance, RouteGraph};

#[derive(Clone, Copy, Debug)]
pub enum RomaniaCity {
    Arad,
    Bucharest,
    Craiova,
    Dobreta,
    Eforie,
    Fagaras,
    Giurgiu,
    Hirsova,
    Iasi,
    Lugoj,
    Mehadia,
    Neamt,
    Oradea,
    Pitesti,
    RimnicuVilcea,
    Sibiu,
    Timisoara,
    Urziceni,
    Vaslui,
    Zerind,
}

impl RomaniaCity {
    pub fn name(self) -> &'static str {
        match self {
            RomaniaCity::Arad => "Arad",
            RomaniaCity::Bucharest => "Bucharest",
            RomaniaCity::Craiova => "Craiova",
            RomaniaCity::Dobreta => "Dobreta",
            RomaniaCity::Eforie => "Eforie",
            RomaniaCity::Fagaras => "Fagaras",
            RomaniaCity::Giurgiu => "Giurgiu",
            RomaniaCity::Hirsova => "Hirsova",
            RomaniaCity::Iasi => "Iasi",
            RomaniaCity::Lugoj => "Lugoj",
            RomaniaCity::Mehadia => "Mehadia",
            RomaniaCity::Neamt => "Neamt",
            RomaniaCity::Oradea => "Oradea",
            RomaniaCity::Pitesti => "Pitesti",
            RomaniaCity::RimnicuVilcea => "Rimnicu Vilcea",
            RomaniaCity::Sibiu => "Sibiu",
            RomaniaCity::Timisoara => "Timisoara",
            RomaniaCity::Urziceni => "Urziceni",
            RomaniaCity::Vaslui => "Vaslui",
            RomaniaCity::Zerind => "Zerind",
        }
    }
}

// https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
fn romania_edges() -> Vec<(RomaniaCity, RomaniaCity, Distance)> {
    use RomaniaCity::*;

    vec![
        (Oradea, Zerind, 71.0),
        (Oradea, Sibiu, 151.0),
        (Zerind, Arad, 75.0),
        (Arad, Sibiu, 140.0),
        (Arad, Timisoara, 118.0),
        (Timisoara, Lugoj, 111.0),
        (Lugoj, Mehadia, 70.0),
        (Mehadia, Dobreta, 75.0),
        (Dobreta, Craiova, 120.0),
        (Craiova, RimnicuVilcea, 146.0),
        (Craiova, Pitesti, 138.0),
        (RimnicuVilcea, Pitesti, 97.0),
        (RimnicuVilcea, Sibiu, 80.0),
        (Sibiu, Fagaras, 99.0),
        (Fagaras, Bucharest, 211.0),
        (Pitesti, Bucharest, 101.0),
        (Bucharest, Giurgiu, 90.0),
        (Bucharest, Urziceni, 85.0),
        (Urziceni, Hirsova, 98.0),
        (Hirsova, Eforie, 86.0),
        (Urziceni, Vaslui, 142.0),
        (Vaslui, Iasi, 92.0),
        (Iasi, Neamt, 87.0),
    ]
}

pub fn create_romania_graph() -> RouteGraph {
    let mut graph = RouteGraph::default();

    for (from, to, distance) in romania_edges() {
        graph
            .add_edge(from.name(), to.name(), distance)
            .expect("romania edges are valid");
    }

    graph
}
