use clap::ValueEnum;
use dvsim::concepts::network::Network;
use dvsim::feedback::NetworkError;

use crate::routing::CliSystem;

/// Reference networks, all over the nodes A to D unless noted
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Preset {
    Random,
    Linear,
    Star,
    /// the same shape as `random`, with uneven weights
    Unequal,
    Full,
    /// A-B and C-D, with no link between the two halves
    Disconnected,
    Circular,
    /// a lone node A
    Single,
}

impl Preset {
    fn rows(self) -> Vec<(&'static str, Vec<(&'static str, i64)>)> {
        match self {
            Preset::Random => vec![
                ("A", vec![("B", 1), ("C", 4)]),
                ("B", vec![("A", 1), ("C", 2), ("D", 6)]),
                ("C", vec![("A", 4), ("B", 2), ("D", 3)]),
                ("D", vec![("B", 6), ("C", 3)]),
            ],
            Preset::Linear => vec![
                ("A", vec![("B", 1)]),
                ("B", vec![("A", 1), ("C", 2)]),
                ("C", vec![("B", 2), ("D", 3)]),
                ("D", vec![("C", 3)]),
            ],
            Preset::Star => vec![
                ("A", vec![("B", 2), ("C", 5), ("D", 1)]),
                ("B", vec![("A", 2)]),
                ("C", vec![("A", 5)]),
                ("D", vec![("A", 1)]),
            ],
            Preset::Unequal => vec![
                ("A", vec![("B", 3), ("C", 10)]),
                ("B", vec![("A", 3), ("C", 1), ("D", 8)]),
                ("C", vec![("A", 10), ("B", 1), ("D", 2)]),
                ("D", vec![("B", 8), ("C", 2)]),
            ],
            Preset::Full => vec![
                ("A", vec![("B", 2), ("C", 3), ("D", 7)]),
                ("B", vec![("A", 2), ("C", 1), ("D", 4)]),
                ("C", vec![("A", 3), ("B", 1), ("D", 2)]),
                ("D", vec![("A", 7), ("B", 4), ("C", 2)]),
            ],
            Preset::Disconnected => vec![
                ("A", vec![("B", 1)]),
                ("B", vec![("A", 1)]),
                ("C", vec![("D", 2)]),
                ("D", vec![("C", 2)]),
            ],
            Preset::Circular => vec![
                ("A", vec![("B", 2), ("D", 4)]),
                ("B", vec![("A", 2), ("C", 3)]),
                ("C", vec![("B", 3), ("D", 1)]),
                ("D", vec![("A", 4), ("C", 1)]),
            ],
            Preset::Single => vec![("A", vec![])],
        }
    }

    pub fn network(self) -> Result<Network<CliSystem>, NetworkError<CliSystem>> {
        Network::from_adjacency(self.rows().into_iter().map(|(node, row)| {
            (
                node.to_string(),
                row.into_iter().map(|(neigh, cost)| (neigh.to_string(), cost)),
            )
        }))
    }
}
