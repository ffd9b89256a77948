use dvsim::concepts::network::Network;
use dvsim::engine::Simulation;
use dvsim::feedback::NetworkError;
use dvsim::framework::RoutingSystem;
use dvsim::router::Metric;
use dvsim::table::{RoutingTables, Snapshot};

pub struct VirtualSystem;

impl RoutingSystem for VirtualSystem {
    type NodeAddress = String;
}

impl VirtualSystem {
    /// undirected links between string-labelled nodes
    pub fn create(nodes: &[&str], links: &[(&str, &str, i64)]) -> Result<Network<VirtualSystem>, NetworkError<VirtualSystem>> {
        Network::from_links(
            nodes.iter().map(|id| id.to_string()),
            links.iter().map(|(a, b, cost)| (a.to_string(), b.to_string(), *cost)),
        )
    }

    /// directed adjacency rows, `(node, [(neighbour, cost)])`
    pub fn adjacency(rows: &[(&str, Vec<(&str, i64)>)]) -> Result<Network<VirtualSystem>, NetworkError<VirtualSystem>> {
        Network::from_adjacency(rows.iter().map(|(node, row)| {
            (
                node.to_string(),
                row.iter().map(|(neigh, cost)| (neigh.to_string(), *cost)).collect::<Vec<_>>(),
            )
        }))
    }
}

/// Lookups by `&str`, panicking on unknown nodes
pub trait TableLookup {
    fn get_metric_to(&self, cur: &str, dst: &str) -> Metric;
    fn get_next_hop(&self, cur: &str, dst: &str) -> Option<String>;
}

impl TableLookup for RoutingTables<VirtualSystem> {
    fn get_metric_to(&self, cur: &str, dst: &str) -> Metric {
        self.route(&cur.to_string(), &dst.to_string())
            .unwrap_or_else(|| panic!("No route found from {cur} to {dst}"))
            .metric
    }

    fn get_next_hop(&self, cur: &str, dst: &str) -> Option<String> {
        self.route(&cur.to_string(), &dst.to_string())
            .unwrap_or_else(|| panic!("No route found from {cur} to {dst}"))
            .next_hop
            .clone()
    }
}

impl TableLookup for Snapshot<VirtualSystem> {
    fn get_metric_to(&self, cur: &str, dst: &str) -> Metric {
        self.route(&cur.to_string(), &dst.to_string())
            .unwrap_or_else(|| panic!("No route found from {cur} to {dst}"))
            .metric
    }

    fn get_next_hop(&self, cur: &str, dst: &str) -> Option<String> {
        self.route(&cur.to_string(), &dst.to_string())
            .unwrap_or_else(|| panic!("No route found from {cur} to {dst}"))
            .next_hop
            .clone()
    }
}

impl TableLookup for Simulation<VirtualSystem> {
    fn get_metric_to(&self, cur: &str, dst: &str) -> Metric {
        self.tables.get_metric_to(cur, dst)
    }

    fn get_next_hop(&self, cur: &str, dst: &str) -> Option<String> {
        self.tables.get_next_hop(cur, dst)
    }
}

pub fn hop(addr: &str) -> Option<String> {
    Some(addr.to_string())
}
