use dvsim::framework::RoutingSystem;

/// Nodes are labelled with plain strings on the command line
pub struct CliSystem;

impl RoutingSystem for CliSystem {
    type NodeAddress = String;
}
