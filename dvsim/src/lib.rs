//! dvsim simulates Distance-Vector routing over a fixed network.
//!
//! Every node starts out knowing only its direct links. In each round, nodes advertise their
//! distance vectors to their neighbours and relax their own tables against them (Bellman-Ford),
//! until a full round changes nothing or the iteration cap is hit. The crate does no I/O.
//!
//! ```
//! use dvsim::concepts::network::Network;
//! use dvsim::engine::{simulate, Status};
//! use dvsim::framework::{RoutingSystem, SimulationConfig};
//!
//! struct Labels;
//! impl RoutingSystem for Labels {
//!     type NodeAddress = String;
//! }
//!
//! let nodes = ["A", "B", "C"].map(String::from);
//! let network = Network::<Labels>::from_links(
//!     nodes.clone(),
//!     [
//!         (nodes[0].clone(), nodes[1].clone(), 1),
//!         (nodes[1].clone(), nodes[2].clone(), 2),
//!     ],
//! )
//! .unwrap();
//!
//! let sim = simulate(network, SimulationConfig::default());
//! assert_eq!(sim.status, Status::Converged { iteration: 1 });
//! assert_eq!(sim.tables.metric(&nodes[0], &nodes[2]), 3);
//! assert_eq!(sim.tables.next_hop(&nodes[0], &nodes[2]), Some(&nodes[1]));
//! ```
//!
//! The network is static for the whole run. Link cost increases and removals are not modelled,
//! so the count-to-infinity behaviour of plain Distance-Vector (and split-horizon or
//! poison-reverse to counter it) is out of scope.

pub mod concepts;
pub mod engine;
pub mod feedback;
pub mod framework;
pub mod router;
pub mod table;
pub mod util;
