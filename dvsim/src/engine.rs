use std::collections::BTreeMap;

use cfg_if::cfg_if;
use educe::Educe;
use log::{debug, info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::network::Network;
use crate::concepts::packet::Advertisement;
use crate::framework::{RoutingSystem, SimulationConfig, UpdateScheme};
use crate::router::Router;
use crate::table::{RoutingTables, Snapshot};

/// How a run ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// A full round produced no update. `iteration` is the number of rounds that did.
    Converged { iteration: usize },
    /// `max_iterations` rounds ran and the last one still updated a table
    IterationLimitReached { iterations: usize },
}

impl Status {
    pub fn is_converged(&self) -> bool {
        matches!(self, Status::Converged { .. })
    }

    pub fn iterations(&self) -> usize {
        match self {
            Status::Converged { iteration } => *iteration,
            Status::IterationLimitReached { iterations } => *iterations,
        }
    }
}

/// Outcome of [`Engine::run`]
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Simulation<T: RoutingSystem + ?Sized> {
    pub status: Status,
    pub tables: RoutingTables<T>,
    /// the initial tables followed by one snapshot per updating round, empty unless `record_trace` is set
    pub trace: Vec<Snapshot<T>>,
}

/// Runs Bellman-Ford relaxation rounds over every node of a network until nothing improves
pub struct Engine<T: RoutingSystem + ?Sized> {
    network: Network<T>,
    config: SimulationConfig,
    tables: RoutingTables<T>,
    iteration: usize,
}

type Advertisements<T> = BTreeMap<<T as RoutingSystem>::NodeAddress, Advertisement<T>>;

/// Hands `router` the advertisement of each of its neighbours, then relaxes its table
fn receive_and_update<T: RoutingSystem>(router: &mut Router<T>, advertisements: &Advertisements<T>) -> usize {
    let sources: Vec<T::NodeAddress> = router.links.keys().cloned().collect();
    for source in sources {
        if let Some(ad) = advertisements.get(&source) {
            router.handle_advertisement(ad.clone());
        }
    }
    router.update_routes()
}

cfg_if! {
    if #[cfg(feature = "parallel")] {
        use rayon::prelude::*;

        /// Each router is written by exactly one task, and only reads advertisements taken before the round
        fn update_all<T: RoutingSystem>(
            routers: &mut BTreeMap<T::NodeAddress, Router<T>>,
            advertisements: &Advertisements<T>,
        ) -> usize {
            routers
                .par_iter_mut()
                .map(|(_, router)| receive_and_update(router, advertisements))
                .sum()
        }
    } else {
        fn update_all<T: RoutingSystem>(
            routers: &mut BTreeMap<T::NodeAddress, Router<T>>,
            advertisements: &Advertisements<T>,
        ) -> usize {
            routers
                .values_mut()
                .map(|router| receive_and_update(router, advertisements))
                .sum()
        }
    }
}

impl<T: RoutingSystem> Engine<T> {
    pub fn new(network: Network<T>, config: SimulationConfig) -> Self {
        let tables = RoutingTables::initialize(&network);
        Self {
            network,
            config,
            tables,
            iteration: 0,
        }
    }

    /// Creates an engine with the parameters of the routing system, see [`RoutingSystem::config`]
    pub fn with_defaults(network: Network<T>) -> Self {
        Self::new(network, T::config())
    }

    pub fn network(&self) -> &Network<T> {
        &self.network
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn tables(&self) -> &RoutingTables<T> {
        &self.tables
    }

    /// Number of rounds so far that updated at least one entry
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Runs one full round over every node, returns the number of entries that improved.
    pub fn step(&mut self) -> usize {
        let updated = match self.config.scheme {
            UpdateScheme::Synchronous => self.step_synchronous(),
            UpdateScheme::InPlace => self.step_in_place(),
        };
        if updated > 0 {
            self.iteration += 1;
        }
        debug!("round {} updated {} route(s)", self.iteration, updated);
        updated
    }

    fn step_synchronous(&mut self) -> usize {
        // every advertisement is taken before any table changes
        let advertisements: Advertisements<T> = self
            .tables
            .routers()
            .map(|router| (router.address.clone(), router.advertise()))
            .collect();
        update_all(self.tables.routers_mut(), &advertisements)
    }

    fn step_in_place(&mut self) -> usize {
        let routers = self.tables.routers_mut();
        let addrs: Vec<T::NodeAddress> = routers.keys().cloned().collect();
        let mut updated = 0;
        for addr in addrs {
            let Some(router) = routers.get(&addr) else { continue };
            // neighbours earlier in the order have already been updated this round
            let advertisements: Advertisements<T> = router
                .links
                .keys()
                .filter_map(|neigh| routers.get(neigh))
                .map(|neigh| (neigh.address.clone(), neigh.advertise()))
                .collect();
            if let Some(router) = routers.get_mut(&addr) {
                updated += receive_and_update(router, &advertisements);
            }
        }
        updated
    }

    /// Relaxes until a round changes nothing or `max_iterations` rounds have run
    pub fn run(mut self) -> Simulation<T> {
        let mut trace = Vec::new();
        if self.config.record_trace {
            trace.push(self.tables.snapshot(self.iteration));
        }
        let mut rounds = 0;
        let status = loop {
            if rounds >= self.config.max_iterations {
                warn!(
                    "Iteration limit of {} reached before convergence, max_iterations may be below the network diameter",
                    self.config.max_iterations
                );
                break Status::IterationLimitReached {
                    iterations: self.iteration,
                };
            }
            rounds += 1;
            if self.step() == 0 {
                info!(
                    "Converged after {} iteration(s) over {} node(s)",
                    self.iteration,
                    self.network.len()
                );
                break Status::Converged {
                    iteration: self.iteration,
                };
            }
            if self.config.record_trace {
                trace.push(self.tables.snapshot(self.iteration));
            }
        };
        Simulation {
            status,
            tables: self.tables,
            trace,
        }
    }
}

/// Builds an [`Engine`] for `network` and runs it to completion
pub fn simulate<T: RoutingSystem>(network: Network<T>, config: SimulationConfig) -> Simulation<T> {
    Engine::new(network, config).run()
}
