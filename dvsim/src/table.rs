use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use educe::Educe;

use crate::concepts::network::Network;
use crate::concepts::route::Route;
use crate::framework::RoutingSystem;
use crate::router::{Metric, Router, INF};

/// The routing tables of every node in a network, one [`Router`] per node
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct RoutingTables<T: RoutingSystem + ?Sized> {
    routers: BTreeMap<T::NodeAddress, Router<T>>,
}

/// An immutable copy of all routing tables, taken at the end of a round
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()), Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Snapshot<T: RoutingSystem + ?Sized> {
    /// 0 for the initial tables, otherwise the number of rounds that changed a table
    pub round: usize,
    /// node -> (destination -> route)
    pub tables: BTreeMap<T::NodeAddress, BTreeMap<T::NodeAddress, Route<T>>>,
}

impl<T: RoutingSystem + ?Sized> RoutingTables<T> {
    /// Creates the initial tables, a pure function of the network
    pub fn initialize(network: &Network<T>) -> Self {
        Self {
            routers: network
                .nodes()
                .map(|addr| (addr.clone(), Router::new(network, addr.clone())))
                .collect(),
        }
    }

    pub fn routers(&self) -> impl Iterator<Item = &Router<T>> {
        self.routers.values()
    }

    pub fn router(&self, node: &T::NodeAddress) -> Option<&Router<T>> {
        self.routers.get(node)
    }

    pub(crate) fn routers_mut(&mut self) -> &mut BTreeMap<T::NodeAddress, Router<T>> {
        &mut self.routers
    }

    pub fn table(&self, node: &T::NodeAddress) -> Option<&BTreeMap<T::NodeAddress, Route<T>>> {
        self.routers.get(node).map(|router| &router.routes)
    }

    pub fn route(&self, node: &T::NodeAddress, dest: &T::NodeAddress) -> Option<&Route<T>> {
        self.routers.get(node)?.route_to(dest)
    }

    /// INF when either node is unknown
    pub fn metric(&self, node: &T::NodeAddress, dest: &T::NodeAddress) -> Metric {
        self.route(node, dest).map_or(INF, |route| route.metric)
    }

    pub fn next_hop(&self, node: &T::NodeAddress, dest: &T::NodeAddress) -> Option<&T::NodeAddress> {
        self.route(node, dest)?.next_hop.as_ref()
    }

    pub fn snapshot(&self, round: usize) -> Snapshot<T> {
        Snapshot {
            round,
            tables: self
                .routers
                .iter()
                .map(|(addr, router)| (addr.clone(), router.routes.clone()))
                .collect(),
        }
    }

    /// Follows next hops from `src` to `dst`, returning every node on the way (both ends included).
    /// None if `dst` is unreachable from `src`, or the next hops do not lead there.
    pub fn path(&self, src: &T::NodeAddress, dst: &T::NodeAddress) -> Option<Vec<T::NodeAddress>> {
        let mut path = vec![src.clone()];
        let mut cur = src;
        while cur != dst {
            let hop = self.next_hop(cur, dst)?;
            if path.len() > self.routers.len() {
                return None; // forwarding loop
            }
            path.push(hop.clone());
            cur = hop;
        }
        if !self.routers.contains_key(dst) {
            return None;
        }
        Some(path)
    }
}

impl<T: RoutingSystem + ?Sized> Snapshot<T> {
    pub fn route(&self, node: &T::NodeAddress, dest: &T::NodeAddress) -> Option<&Route<T>> {
        self.tables.get(node)?.get(dest)
    }

    pub fn metric(&self, node: &T::NodeAddress, dest: &T::NodeAddress) -> Metric {
        self.route(node, dest).map_or(INF, |route| route.metric)
    }

    pub fn next_hop(&self, node: &T::NodeAddress, dest: &T::NodeAddress) -> Option<&T::NodeAddress> {
        self.route(node, dest)?.next_hop.as_ref()
    }
}
