use crate::concepts::network::Network;
use crate::concepts::neighbour::Neighbour;
use crate::concepts::packet::Advertisement;
use crate::concepts::route::Route;
use crate::framework::RoutingSystem;
use crate::util::sum_inf;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_with::serde_as;
use std::collections::BTreeMap;
use educe::Educe;

pub type Metric = u64;
/// Sentinel metric for "no known path"
pub const INF: Metric = Metric::MAX;
/// Largest cost a single link may have. A path of fewer than 2^32 such links cannot reach INF,
/// so path metrics are always exact.
pub const MAX_LINK_COST: Metric = u32::MAX as Metric;

/// The distance-vector state of a single node
#[cfg_attr(feature = "serde", serde_as)]
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Router<T: RoutingSystem + ?Sized> {
    pub address: T::NodeAddress,
    /// direct neighbours, keyed by address
    #[cfg_attr(feature = "serde", serde_as(as = "Vec<(_, _)>"))]
    pub links: BTreeMap<T::NodeAddress, Neighbour<T>>,
    /// Destination, Route
    pub routes: BTreeMap<T::NodeAddress, Route<T>>,
}

impl<T: RoutingSystem + ?Sized> Router<T> {
    /// Creates the initial table of `address`: itself at 0, direct neighbours at the link cost, everything else INF
    pub fn new(network: &Network<T>, address: T::NodeAddress) -> Self {
        let links: BTreeMap<_, _> = network
            .neighbours(&address)
            .map(|(addr, cost)| (addr.clone(), Neighbour::new(addr.clone(), cost)))
            .collect();
        let routes = network
            .nodes()
            .map(|dest| {
                let route = if *dest == address {
                    Route::self_route()
                } else if let Some(neigh) = links.get(dest) {
                    Route::via(dest.clone(), neigh.link_cost)
                } else {
                    Route::unreachable()
                };
                (dest.clone(), route)
            })
            .collect();
        Self {
            address,
            links,
            routes,
        }
    }

    /// The distance vector this node currently advertises to its neighbours
    pub fn advertise(&self) -> Advertisement<T> {
        Advertisement {
            source: self.address.clone(),
            routes: self
                .routes
                .iter()
                .map(|(dest, route)| (dest.clone(), route.metric))
                .collect(),
        }
    }

    /// Stores the distance vector advertised by a neighbour, replacing the previous one
    pub fn handle_advertisement(&mut self, advertisement: Advertisement<T>) {
        if let Some(neigh) = self.links.get_mut(&advertisement.source) {
            neigh.routes = advertisement.routes;
        } else {
            debug!(
                "{} ignored an advertisement from {}, which is not a neighbour",
                self.address, advertisement.source
            );
        }
    }

    /// Recalculate routes based on the advertisements received so far.
    ///
    /// Neighbours are visited in ascending address order and a route is only replaced by a strictly
    /// cheaper one, so on a cost tie the existing route, or the lowest-ordered neighbour, is kept.
    /// Returns the number of entries that improved.
    pub fn update_routes(&mut self) -> usize {
        let mut updated = 0;
        for (addr, neigh) in &self.links {
            for (dest, neigh_metric) in &neigh.routes {
                if *dest == self.address {
                    continue; // the self-route is always 0
                }
                let metric = sum_inf(neigh.link_cost, *neigh_metric);
                if let Some(table_route) = self.routes.get_mut(dest) {
                    if metric < table_route.metric {
                        // we have a better route!
                        table_route.metric = metric;
                        table_route.next_hop = Some(addr.clone());
                        updated += 1;
                    }
                }
            }
        }
        updated
    }

    pub fn route_to(&self, dest: &T::NodeAddress) -> Option<&Route<T>> {
        self.routes.get(dest)
    }
}
