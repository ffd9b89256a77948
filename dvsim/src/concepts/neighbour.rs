use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_with::serde_as;
use educe::Educe;

use crate::framework::RoutingSystem;
use crate::router::Metric;

#[cfg_attr(feature = "serde", serde_as)]
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Neighbour<T: RoutingSystem + ?Sized> {
    /// the routing network address
    pub addr: T::NodeAddress,
    /// the last distance vector this neighbour advertised (destination -> metric)
    #[cfg_attr(feature = "serde", serde_as(as = "Vec<(_, _)>"))]
    pub routes: BTreeMap<T::NodeAddress, Metric>,
    /// Direct link-cost to this neighbour. Lower is better, never INF
    pub link_cost: Metric,
}

impl<T: RoutingSystem + ?Sized> Neighbour<T> {
    pub fn new(addr: T::NodeAddress, link_cost: Metric) -> Self {
        Self {
            addr,
            routes: BTreeMap::new(),
            link_cost,
        }
    }
}
