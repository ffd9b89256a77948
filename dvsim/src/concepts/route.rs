use crate::framework::RoutingSystem;
use crate::router::{Metric, INF};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use educe::Educe;

/// One routing table entry: the best known metric to a destination and the neighbour to forward through
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()), Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Route<T: RoutingSystem + ?Sized> {
    /// the metric of the best path found so far, INF if the destination is unreachable
    pub metric: Metric,
    /// the next-hop address of this route, None for the self-route and for unreachable destinations
    pub next_hop: Option<T::NodeAddress>,
}

impl<T: RoutingSystem + ?Sized> Route<T> {
    pub fn self_route() -> Self {
        Self {
            metric: 0,
            next_hop: None,
        }
    }
    pub fn unreachable() -> Self {
        Self {
            metric: INF,
            next_hop: None,
        }
    }
    pub fn via(next_hop: T::NodeAddress, metric: Metric) -> Self {
        Self {
            metric,
            next_hop: Some(next_hop),
        }
    }
    pub fn is_reachable(&self) -> bool {
        self.metric != INF
    }
}
