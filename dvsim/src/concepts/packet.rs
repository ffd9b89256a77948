use std::collections::BTreeMap;

use crate::framework::RoutingSystem;
use crate::router::Metric;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use educe::Educe;

/// A full distance vector sent by a node to each of its neighbours.
/// Delivery is simulated in memory, nothing is put on a wire.
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Advertisement<T: RoutingSystem + ?Sized> {
    /// the advertising node
    pub source: T::NodeAddress,
    /// destination -> metric, as currently known by the source
    pub routes: BTreeMap<T::NodeAddress, Metric>,
}
