use std::fmt::{Debug, Display};
use std::hash::Hash;

use cfg_if::cfg_if;
#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub trait RoutingSystem {
    /// Label of a node in the simulated network, MUST be unique within a network
    type NodeAddress: Ord + PartialOrd + AddressData + AddressKey + Debug + Display + Send + Sync;
    fn config() -> SimulationConfig {
        Default::default()
    }
}

cfg_if! {
    if #[cfg(feature = "serde")] {
        pub trait AddressData: Clone + Serialize + DeserializeOwned + Sized {}
        impl<T: Clone + Serialize + DeserializeOwned + Sized> AddressData for T {}
    } else {
        pub trait AddressData: Clone + Sized {}
        impl<T: Clone + Sized> AddressData for T {}
    }
}
pub trait AddressKey: Eq + PartialEq + Hash {}
impl<T: Eq + PartialEq + Hash> AddressKey for T {}

/// How updates made during a round become visible to other nodes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum UpdateScheme {
    /// Jacobi: every node relaxes against the tables its neighbours held at the end of the previous round
    #[default]
    Synchronous,
    /// Gauss-Seidel: nodes relax in ascending address order and see updates made earlier in the same round
    InPlace,
}

/// Simulation parameters, passed to the engine at call time
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SimulationConfig {
    /// upper bound on the number of relaxation rounds
    pub max_iterations: usize,
    pub scheme: UpdateScheme,
    /// keep a snapshot of every round that changed a table
    pub record_trace: bool,
}

impl SimulationConfig {
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;

    pub fn new() -> Self {
        Default::default()
    }
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
    pub fn with_scheme(mut self, scheme: UpdateScheme) -> Self {
        self.scheme = scheme;
        self
    }
    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            scheme: UpdateScheme::Synchronous,
            record_trace: true,
        }
    }
}
