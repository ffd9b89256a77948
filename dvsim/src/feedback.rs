use educe::Educe;
use thiserror::Error;
use crate::framework::RoutingSystem;

/// Rejection of a malformed network. Raised before any relaxation takes place, the run cannot proceed.
#[derive(Error)]
#[derive(Educe)]
#[educe(Debug(bound()), PartialEq(bound()))]
pub enum NetworkError<T: RoutingSystem + ?Sized> {
    /// The set of nodes is not the same across all rows of the network
    #[error("Network is not square: {0}")]
    ShapeError(ShapeError<T>),
    /// A link cost is negative, or above the largest link cost
    #[error("Link {from} -> {to} has invalid cost {cost}, expected a cost between 0 and {}", u32::MAX)]
    CostError {
        from: T::NodeAddress,
        to: T::NodeAddress,
        cost: i64,
    },
}

#[derive(Error)]
#[derive(Educe)]
#[educe(Debug(bound()), PartialEq(bound()))]
pub enum ShapeError<T: RoutingSystem + ?Sized> {
    /// A row names a destination that has no row of its own
    #[error("node {node} has an entry for {dest}, which is not a node of the network")]
    UnknownDestination {
        node: T::NodeAddress,
        dest: T::NodeAddress,
    },
    #[error("row of node {node} has {actual} entries, expected {expected}")]
    RowLength {
        node: T::NodeAddress,
        expected: usize,
        actual: usize,
    },
    #[error("{labels} node labels were given for {rows} matrix rows")]
    LabelCount { labels: usize, rows: usize },
    #[error("node {node} appears more than once")]
    DuplicateNode { node: T::NodeAddress },
    /// The same link is given a cost twice
    #[error("link {from} -> {to} is given more than once")]
    DuplicateLink {
        from: T::NodeAddress,
        to: T::NodeAddress,
    },
}

impl<T: RoutingSystem + ?Sized> From<ShapeError<T>> for NetworkError<T> {
    fn from(value: ShapeError<T>) -> Self {
        NetworkError::ShapeError(value)
    }
}
