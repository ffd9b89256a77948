use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_with::serde_as;
use educe::Educe;

use crate::feedback::{NetworkError, ShapeError};
use crate::framework::RoutingSystem;
use crate::router::{Metric, INF};
use crate::util::metric_from_cost;

/// Nodes and directed, weighted links. Immutable once constructed.
///
/// Every constructor validates its input, so a `Network` always has a row for every node,
/// only finite non-negative costs, and no self links.
#[cfg_attr(feature = "serde", serde_as)]
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()), Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(bound = ""))]
pub struct Network<T: RoutingSystem + ?Sized> {
    /// node -> (neighbour -> link cost), finite links only
    #[cfg_attr(feature = "serde", serde_as(as = "Vec<(_, Vec<(_, _)>)>"))]
    links: BTreeMap<T::NodeAddress, BTreeMap<T::NodeAddress, Metric>>,
}

/// Raw network input, in either of the two accepted shapes
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = "", untagged))]
pub enum NetworkDescription<T: RoutingSystem + ?Sized> {
    /// node -> {neighbour: cost}, a missing neighbour means no link
    Adjacency {
        adjacency: BTreeMap<T::NodeAddress, BTreeMap<T::NodeAddress, i64>>,
    },
    /// square matrix of costs, `None` means no link, rows and columns follow `labels`
    Matrix {
        labels: Vec<T::NodeAddress>,
        matrix: Vec<Vec<Option<i64>>>,
    },
}

impl<T: RoutingSystem + ?Sized> Network<T> {
    /// Builds a network from an adjacency mapping.
    ///
    /// Every destination named in a row must have a row of its own, otherwise the network is not square.
    pub fn from_adjacency<R>(
        adjacency: impl IntoIterator<Item = (T::NodeAddress, R)>,
    ) -> Result<Self, NetworkError<T>>
    where
        R: IntoIterator<Item = (T::NodeAddress, i64)>,
    {
        let mut rows: BTreeMap<T::NodeAddress, Vec<(T::NodeAddress, i64)>> = BTreeMap::new();
        for (node, row) in adjacency {
            match rows.entry(node) {
                Entry::Occupied(entry) => {
                    return Err(ShapeError::DuplicateNode {
                        node: entry.key().clone(),
                    }
                    .into())
                }
                Entry::Vacant(entry) => {
                    entry.insert(row.into_iter().collect());
                }
            }
        }

        for (node, row) in &rows {
            for (dest, _) in row {
                if !rows.contains_key(dest) {
                    return Err(ShapeError::UnknownDestination {
                        node: node.clone(),
                        dest: dest.clone(),
                    }
                    .into());
                }
            }
        }

        let mut links = BTreeMap::new();
        for (node, row) in rows {
            let mut out = BTreeMap::new();
            for (dest, cost) in row {
                let metric = Self::check_cost(&node, &dest, cost)?;
                if dest == node {
                    continue;
                }
                if out.contains_key(&dest) {
                    return Err(ShapeError::DuplicateLink { from: node, to: dest }.into());
                }
                out.insert(dest, metric);
            }
            links.insert(node, out);
        }
        Ok(Self { links })
    }

    /// Builds a network from an adjacency matrix, where `matrix[i][j]` is the cost of `labels[i] -> labels[j]`.
    ///
    /// The diagonal is not stored, the cost of a node to itself is always 0.
    pub fn from_matrix(
        labels: Vec<T::NodeAddress>,
        matrix: Vec<Vec<Option<i64>>>,
    ) -> Result<Self, NetworkError<T>> {
        if labels.len() != matrix.len() {
            return Err(ShapeError::LabelCount {
                labels: labels.len(),
                rows: matrix.len(),
            }
            .into());
        }
        let mut links = BTreeMap::new();
        for label in &labels {
            if links.insert(label.clone(), BTreeMap::new()).is_some() {
                return Err(ShapeError::DuplicateNode { node: label.clone() }.into());
            }
        }
        for (label, row) in labels.iter().zip(&matrix) {
            if row.len() != labels.len() {
                return Err(ShapeError::RowLength {
                    node: label.clone(),
                    expected: labels.len(),
                    actual: row.len(),
                }
                .into());
            }
        }

        for (i, row) in matrix.into_iter().enumerate() {
            let node = &labels[i];
            for (j, cost) in row.into_iter().enumerate() {
                let Some(cost) = cost else { continue };
                let metric = Self::check_cost(node, &labels[j], cost)?;
                if i == j {
                    continue;
                }
                if let Some(out) = links.get_mut(node) {
                    out.insert(labels[j].clone(), metric);
                }
            }
        }
        Ok(Self { links })
    }

    /// Builds a network from undirected links `(a, b, cost)`, each usable in both directions.
    ///
    /// A link may be listed once, in either orientation.
    pub fn from_links(
        nodes: impl IntoIterator<Item = T::NodeAddress>,
        links: impl IntoIterator<Item = (T::NodeAddress, T::NodeAddress, i64)>,
    ) -> Result<Self, NetworkError<T>> {
        let mut adj: BTreeMap<T::NodeAddress, BTreeMap<T::NodeAddress, Metric>> = BTreeMap::new();
        for node in nodes {
            match adj.entry(node) {
                Entry::Occupied(entry) => {
                    return Err(ShapeError::DuplicateNode {
                        node: entry.key().clone(),
                    }
                    .into())
                }
                Entry::Vacant(entry) => {
                    entry.insert(BTreeMap::new());
                }
            }
        }
        for (a, b, cost) in links {
            for (node, dest) in [(&a, &b), (&b, &a)] {
                if !adj.contains_key(node) {
                    return Err(ShapeError::UnknownDestination {
                        node: dest.clone(),
                        dest: node.clone(),
                    }
                    .into());
                }
            }
            let metric = Self::check_cost(&a, &b, cost)?;
            if a == b {
                continue;
            }
            if adj.get(&a).is_some_and(|out| out.contains_key(&b)) {
                return Err(ShapeError::DuplicateLink { from: a, to: b }.into());
            }
            if let Some(out) = adj.get_mut(&a) {
                out.insert(b.clone(), metric);
            }
            if let Some(out) = adj.get_mut(&b) {
                out.insert(a, metric);
            }
        }
        Ok(Self { links: adj })
    }

    fn check_cost(from: &T::NodeAddress, to: &T::NodeAddress, cost: i64) -> Result<Metric, NetworkError<T>> {
        metric_from_cost(cost).ok_or_else(|| NetworkError::CostError {
            from: from.clone(),
            to: to.clone(),
            cost,
        })
    }

    /// All nodes, in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = &T::NodeAddress> {
        self.links.keys()
    }

    pub fn contains(&self, node: &T::NodeAddress) -> bool {
        self.links.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Direct links out of `node` as `(neighbour, cost)`, in ascending neighbour order.
    /// Never yields `node` itself, yields nothing for an unknown node.
    pub fn neighbours<'a>(&'a self, node: &T::NodeAddress) -> impl Iterator<Item = (&'a T::NodeAddress, Metric)> + 'a {
        self.links
            .get(node)
            .into_iter()
            .flat_map(|row| row.iter().map(|(addr, cost)| (addr, *cost)))
    }

    /// Cost of the direct link `from -> to`, 0 from a node to itself and INF if there is no link
    pub fn cost_of(&self, from: &T::NodeAddress, to: &T::NodeAddress) -> Metric {
        if from == to {
            return 0;
        }
        self.links
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(INF)
    }
}

impl<T: RoutingSystem + ?Sized> NetworkDescription<T> {
    /// Checks the shape and costs of the description, and builds the network if both are sound
    pub fn validate(self) -> Result<Network<T>, NetworkError<T>> {
        match self {
            NetworkDescription::Adjacency { adjacency } => Network::from_adjacency(adjacency),
            NetworkDescription::Matrix { labels, matrix } => Network::from_matrix(labels, matrix),
        }
    }
}

impl<T: RoutingSystem + ?Sized> TryFrom<NetworkDescription<T>> for Network<T> {
    type Error = NetworkError<T>;

    fn try_from(value: NetworkDescription<T>) -> Result<Self, Self::Error> {
        value.validate()
    }
}
