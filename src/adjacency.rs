//! Defines the `Adjacency` trait.

use std::{
    collections::{BTreeMap, HashMap},
    hash::Hash,
};

/// Defines the graph that the BFS will traverse.
///
/// A graph is a mapping from node to the ordered sequence of its neighbors.
/// The BFS follows the adjacency lists exactly as given, in list order; it
/// never symmetrizes edges. A node that appears as a neighbor but not as a
/// key of the mapping has an empty adjacency list.
pub trait Adjacency {
    type Node: Clone + Eq + Hash;

    /// Whether `node` is a key of the mapping.
    fn contains(&self, node: &Self::Node) -> bool;

    /// The neighbors of `node`, in the order they are listed. Empty for
    /// non-key nodes.
    fn neighbors(&self, node: &Self::Node) -> &[Self::Node];
}

impl<N: Clone + Eq + Hash> Adjacency for HashMap<N, Vec<N>> {
    type Node = N;

    fn contains(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    fn neighbors(&self, node: &N) -> &[N] {
        self.get(node).map_or(&[], Vec::as_slice)
    }
}

impl<N: Clone + Eq + Ord + Hash> Adjacency for BTreeMap<N, Vec<N>> {
    type Node = N;

    fn contains(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    fn neighbors(&self, node: &N) -> &[N] {
        self.get(node).map_or(&[], Vec::as_slice)
    }
}

impl<A: Adjacency> Adjacency for &A {
    type Node = A::Node;

    fn contains(&self, node: &Self::Node) -> bool {
        (**self).contains(node)
    }

    fn neighbors(&self, node: &Self::Node) -> &[Self::Node] {
        (**self).neighbors(node)
    }
}
