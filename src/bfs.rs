use std::collections::{HashMap, VecDeque};

use crate::{
    adjacency::Adjacency,
    callback::{BfsCallback, NoopCallback},
};

/// Computes the shortest distance, in edges, from `start` to every node
/// reachable from it.
///
/// The returned map contains exactly the reachable nodes; `start` itself is
/// at distance 0. If `start` is not a key of `graph`, the map is empty.
#[must_use]
pub fn bfs_distances<Graph: Adjacency>(
    graph: &Graph,
    start: &Graph::Node,
) -> HashMap<Graph::Node, usize> {
    Bfs::new(graph, start.clone(), usize::MAX, NoopCallback).run()
}

pub(crate) struct Bfs<'a, Graph: Adjacency, Callback> {
    graph: &'a Graph,
    start: Graph::Node,
    max_depth: usize,
    callback: Callback,
}

impl<'a, Graph, Callback> Bfs<'a, Graph, Callback>
where
    Graph: Adjacency,
    Callback: BfsCallback<Graph::Node>,
{
    pub(crate) fn new(
        graph: &'a Graph,
        start: Graph::Node,
        max_depth: usize,
        callback: Callback,
    ) -> Self {
        Self {
            graph,
            start,
            max_depth,
            callback,
        }
    }

    /// Runs the BFS to completion and returns the distance map.
    ///
    /// Nodes are expanded one depth at a time, in first-in-first-out order
    /// within a depth, so the first time a node is discovered is along a
    /// shortest path.
    pub(crate) fn run(mut self) -> HashMap<Graph::Node, usize> {
        let mut distances = HashMap::new();

        if !self.graph.contains(&self.start) {
            tracing::info!("start node not in graph, nothing to visit");
            return distances;
        }

        tracing::info!("starting BFS");

        distances.insert(self.start.clone(), 0);
        self.callback.new_node(0, &self.start);

        let mut current = VecDeque::from([self.start]);
        let mut depth = 0;

        while !current.is_empty() && depth < self.max_depth {
            let mut next = VecDeque::new();

            while let Some(node) = current.pop_front() {
                for neighbor in self.graph.neighbors(&node) {
                    if !distances.contains_key(neighbor) {
                        distances.insert(neighbor.clone(), depth + 1);
                        self.callback.new_node(depth + 1, neighbor);
                        next.push_back(neighbor.clone());
                    }
                }
            }

            self.callback.end_of_depth(depth);

            let new = next.len();
            tracing::info!("depth {} new {new}", depth + 1);

            if new == 0 {
                tracing::info!("no new nodes, done");
                break;
            }

            current = next;
            depth += 1;
        }

        distances
    }
}
