use std::collections::HashMap;

use thiserror::Error;

use crate::{adjacency::Adjacency, bfs::Bfs, callback::BfsCallback};

#[derive(Debug, Error)]
pub enum BfsBuilderError {
    #[error("`graph` not set")]
    GraphNotSet,

    #[error("`start` not set")]
    StartNotSet,

    #[error("`max_depth` not set")]
    MaxDepthNotSet,

    #[error("`callback` not set")]
    CallbackNotSet,
}

pub struct BfsBuilder<'a, Graph: Adjacency, Callback> {
    graph: Option<&'a Graph>,
    start: Option<Graph::Node>,
    max_depth: Option<usize>,
    callback: Option<Callback>,
}

impl<'a, Graph, Callback> Default for BfsBuilder<'a, Graph, Callback>
where
    Graph: Adjacency,
    Callback: BfsCallback<Graph::Node>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, Graph, Callback> BfsBuilder<'a, Graph, Callback>
where
    Graph: Adjacency,
    Callback: BfsCallback<Graph::Node>,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: None,
            start: None,
            max_depth: None,
            callback: None,
        }
    }

    #[must_use]
    pub fn graph(mut self, graph: &'a Graph) -> Self {
        self.graph = Some(graph);
        self
    }

    #[must_use]
    pub fn start(mut self, start: Graph::Node) -> Self {
        self.start = Some(start);
        self
    }

    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub fn callback(mut self, callback: Callback) -> Self {
        self.callback = Some(callback);
        self
    }

    pub fn run_no_defaults(self) -> Result<HashMap<Graph::Node, usize>, BfsBuilderError> {
        let graph = self.graph.ok_or(BfsBuilderError::GraphNotSet)?;
        let start = self.start.ok_or(BfsBuilderError::StartNotSet)?;
        let max_depth = self.max_depth.ok_or(BfsBuilderError::MaxDepthNotSet)?;
        let callback = self.callback.ok_or(BfsBuilderError::CallbackNotSet)?;

        let bfs = Bfs::new(graph, start, max_depth, callback);

        Ok(bfs.run())
    }

    pub fn run(mut self) -> Result<HashMap<Graph::Node, usize>, BfsBuilderError> {
        self.max_depth.get_or_insert(usize::MAX);

        self.run_no_defaults()
    }
}
