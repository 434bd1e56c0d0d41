//! Defines the `BfsCallback` trait.

/// Defines callback functions that run during the BFS.
pub trait BfsCallback<Node> {
    /// Called when a new node is visited.
    fn new_node(&mut self, depth: usize, node: &Node);

    /// Called when all nodes at a depth have been expanded.
    fn end_of_depth(&mut self, depth: usize);
}

/// A callback that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCallback;

impl<Node> BfsCallback<Node> for NoopCallback {
    fn new_node(&mut self, _depth: usize, _node: &Node) {}

    fn end_of_depth(&mut self, _depth: usize) {}
}
