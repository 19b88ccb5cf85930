//! Search nodes and the arena that owns them for the duration of one search.
//!
//! A node never owns its parent. All nodes of a run live in a [`SearchTree`] and
//! refer to each other through [`NodeId`] indices, which is enough to walk back
//! from a goal node to the root when the solution is reconstructed.

use crate::error::Result;
use crate::problem::{Cost, Problem};

/// Index of a node inside its [`SearchTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A state together with how the search reached it.
#[derive(Clone, Debug)]
pub struct Node<S, A> {
    state: S,
    parent: Option<NodeId>,
    action: Option<A>,
    path_cost: Cost,
    depth: usize,
}

impl<S, A> Node<S, A> {
    /// Creates the root node: no parent, no action, depth 0, path cost 0.
    pub fn root(state: S) -> Self {
        Node {
            state,
            parent: None,
            action: None,
            path_cost: 0,
            depth: 0,
        }
    }

    /// Builds the child reached from `parent` (stored at `parent_id`) by `action`.
    ///
    /// This is the only place where a child's `path_cost` and `depth` are computed:
    /// `path_cost(child) = path_cost(parent) + step_cost(parent.state, action, child.state)`.
    ///
    /// # Errors
    /// Propagates the problem's error if `action` is not legal in the parent's state.
    pub fn child<P>(problem: &P, parent_id: NodeId, parent: &Node<S, A>, action: A) -> Result<Self>
    where
        P: Problem<State = S, Action = A>,
        S: Clone + Eq + std::hash::Hash + std::fmt::Debug,
        A: Clone + std::fmt::Debug,
    {
        let state = problem.result(&parent.state, &action)?;
        let step = problem.step_cost(&parent.state, &action, &state);
        Ok(Node {
            path_cost: parent.path_cost.saturating_add(step),
            depth: parent.depth + 1,
            parent: Some(parent_id),
            action: Some(action),
            state,
        })
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The action that produced this node; `None` for the root.
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn path_cost(&self) -> Cost {
        self.path_cost
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Arena owning every node generated during one search run.
#[derive(Debug)]
pub struct SearchTree<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A> Default for SearchTree<S, A> {
    fn default() -> Self {
        SearchTree { nodes: Vec::new() }
    }
}

impl<S, A> SearchTree<S, A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a root node for `state` and returns its id.
    pub fn insert_root(&mut self, state: S) -> NodeId {
        self.insert(Node::root(state))
    }

    /// Stores an already built node and returns its id.
    pub fn insert(&mut self, node: Node<S, A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Expands `action` from the node at `parent_id` and stores the child.
    ///
    /// # Panics
    /// Panics if `parent_id` was not issued by this tree.
    pub fn insert_child<P>(&mut self, problem: &P, parent_id: NodeId, action: A) -> Result<NodeId>
    where
        P: Problem<State = S, Action = A>,
        S: Clone + Eq + std::hash::Hash + std::fmt::Debug,
        A: Clone + std::fmt::Debug,
    {
        let child = Node::child(problem, parent_id, &self.nodes[parent_id.0], action)?;
        Ok(self.insert(child))
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this tree.
    pub fn get(&self, id: NodeId) -> &Node<S, A> {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Actions leading from the root to `id`, in order.
    pub fn solution_path(&self, id: NodeId) -> Vec<A>
    where
        A: Clone,
    {
        let mut actions = Vec::with_capacity(self.get(id).depth);
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            if let Some(action) = &node.action {
                actions.push(action.clone());
            }
            current = node.parent;
        }
        actions.reverse();
        actions
    }
}
