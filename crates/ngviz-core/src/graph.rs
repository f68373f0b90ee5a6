//! Graph<T> operations and conversion to petgraph

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::model::{Edge, Graph, Node};

impl<T> Graph<T> {
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node unless one with the same id exists. Returns whether it was inserted.
    pub fn add_node(&mut self, node: Node<T>) -> bool {
        if self.contains_node(&node.id) {
            tracing::debug!("skipping duplicate node {}", node.id);
            return false;
        }
        self.nodes.push(node);
        true
    }

    /// Add an edge. Endpoints are not checked here; see [`Graph::to_digraph`].
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Get a node by id.
    pub fn node(&self, id: &str) -> Option<&Node<T>> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Get a mutable node by id.
    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node<T>> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Get all outgoing edges from a node.
    pub fn edges_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.from == id)
    }

    /// Get all incoming edges to a node.
    pub fn edges_to<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.to == id)
    }

    /// Borrowing petgraph view for layout code.
    ///
    /// Nodes keep their insertion order. Edges referencing an unknown id are dropped.
    pub fn to_digraph(&self) -> DiGraph<&Node<T>, &Edge> {
        let mut digraph = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        let mut index: HashMap<&str, NodeIndex> = HashMap::with_capacity(self.nodes.len());

        for node in &self.nodes {
            index.insert(node.id.as_str(), digraph.add_node(node));
        }

        for edge in &self.edges {
            match (index.get(edge.from.as_str()), index.get(edge.to.as_str())) {
                (Some(&from), Some(&to)) => {
                    digraph.add_edge(from, to, edge);
                }
                _ => {
                    tracing::warn!("dropping dangling edge {} -> {}", edge.from, edge.to);
                }
            }
        }

        digraph
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
