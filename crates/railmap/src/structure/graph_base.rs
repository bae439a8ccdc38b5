//! Low-level graph data structures and primitives.
//!
//! This module provides the foundational graph implementation behind
//! [`DiagramHierarchy`](super::DiagramHierarchy). It offers a lightweight
//! graph structure holding node handles by id and edges with incoming and
//! outgoing indices.
//!
//! Nodes are kept in insertion order (`IndexMap`), which the DOT exporter
//! relies on for deterministic output.
//!
//! This is an internal module; its types are not exposed publicly.

use std::collections::HashMap;

use indexmap::IndexMap;

use railmap_core::identifier::Id;

/// Index of an edge in the graph's edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct EdgeIndex(usize);

/// A directed edge slot storing the endpoint ids and an associated value.
#[derive(Debug)]
struct EdgeSlot<E>
where
    E: Copy + std::fmt::Debug,
{
    #[allow(dead_code)]
    source: Id,
    #[allow(dead_code)]
    target: Id,
    value: E,
}

/// Core graph data structure.
///
/// - Node storage by `Id` with generic node data type `N`, in insertion order
/// - Edge storage with generic edge data type `E`
/// - Incoming and outgoing edge indices per node
///
/// The graph is directed and allows self-loops and multiple edges between
/// nodes. Undirected diagram relations are stored as a single edge; direction
/// only matters for root detection.
#[derive(Debug)]
pub(super) struct GraphInternal<N, E>
where
    N: Copy + std::fmt::Debug,
    E: Copy + std::fmt::Debug,
{
    nodes: IndexMap<Id, N>,
    edges: Vec<EdgeSlot<E>>,
    income_edges: HashMap<Id, Vec<EdgeIndex>>,
    outgoing_edges: HashMap<Id, Vec<EdgeIndex>>,
}

impl<N, E> GraphInternal<N, E>
where
    N: Copy + std::fmt::Debug,
    E: Copy + std::fmt::Debug,
{
    /// Creates a new empty graph.
    pub(super) fn new() -> Self {
        GraphInternal {
            nodes: IndexMap::new(),
            edges: Vec::new(),
            income_edges: HashMap::new(),
            outgoing_edges: HashMap::new(),
        }
    }

    /// Returns an iterator over all node data, in insertion order.
    pub(super) fn nodes(&self) -> impl Iterator<Item = N> {
        self.nodes.values().copied()
    }

    /// Returns the total number of nodes in the graph.
    pub(super) fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    /// Checks if a node with the given ID exists in the graph.
    pub(super) fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns an iterator over all edge data, in insertion order.
    pub(super) fn edges(&self) -> impl Iterator<Item = E> {
        self.edges.iter().map(|edge| edge.value)
    }

    /// Returns the total number of edges in the graph.
    pub(super) fn edges_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over root nodes (nodes with no incoming edges).
    pub(super) fn roots(&self) -> impl Iterator<Item = N> {
        self.nodes.iter().filter_map(|(node_id, node)| {
            if !self.income_edges.contains_key(node_id) {
                Some(*node)
            } else {
                None
            }
        })
    }

    /// Adds a node to the graph with the given ID and data.
    ///
    /// Returns the previous data if a node with the same ID already existed;
    /// callers use this to detect duplicate declarations.
    pub(super) fn add_node(&mut self, id: Id, node: N) -> Option<N> {
        self.nodes.insert(id, node)
    }

    /// Adds an edge to the graph between two nodes.
    ///
    /// Updates both the edge storage and the incoming/outgoing edge indices.
    /// Both endpoints must already exist in the graph; the hierarchy checks
    /// this before insertion, so the assertion here only guards internal
    /// callers in debug builds.
    pub(super) fn add_edge(&mut self, source_id: Id, target_id: Id, edge: E) -> EdgeIndex {
        #[cfg(debug_assertions)]
        {
            assert!(
                self.nodes.contains_key(&source_id),
                "Adding edge: Source node {source_id} does not exist for {edge:?}",
            );
            assert!(
                self.nodes.contains_key(&target_id),
                "Adding edge: Target node {target_id} does not exist for {edge:?}",
            );
        }

        self.edges.push(EdgeSlot {
            source: source_id,
            target: target_id,
            value: edge,
        });

        let idx = EdgeIndex(self.edges.len() - 1);
        self.outgoing_edges.entry(source_id).or_default().push(idx);
        self.income_edges.entry(target_id).or_default().push(idx);
        idx
    }

    /// Returns the endpoint ids of the edge at the given index.
    ///
    /// # Panics
    /// Panics if the edge index does not exist in the graph.
    #[cfg(test)]
    pub(super) fn edge_endpoints(&self, idx: EdgeIndex) -> (Id, Id) {
        let edge = &self.edges[idx.0];
        (edge.source, edge.target)
    }
}
