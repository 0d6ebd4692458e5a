//! Dependency graph construction and initialization-order computation.
//!
//! The graph is derived fresh from a system map on every query: nodes are
//! the registered components, edges point from dependent to dependency.
//! [`DependencyGraph::initialization_order`] turns the graph into the total
//! order the orchestrator drives.

use core::fmt;
use std::collections::VecDeque;
use std::sync::Arc;

use hashbrown::HashMap;
use lattice_component::SharedComponent;

use crate::error::SystemError;
use crate::system::SystemMap;

// ─────────────────────────────────────────────────────────────────────────────
// NodeId
// ─────────────────────────────────────────────────────────────────────────────

/// Index of a node within a [`DependencyGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new node ID.
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the raw index value.
    #[must_use]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node_{}", self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Node and Edge
// ─────────────────────────────────────────────────────────────────────────────

/// A vertex in the dependency graph: one named component from the map.
#[derive(Clone)]
pub struct Node {
    /// The component's name in the system map.
    name: String,
    /// The registered component.
    component: SharedComponent,
}

impl Node {
    /// Returns the component's name in the system map.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the shared handle to the component.
    #[must_use]
    pub fn component(&self) -> &SharedComponent {
        &self.component
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node").field("name", &self.name).finish()
    }
}

/// A directed edge from a dependent component to one of its dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// The node that declared the dependency.
    dependent: NodeId,
    /// The node being depended on.
    dependency: NodeId,
}

impl Edge {
    /// Returns the node that declared the dependency.
    #[must_use]
    pub fn dependent(&self) -> NodeId {
        self.dependent
    }

    /// Returns the node being depended on.
    #[must_use]
    pub fn dependency(&self) -> NodeId {
        self.dependency
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DependencyGraph
// ─────────────────────────────────────────────────────────────────────────────

/// A directed graph derived from a system map.
///
/// Each registered component becomes a node; each declared dependency name
/// becomes an edge from the declaring component to the component it resolves
/// to. The graph is never cached — it is rebuilt from the map on every
/// query, so it always reflects the map as given.
///
/// Duplicate dependency names become parallel edges and a self-reference
/// becomes a self-edge; neither is rejected here. Both flow into the general
/// order computation, where a self-edge surfaces as a one-component cycle.
pub struct DependencyGraph {
    /// All nodes, in discovery order (lexicographic by name).
    nodes: Vec<Node>,
    /// All dependent → dependency edges.
    edges: Vec<Edge>,
}

impl fmt::Debug for DependencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependencyGraph")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .finish()
    }
}

impl DependencyGraph {
    /// Builds the graph for a system map.
    ///
    /// Nodes are discovered in lexicographic name order, which fixes the
    /// tie-break for order computation: a given map always produces the same
    /// graph and the same order, across runs and processes.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::DependencyNotFound`] for the first dependency
    /// name that does not resolve to a map entry. The rest of the graph is
    /// not built.
    pub fn from_map(map: &SystemMap) -> Result<Self, SystemError> {
        let mut entries: Vec<_> = map
            .iter()
            .map(|(name, registration)| (name.as_str(), registration))
            .collect();
        entries.sort_unstable_by_key(|(name, _)| *name);

        let index_of: HashMap<&str, usize> = entries
            .iter()
            .enumerate()
            .map(|(index, (name, _))| (*name, index))
            .collect();

        let mut nodes = Vec::with_capacity(entries.len());
        let mut edges = Vec::new();

        for (index, (name, registration)) in entries.iter().enumerate() {
            nodes.push(Node {
                name: (*name).to_string(),
                component: Arc::clone(registration.component()),
            });

            for dependency in registration.dependencies() {
                let Some(&target) = index_of.get(dependency.as_str()) else {
                    return Err(SystemError::DependencyNotFound {
                        component: (*name).to_string(),
                        dependency: dependency.clone(),
                    });
                };
                edges.push(Edge {
                    dependent: NodeId(index),
                    dependency: NodeId(target),
                });
            }
        }

        Ok(Self { nodes, edges })
    }

    /// Returns all nodes, in discovery order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns all dependent → dependency edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Gets a node by ID.
    #[must_use]
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Computes the order in which components must be started.
    ///
    /// A topological sort over the dependent → dependency edges yields
    /// dependents before dependencies; the sequence is then reversed so that
    /// every component appears strictly after everything it depends on.
    /// Shutdown order is this same sequence read backwards — it is never
    /// derived separately.
    ///
    /// Components with no ordering constraint between them keep their
    /// discovery order.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::CircularDependency`] naming the components
    /// left unordered if the graph contains a cycle. No partial order is
    /// surfaced.
    pub fn initialization_order(&self) -> Result<Vec<Node>, SystemError> {
        let n = self.nodes.len();

        let mut in_degree = vec![0usize; n];
        let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); n];
        for edge in &self.edges {
            outgoing[edge.dependent.0].push(edge.dependency.0);
            in_degree[edge.dependency.0] += 1;
        }

        // Kahn's algorithm. Ties are taken in reverse discovery order here so
        // that the final, reversed sequence keeps discovery order.
        let mut queue: VecDeque<usize> = (0..n)
            .rev()
            .filter(|&index| in_degree[index] == 0)
            .collect();

        let mut order: Vec<usize> = Vec::with_capacity(n);
        while let Some(index) = queue.pop_front() {
            order.push(index);
            for &dependency in outgoing[index].iter().rev() {
                in_degree[dependency] -= 1;
                if in_degree[dependency] == 0 {
                    queue.push_back(dependency);
                }
            }
        }

        if order.len() != n {
            let members: Vec<String> = in_degree
                .iter()
                .enumerate()
                .filter(|&(_, &degree)| degree > 0)
                .map(|(index, _)| self.nodes[index].name.clone())
                .collect();
            return Err(SystemError::CircularDependency { members });
        }

        // The sort placed dependents first; the reversal is what makes this
        // an initialization order.
        order.reverse();
        Ok(order.into_iter().map(|index| self.nodes[index].clone()).collect())
    }
}
