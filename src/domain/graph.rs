use crate::domain::model::VertexId;
use std::collections::HashMap;

/// Dense adjacency list; node `i` is an index, not a vertex ID.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub edges: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new(node_count: usize) -> Self {
        Self {
            edges: vec![Vec::new(); node_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|v| v.len()).sum()
    }
}

/// Directed graph keyed by vertex ID.
///
/// Only vertices that appear as an endpoint of some edge exist. Parallel
/// edges collapse into one; self-loops are kept.
#[derive(Debug, Clone, Default)]
pub struct VertexGraph {
    pub graph: Graph,
    /// `labels[i]` is the vertex ID of node `i`, ascending.
    pub labels: Vec<VertexId>,
}

impl VertexGraph {
    pub fn from_edges(edges: &[(VertexId, VertexId)]) -> Self {
        let mut labels: Vec<VertexId> = edges.iter().flat_map(|&(u, v)| [u, v]).collect();
        labels.sort_unstable();
        labels.dedup();

        let index: HashMap<VertexId, usize> =
            labels.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        let mut graph = Graph::new(labels.len());
        for &(u, v) in edges {
            graph.edges[index[&u]].push(index[&v]);
        }

        for outs in graph.edges.iter_mut() {
            outs.sort_unstable();
            outs.dedup();
        }

        Self { graph, labels }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[derive(Debug, Clone)]
pub struct SccResult {
    /// Component id of each node; ids are dense in `0..components.len()`.
    pub component_of: Vec<usize>,
    /// Each component's node indices, ascending.
    pub components: Vec<Vec<usize>>,
    /// True when the component contains an edge: two or more members, or a self-loop.
    pub cyclic_component: Vec<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_dedups_parallel_edges_and_keeps_self_loops() {
        let g = VertexGraph::from_edges(&[(1, 2), (1, 2), (3, 3), (2, 1)]);
        assert_eq!(g.labels, vec![1, 2, 3]);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.graph.edges[0], vec![1]);
        assert_eq!(g.graph.edges[2], vec![2]);
    }

    #[test]
    fn from_edges_only_contains_edge_endpoints() {
        let g = VertexGraph::from_edges(&[(10, 40)]);
        assert_eq!(g.labels, vec![10, 40]);
        assert_eq!(g.graph.edges[0], vec![1]);
        assert!(g.graph.edges[1].is_empty());
    }
}
