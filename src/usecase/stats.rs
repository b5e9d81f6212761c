use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidateStats {
    pub assignment_vertices: usize,
    pub assignment_shifted: bool,
    pub graph_nodes: usize,
    pub graph_edges: usize,
    pub edgelist_shifted: bool,
    pub true_components: usize,
    pub loaded_components: usize,
    /// Capped sample, not the total number of mismatching representatives.
    pub mismatches_reported: usize,
    pub passed: bool,
}
