use crate::domain::model::{Mismatch, VertexId};
use crate::usecase::stats::ValidateStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    AssignmentLoaded {
        vertices: usize,
        shifted: bool,
    },

    EdgelistLoaded {
        edges: usize,
        shifted: bool,
    },

    NumberingAnomaly {
        source: String,
        min_vertex: VertexId,
    },

    SccComputed {
        nodes: usize,
        edges: usize,
        components: usize,
        cyclic_components: usize,
    },

    MismatchFound {
        mismatch: Mismatch,
    },

    Finished {
        stats: ValidateStats,
    },
}
