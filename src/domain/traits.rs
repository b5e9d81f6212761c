use crate::domain::graph::{Graph, SccResult};

pub trait SccDetector {
    fn compute_scc(&self, graph: &Graph) -> SccResult;
}
