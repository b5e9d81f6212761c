use crate::domain::graph::VertexGraph;
use crate::domain::model::{ComponentMap, VertexId};
use crate::domain::traits::SccDetector;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct GroundTruth {
    pub parts: BTreeMap<VertexId, VertexId>,
    pub components: usize,
    pub cyclic_components: usize,
}

/// Ground-truth vertex -> representative, where the representative is the
/// smallest vertex ID of its strongly connected component.
pub fn true_parts(graph: &VertexGraph, scc: &dyn SccDetector) -> GroundTruth {
    let res = scc.compute_scc(&graph.graph);

    let mut reps = vec![VertexId::MAX; res.components.len()];
    for (i, &cid) in res.component_of.iter().enumerate() {
        reps[cid] = reps[cid].min(graph.labels[i]);
    }

    let parts = res
        .component_of
        .iter()
        .enumerate()
        .map(|(i, &cid)| (graph.labels[i], reps[cid]))
        .collect();

    GroundTruth {
        parts,
        components: res.components.len(),
        cyclic_components: res.cyclic_component.iter().filter(|&&b| b).count(),
    }
}

/// Inverts vertex -> representative into representative -> "v1 v2 ...",
/// members ascending.
pub fn build_comp_map_from_parts<I>(parts: I) -> ComponentMap
where
    I: IntoIterator<Item = (VertexId, VertexId)>,
{
    let mut groups: BTreeMap<VertexId, Vec<VertexId>> = BTreeMap::new();
    for (v, rep) in parts {
        groups.entry(rep).or_default().push(v);
    }

    groups
        .into_iter()
        .map(|(rep, mut members)| {
            members.sort_unstable();
            let joined = members
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            (rep, joined)
        })
        .collect()
}
