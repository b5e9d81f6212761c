//! Normalizes solver dumps and edge lists to 1-based vertex IDs.

use crate::domain::model::{Numbering, VertexId};
use crate::infrastructure::text_loader::{InputError, RawAssignment};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAssignment {
    /// Vertex -> representative, singletons resolved to themselves.
    pub parts: BTreeMap<VertexId, VertexId>,
    pub numbering: Numbering,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEdges {
    pub edges: Vec<(VertexId, VertexId)>,
    pub numbering: Numbering,
}

pub fn normalize_assignment(raw: &RawAssignment) -> Result<NormalizedAssignment, InputError> {
    let min = raw
        .entries
        .iter()
        .map(|&(v, _)| v)
        .min()
        .ok_or(InputError::Empty {
            what: "assignment file",
        })?;
    let numbering = Numbering::detect(min);
    let off = numbering.offset();

    // Later lines for the same vertex overwrite earlier ones.
    let parts = raw
        .entries
        .iter()
        .map(|&(v, label)| Ok((shift(v, off)?, shift(label.resolve(v), off)?)))
        .collect::<Result<_, InputError>>()?;

    Ok(NormalizedAssignment { parts, numbering })
}

pub fn normalize_edges(
    edges: Vec<(VertexId, VertexId)>,
) -> Result<NormalizedEdges, InputError> {
    let min = edges
        .iter()
        .flat_map(|&(u, v)| [u, v])
        .min()
        .ok_or(InputError::Empty {
            what: "edge list file",
        })?;
    let numbering = Numbering::detect(min);
    let off = numbering.offset();

    let edges = if off == 0 {
        edges
    } else {
        edges
            .into_iter()
            .map(|(u, v)| Ok((shift(u, off)?, shift(v, off)?)))
            .collect::<Result<_, InputError>>()?
    };

    Ok(NormalizedEdges { edges, numbering })
}

fn shift(id: VertexId, off: VertexId) -> Result<VertexId, InputError> {
    id.checked_add(off).ok_or(InputError::IdOverflow { id })
}
