use serde::Serialize;
use std::collections::BTreeMap;

pub type VertexId = i64;

/// Representative ID -> space-joined, ascending member list.
pub type ComponentMap = BTreeMap<VertexId, String>;

/// Component column of a solver dump line, before singleton resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentLabel {
    /// Raw value `-1`: the vertex forms its own component.
    Singleton,
    Representative(VertexId),
}

impl ComponentLabel {
    pub const SINGLETON_SENTINEL: VertexId = -1;

    pub fn from_raw(raw: VertexId) -> Self {
        if raw == Self::SINGLETON_SENTINEL {
            ComponentLabel::Singleton
        } else {
            ComponentLabel::Representative(raw)
        }
    }

    pub fn resolve(self, vertex: VertexId) -> VertexId {
        match self {
            ComponentLabel::Singleton => vertex,
            ComponentLabel::Representative(rep) => rep,
        }
    }
}

/// Numbering convention inferred from the smallest vertex ID of an input.
///
/// Only a minimum of 0 is corrected (shifted to 1-based). Any minimum other
/// than 0 or 1 is reported as an anomaly and left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numbering {
    ZeroBased,
    OneBased,
    Unexpected { min: VertexId },
}

impl Numbering {
    pub fn detect(min: VertexId) -> Self {
        match min {
            0 => Numbering::ZeroBased,
            1 => Numbering::OneBased,
            other => Numbering::Unexpected { min: other },
        }
    }

    pub fn offset(self) -> VertexId {
        match self {
            Numbering::ZeroBased => 1,
            Numbering::OneBased | Numbering::Unexpected { .. } => 0,
        }
    }

    pub fn shifted(self) -> bool {
        self == Numbering::ZeroBased
    }

    pub fn describe(self) -> &'static str {
        if self.shifted() {
            "shifted 0->1"
        } else {
            "already 1-based"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MismatchKind {
    /// Ground truth has this representative, the solver does not.
    OnlyTrue { members: String },
    /// The solver has this representative, ground truth does not.
    OnlyLoaded { members: String },
    Differs { truth: String, loaded: String },
}

impl MismatchKind {
    pub fn label(&self) -> &'static str {
        match self {
            MismatchKind::OnlyTrue { .. } => "only_true",
            MismatchKind::OnlyLoaded { .. } => "only_loaded",
            MismatchKind::Differs { .. } => "differs",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub rep: VertexId,
    #[serde(flatten)]
    pub kind: MismatchKind,
}
