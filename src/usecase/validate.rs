use crate::domain::graph::VertexGraph;
use crate::domain::model::{ComponentMap, Mismatch, MismatchKind, Numbering};
use crate::domain::traits::SccDetector;
use crate::infrastructure::text_loader::{read_assignment_file, read_edgelist_file};
use crate::usecase::event::AppEvent;
use crate::usecase::normalize::{normalize_assignment, normalize_edges};
use crate::usecase::partition::{build_comp_map_from_parts, true_parts};
use crate::usecase::report::write_verdict;
use crate::usecase::stats::ValidateStats;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::io::Write;
use tokio::sync::mpsc;

/// Report size cap. Pass/fail stays exact; only the listing is truncated.
pub const MISMATCH_LIMIT: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub mismatches: Vec<Mismatch>,
    pub stats: ValidateStats,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Walks the union of representative keys in ascending order and collects
/// at most `limit` disagreements. Keys where both sides agree are skipped.
pub fn compare_component_maps(
    truth: &ComponentMap,
    loaded: &ComponentMap,
    limit: usize,
) -> Vec<Mismatch> {
    let keys: BTreeSet<_> = truth.keys().chain(loaded.keys()).copied().collect();
    let mut diffs = Vec::new();

    for rep in keys {
        if diffs.len() >= limit {
            break;
        }
        let kind = match (truth.get(&rep), loaded.get(&rep)) {
            (Some(t), None) => MismatchKind::OnlyTrue { members: t.clone() },
            (None, Some(l)) => MismatchKind::OnlyLoaded { members: l.clone() },
            (Some(t), Some(l)) if t != l => MismatchKind::Differs {
                truth: t.clone(),
                loaded: l.clone(),
            },
            _ => continue,
        };
        diffs.push(Mismatch { rep, kind });
    }

    diffs
}

/// Full validation run: load, normalize, recompute SCCs, compare, report.
///
/// Human-readable progress goes to `out`; structured events go to `sink`.
pub async fn validate_scc<W: Write>(
    assignment_path: &str,
    edgelist_path: &str,
    scc: &dyn SccDetector,
    out: &mut W,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<ValidationReport> {
    let mut stats = ValidateStats::default();

    writeln!(out, "=== SCC validation ===")?;
    writeln!(out, "solver dump: {assignment_path}")?;
    writeln!(out, "edge list  : {edgelist_path}")?;
    writeln!(out)?;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "load_assignment".into(),
        },
    )
    .await;
    let raw = read_assignment_file(assignment_path).await?;
    let assignment = normalize_assignment(&raw)
        .with_context(|| format!("normalizing assignment file: {assignment_path}"))?;
    report_anomaly(out, &sink, "assignment", assignment.numbering).await?;
    stats.assignment_vertices = assignment.parts.len();
    stats.assignment_shifted = assignment.numbering.shifted();
    writeln!(
        out,
        "loaded assignment '{assignment_path}': {} vertices; {}",
        stats.assignment_vertices,
        assignment.numbering.describe()
    )?;
    emit(
        &sink,
        AppEvent::AssignmentLoaded {
            vertices: stats.assignment_vertices,
            shifted: stats.assignment_shifted,
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "load_assignment".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "load_edgelist".into(),
        },
    )
    .await;
    let raw_edges = read_edgelist_file(edgelist_path).await?;
    let edges = normalize_edges(raw_edges)
        .with_context(|| format!("normalizing edge list file: {edgelist_path}"))?;
    report_anomaly(out, &sink, "edgelist", edges.numbering).await?;
    let graph = VertexGraph::from_edges(&edges.edges);
    stats.graph_nodes = graph.node_count();
    stats.graph_edges = graph.edge_count();
    stats.edgelist_shifted = edges.numbering.shifted();
    writeln!(
        out,
        "loaded edge list '{edgelist_path}': {} nodes, {} edges; {}",
        stats.graph_nodes,
        stats.graph_edges,
        edges.numbering.describe()
    )?;
    emit(
        &sink,
        AppEvent::EdgelistLoaded {
            edges: edges.edges.len(),
            shifted: stats.edgelist_shifted,
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "load_edgelist".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "scc".into(),
        },
    )
    .await;
    writeln!(out, "computing true SCCs...")?;
    let truth = true_parts(&graph, scc);
    writeln!(out, "found {} true SCCs", truth.components)?;
    writeln!(out)?;
    emit(
        &sink,
        AppEvent::SccComputed {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            components: truth.components,
            cyclic_components: truth.cyclic_components,
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "scc".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "compare".into(),
        },
    )
    .await;
    writeln!(out, "building component maps...")?;
    let true_map = build_comp_map_from_parts(truth.parts);
    let loaded_map = build_comp_map_from_parts(assignment.parts);
    stats.true_components = true_map.len();
    stats.loaded_components = loaded_map.len();
    writeln!(out, "  true map size  : {} components", stats.true_components)?;
    writeln!(out, "  loaded map size: {} components", stats.loaded_components)?;
    writeln!(out)?;

    writeln!(out, "comparing components...")?;
    let mismatches = compare_component_maps(&true_map, &loaded_map, MISMATCH_LIMIT);
    for m in mismatches.iter() {
        emit(
            &sink,
            AppEvent::MismatchFound {
                mismatch: m.clone(),
            },
        )
        .await;
    }
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "compare".into(),
        },
    )
    .await;

    write_verdict(out, &mismatches)?;

    stats.mismatches_reported = mismatches.len();
    stats.passed = mismatches.is_empty();
    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;

    Ok(ValidationReport { mismatches, stats })
}

async fn report_anomaly<W: Write>(
    out: &mut W,
    sink: &Option<mpsc::Sender<AppEvent>>,
    source: &str,
    numbering: Numbering,
) -> Result<()> {
    if let Numbering::Unexpected { min } = numbering {
        writeln!(
            out,
            "warning: {source} min vertex id = {min}, expected 0 or 1; ids left unshifted"
        )?;
        emit(
            sink,
            AppEvent::NumberingAnomaly {
                source: source.to_string(),
                min_vertex: min,
            },
        )
        .await;
    }
    Ok(())
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
