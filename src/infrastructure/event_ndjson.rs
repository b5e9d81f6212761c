use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::AssignmentLoaded { vertices, shifted } => {
            json!({"type":"assignment_loaded","vertices":vertices,"shifted":shifted})
        }
        AppEvent::EdgelistLoaded { edges, shifted } => {
            json!({"type":"edgelist_loaded","edges":edges,"shifted":shifted})
        }
        AppEvent::NumberingAnomaly { source, min_vertex } => {
            json!({"type":"numbering_anomaly","source":source,"min_vertex":min_vertex})
        }
        AppEvent::SccComputed {
            nodes,
            edges,
            components,
            cyclic_components,
        } => {
            json!({"type":"scc_computed","nodes":nodes,"edges":edges,"components":components,"cyclic_components":cyclic_components})
        }
        AppEvent::MismatchFound { mismatch } => {
            json!({"type":"mismatch_found","mismatch":mismatch})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

/// Drains events as NDJSON onto stderr; stdout carries the human report.
pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);
            eprintln!("{line}");
        }
    })
}
