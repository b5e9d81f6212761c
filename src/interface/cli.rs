use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
use crate::usecase::collect::collect_timings;
use crate::usecase::event::AppEvent;
use crate::usecase::validate::validate_scc;
use anyhow::Result;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
    Usage,
}

impl Verdict {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Verdict::Passed => ExitCode::SUCCESS,
            Verdict::Failed | Verdict::Usage => ExitCode::from(1),
        }
    }
}

#[derive(Debug, Error)]
#[error("{reason}\n\n{help}", help = usage())]
pub struct UsageError {
    reason: String,
}

impl UsageError {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

pub async fn run() -> Result<Verdict> {
    let args: Vec<String> = env::args().collect();
    let stdout = io::stdout();
    run_with_args(&args, &mut stdout.lock()).await
}

pub async fn run_with_args<W: Write>(args: &[String], out: &mut W) -> Result<Verdict> {
    let cmd = match Cli::parse(args) {
        Ok(cmd) => cmd,
        Err(err) => {
            writeln!(out, "{err}")?;
            return Ok(Verdict::Usage);
        }
    };

    match cmd {
        Cli::Validate {
            assignment,
            edgelist,
            emit_events,
        } => {
            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };
            let sink = emit_events.then_some(tx);

            let report =
                validate_scc(&assignment, &edgelist, &KosarajuSccDetector, out, sink).await?;

            if let Some(handle) = printer {
                handle.await.ok();
            }

            let s = &report.stats;
            eprintln!(
                "summary: vertices={} nodes={} edges={} true_components={} loaded_components={} mismatches_reported={} passed={}",
                s.assignment_vertices,
                s.graph_nodes,
                s.graph_edges,
                s.true_components,
                s.loaded_components,
                s.mismatches_reported,
                s.passed
            );

            Ok(if report.passed() {
                Verdict::Passed
            } else {
                Verdict::Failed
            })
        }

        Cli::Collect { results } => {
            collect_timings(&results, out).await?;
            Ok(Verdict::Passed)
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Cli {
    Validate {
        assignment: String,
        edgelist: String,
        emit_events: bool,
    },
    Collect {
        results: PathBuf,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self, UsageError> {
        // Expected:
        // <bin> validate <assignment_file> <edgelist_file> [--emit-events]
        // <bin> collect [--results <dir>]
        match args.get(1).map(String::as_str) {
            Some("validate") => Self::parse_validate(&args[2..]),
            Some("collect") => Self::parse_collect(&args[2..]),
            Some("-h") | Some("--help") | None => Err(UsageError::new("no command given")),
            Some(other) => Err(UsageError::new(format!("unknown command: {other}"))),
        }
    }

    fn parse_validate(rest: &[String]) -> Result<Self, UsageError> {
        let mut positional: Vec<String> = Vec::new();
        let mut emit_events = false;

        for arg in rest {
            match arg.as_str() {
                "--emit-events" => emit_events = true,
                "-h" | "--help" => return Err(UsageError::new("help requested")),
                flag if flag.starts_with("--") => {
                    return Err(UsageError::new(format!("unknown arg: {flag}")))
                }
                _ => positional.push(arg.clone()),
            }
        }

        let [assignment, edgelist]: [String; 2] =
            positional.try_into().map_err(|p: Vec<String>| {
                UsageError::new(format!(
                    "validate expects exactly 2 positional arguments, got {}",
                    p.len()
                ))
            })?;

        Ok(Cli::Validate {
            assignment,
            edgelist,
            emit_events,
        })
    }

    fn parse_collect(rest: &[String]) -> Result<Self, UsageError> {
        let mut results = PathBuf::from("results");

        let mut i = 0;
        while i < rest.len() {
            match rest[i].as_str() {
                "--results" => {
                    i += 1;
                    results = rest
                        .get(i)
                        .map(PathBuf::from)
                        .ok_or_else(|| UsageError::new("missing value for --results"))?;
                }
                "-h" | "--help" => return Err(UsageError::new("help requested")),
                other => return Err(UsageError::new(format!("unknown arg: {other}"))),
            }
            i += 1;
        }

        Ok(Cli::Collect { results })
    }
}

fn usage() -> &'static str {
    "Usage:\n  scc-bench-tools validate <assignment_file> <edgelist_file> [--emit-events]\n  scc-bench-tools collect [--results <dir>]\n\nvalidate:\n  Recomputes SCCs from the edge list and compares them with the solver's\n  vertex -> component dump. Exit code 0 when they match, 1 otherwise.\n  With --emit-events, NDJSON progress events are written to stderr.\n\ncollect:\n  Reads <dir>/<strong|weak>/<machine>/<code>_np<N>.log (default dir: results)\n  and prints the total-time scaling series as JSON."
}
