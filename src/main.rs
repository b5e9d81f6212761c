//! Binary entrypoint.
//!
//! This crate is split into Clean Architecture layers:
//! - domain: pure, synchronous types and rules
//! - usecase: orchestration + progress events
//! - infrastructure: file readers, SCC detector, event printer
//! - interface: CLI wiring

use anyhow::Result;
use scc_bench_tools::interface::cli::Verdict;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    scc_bench_tools::interface::cli::run()
        .await
        .map(Verdict::exit_code)
}
