//! Groups benchmark timings into per-machine scaling series.

use crate::infrastructure::timing_log::{scan_results_dir, TimingSample};
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimingPoint {
    pub workers: u32,
    pub seconds: f64,
}

/// machine -> scaling -> code -> points sorted by worker count.
pub type TimingTable = BTreeMap<String, BTreeMap<String, BTreeMap<String, Vec<TimingPoint>>>>;

pub fn group_samples(samples: Vec<TimingSample>) -> TimingTable {
    let mut table = TimingTable::new();
    for s in samples {
        table
            .entry(s.machine)
            .or_default()
            .entry(s.scaling)
            .or_default()
            .entry(s.code)
            .or_default()
            .push(TimingPoint {
                workers: s.workers,
                seconds: s.seconds,
            });
    }

    for series in table
        .values_mut()
        .flat_map(|by_scaling| by_scaling.values_mut())
        .flat_map(|by_code| by_code.values_mut())
    {
        series.sort_by_key(|p| p.workers);
    }
    table
}

/// Scans `results_root`, warns about logs without a timing line, and writes
/// the grouped table to `out` as pretty JSON.
pub async fn collect_timings<W: Write>(results_root: &Path, out: &mut W) -> Result<TimingTable> {
    let outcome = scan_results_dir(results_root).await?;
    for path in outcome.missing_time.iter() {
        eprintln!("warning: no total time in {}", path.display());
    }

    let table = group_samples(outcome.samples);
    serde_json::to_writer_pretty(&mut *out, &table)?;
    writeln!(out)?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample(
        machine: &str,
        scaling: &str,
        code: &str,
        workers: u32,
        seconds: f64,
    ) -> TimingSample {
        TimingSample {
            scaling: scaling.into(),
            machine: machine.into(),
            code: code.into(),
            workers,
            seconds,
        }
    }

    #[test]
    fn group_samples_sorts_by_worker_count() {
        let table = group_samples(vec![
            sample("m1", "strong", "scc", 8, 1.0),
            sample("m1", "strong", "scc", 2, 4.0),
            sample("m1", "weak", "scc", 4, 2.0),
            sample("m2", "strong", "bfs", 1, 9.0),
        ]);

        let strong = &table["m1"]["strong"]["scc"];
        assert_eq!(
            strong,
            &vec![
                TimingPoint {
                    workers: 2,
                    seconds: 4.0
                },
                TimingPoint {
                    workers: 8,
                    seconds: 1.0
                },
            ]
        );
        assert_eq!(table["m1"]["weak"]["scc"].len(), 1);
        assert_eq!(table["m2"]["strong"]["bfs"][0].seconds, 9.0);
    }

    #[tokio::test]
    async fn collect_timings_writes_json() {
        let dir = tempdir().expect("tempdir");
        let machine = dir.path().join("weak").join("node01");
        std::fs::create_dir_all(&machine).expect("mkdir");
        std::fs::write(machine.join("fwbw_np4.log"), "total time: 3.5\n").expect("write");
        std::fs::write(machine.join("fwbw_np1.log"), "total time: 7\n").expect("write");

        let mut out = Vec::new();
        let table = collect_timings(dir.path(), &mut out).await.expect("collect");
        assert_eq!(table["node01"]["weak"]["fwbw"].len(), 2);

        let v: serde_json::Value = serde_json::from_slice(&out).expect("json");
        assert_eq!(v["node01"]["weak"]["fwbw"][0]["workers"], 1);
        assert_eq!(v["node01"]["weak"]["fwbw"][1]["seconds"], 3.5);
    }

    #[tokio::test]
    async fn collect_timings_on_missing_root_is_empty() {
        let dir = tempdir().expect("tempdir");
        let mut out = Vec::new();
        let table = collect_timings(&dir.path().join("nope"), &mut out)
            .await
            .expect("collect");
        assert!(table.is_empty());
        assert_eq!(String::from_utf8(out).expect("utf8").trim(), "{}");
    }
}
