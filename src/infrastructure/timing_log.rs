//! Benchmark log discovery: `<root>/<strong|weak>/<machine>/<code>_np<N>.log`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

pub const SCALING_KINDS: [&str; 2] = ["strong", "weak"];

#[derive(Debug, Clone, PartialEq)]
pub struct TimingSample {
    pub scaling: String,
    pub machine: String,
    pub code: String,
    pub workers: u32,
    pub seconds: f64,
}

#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub samples: Vec<TimingSample>,
    /// Logs with a well-formed name but no parsable `total time`.
    pub missing_time: Vec<PathBuf>,
}

/// Splits `<code>_np<N>.log` into `(code, N)`. The last `_np` wins.
pub fn parse_log_name(file_name: &str) -> Option<(String, u32)> {
    let stem = file_name.strip_suffix(".log")?;
    let (code, workers) = stem.rsplit_once("_np")?;
    if code.is_empty() || workers.is_empty() || !workers.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((code.to_string(), workers.parse().ok()?))
}

/// First `total time[,:]? <number>` measurement in the log.
///
/// A line is only considered when its lowercase form mentions `total time`,
/// but the match itself is case-sensitive.
pub fn parse_total_time(contents: &str) -> Option<f64> {
    contents
        .lines()
        .filter(|line| line.to_lowercase().contains("total time"))
        .find_map(match_total_time)
}

fn match_total_time(line: &str) -> Option<f64> {
    const NEEDLE: &str = "total time";
    line.match_indices(NEEDLE).find_map(|(at, _)| {
        let mut rest = &line[at + NEEDLE.len()..];
        if let Some(stripped) = rest.strip_prefix([',', ':']) {
            rest = stripped;
        }
        leading_number(rest.trim_start())
    })
}

/// Longest prefix shaped like `[0-9]*\.?[0-9]+`.
fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let frac_len = match bytes.get(int_len) {
        Some(b'.') => bytes[int_len + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count(),
        _ => 0,
    };

    let end = if frac_len > 0 {
        int_len + 1 + frac_len
    } else {
        int_len
    };
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}

async fn is_dir(path: &Path) -> bool {
    fs::metadata(path).await.map(|m| m.is_dir()).unwrap_or(false)
}

async fn subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("listing {}", dir.display()))?;
    while let Some(entry) = entries.next_entry().await? {
        // Follows symlinks; dangling links count as non-directories.
        let path = entry.path();
        if is_dir(&path).await {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

/// Walks the results tree. Missing scaling directories are skipped.
pub async fn scan_results_dir(root: &Path) -> Result<ScanOutcome> {
    let mut outcome = ScanOutcome::default();

    for scaling in SCALING_KINDS {
        let base = root.join(scaling);
        if !is_dir(&base).await {
            continue;
        }

        for machine_dir in subdirectories(&base).await? {
            let machine = machine_dir
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();

            let mut logs = Vec::new();
            let mut entries = fs::read_dir(&machine_dir)
                .await
                .with_context(|| format!("listing {}", machine_dir.display()))?;
            while let Some(entry) = entries.next_entry().await? {
                let name = entry.file_name().to_string_lossy().into_owned();
                if let Some((code, workers)) = parse_log_name(&name) {
                    logs.push((entry.path(), code, workers));
                }
            }
            logs.sort_by(|a, b| a.0.cmp(&b.0));

            for (path, code, workers) in logs {
                let contents = fs::read(&path)
                    .await
                    .with_context(|| format!("reading {}", path.display()))?;
                match parse_total_time(&String::from_utf8_lossy(&contents)) {
                    Some(seconds) => outcome.samples.push(TimingSample {
                        scaling: scaling.to_string(),
                        machine: machine.clone(),
                        code,
                        workers,
                        seconds,
                    }),
                    None => outcome.missing_time.push(path),
                }
            }
        }
    }

    Ok(outcome)
}
