//! Plain-text readers for solver dumps and edge lists.

use crate::domain::model::{ComponentLabel, VertexId};
use anyhow::{Context, Result};
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{what} contains no data lines; minimum vertex id is undefined")]
    Empty { what: &'static str },

    #[error("line {line}: expected exactly two integers, got {content:?}")]
    Malformed { line: usize, content: String },

    #[error("vertex id {id} cannot be shifted to 1-based numbering without overflow")]
    IdOverflow { id: VertexId },
}

/// Solver dump in file order, singleton markers not yet resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAssignment {
    pub entries: Vec<(VertexId, ComponentLabel)>,
}

fn parse_pair(line: &str) -> Option<(VertexId, VertexId)> {
    let mut fields = line.split_whitespace();
    let a = fields.next()?.parse().ok()?;
    let b = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((a, b))
}

fn malformed(idx: usize, line: &str) -> InputError {
    InputError::Malformed {
        line: idx + 1,
        content: line.to_string(),
    }
}

/// Every line must be `<vertex> <component>`; blank lines are not tolerated.
pub fn parse_assignment(raw: &str) -> Result<RawAssignment, InputError> {
    let mut entries = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        let (vertex, component) = parse_pair(line).ok_or_else(|| malformed(idx, line))?;
        entries.push((vertex, ComponentLabel::from_raw(component)));
    }

    if entries.is_empty() {
        return Err(InputError::Empty {
            what: "assignment file",
        });
    }
    Ok(RawAssignment { entries })
}

/// Blank lines and lines starting with `%` are skipped.
pub fn parse_edgelist(raw: &str) -> Result<Vec<(VertexId, VertexId)>, InputError> {
    let mut edges = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with('%') {
            continue;
        }
        edges.push(parse_pair(line).ok_or_else(|| malformed(idx, line))?);
    }

    if edges.is_empty() {
        return Err(InputError::Empty {
            what: "edge list file",
        });
    }
    Ok(edges)
}

pub async fn read_assignment_file(path: &str) -> Result<RawAssignment> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("reading assignment file: {path}"))?;
    let parsed =
        parse_assignment(&raw).with_context(|| format!("parsing assignment file: {path}"))?;
    Ok(parsed)
}

pub async fn read_edgelist_file(path: &str) -> Result<Vec<(VertexId, VertexId)>> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("reading edge list file: {path}"))?;
    let parsed = parse_edgelist(&raw).with_context(|| format!("parsing edge list file: {path}"))?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_assignment_resolves_sentinel_lazily() {
        let parsed = parse_assignment("1 1\n2 -1\n3\t1\n").expect("parse");
        assert_eq!(
            parsed.entries,
            vec![
                (1, ComponentLabel::Representative(1)),
                (2, ComponentLabel::Singleton),
                (3, ComponentLabel::Representative(1)),
            ]
        );
    }

    #[test]
    fn parse_assignment_rejects_blank_and_extra_columns() {
        let err = parse_assignment("1 1\n\n2 2\n").unwrap_err();
        assert_eq!(
            err,
            InputError::Malformed {
                line: 2,
                content: String::new()
            }
        );

        let err = parse_assignment("1 1 1\n").unwrap_err();
        assert!(matches!(err, InputError::Malformed { line: 1, .. }));

        let err = parse_assignment("1 x\n").unwrap_err();
        assert!(matches!(err, InputError::Malformed { line: 1, .. }));
    }

    #[test]
    fn parse_assignment_empty_is_an_error() {
        assert!(matches!(
            parse_assignment("").unwrap_err(),
            InputError::Empty { .. }
        ));
    }

    #[test]
    fn parse_edgelist_skips_comments_and_blank_lines() {
        let raw = "% header\n%another\n\n1 2\n   \n2 1\r\n3 3\n";
        let edges = parse_edgelist(raw).expect("parse");
        assert_eq!(edges, vec![(1, 2), (2, 1), (3, 3)]);
    }

    #[test]
    fn parse_edgelist_reports_physical_line_number() {
        let err = parse_edgelist("% c\n1 2\n3\n").unwrap_err();
        assert_eq!(
            err,
            InputError::Malformed {
                line: 3,
                content: "3".to_string()
            }
        );
    }

    #[test]
    fn parse_edgelist_with_only_comments_is_empty() {
        assert!(matches!(
            parse_edgelist("% nothing here\n\n").unwrap_err(),
            InputError::Empty { .. }
        ));
    }

    #[tokio::test]
    async fn read_files_attach_path_context() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("dump.txt");
        std::fs::write(&path, "0 0\noops\n").expect("write");

        let err = read_assignment_file(path.to_str().unwrap())
            .await
            .unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("parsing assignment file"));
        assert!(chain.contains("line 2"));
        assert!(err.downcast_ref::<InputError>().is_some());

        let missing = dir.path().join("missing.txt");
        let err = read_edgelist_file(missing.to_str().unwrap())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("reading edge list file"));
    }
}
