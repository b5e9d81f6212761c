use crate::domain::model::{Mismatch, MismatchKind};
use std::io::{self, Write};

pub const SNIPPET_CHARS: usize = 100;
pub const ELLIPSIS: char = '…';

/// First `SNIPPET_CHARS` characters, with `…` appended when something was cut.
pub fn snippet(members: &str) -> String {
    let mut chars = members.chars();
    let mut out: String = chars.by_ref().take(SNIPPET_CHARS).collect();
    if chars.next().is_some() {
        out.push(ELLIPSIS);
    }
    out
}

pub fn write_verdict<W: Write>(out: &mut W, mismatches: &[Mismatch]) -> io::Result<()> {
    if mismatches.is_empty() {
        writeln!(out)?;
        writeln!(out, "Validation PASSED: all components match exactly.")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(
        out,
        "Validation FAILED: first {} mismatches:",
        mismatches.len()
    )?;
    for m in mismatches {
        writeln!(out)?;
        match &m.kind {
            MismatchKind::OnlyTrue { members } => {
                writeln!(out, "component rep={} only_true (missing from solver output)", m.rep)?;
                writeln!(out, "{}", snippet(members))?;
            }
            MismatchKind::OnlyLoaded { members } => {
                writeln!(out, "component rep={} only_loaded (absent from ground truth)", m.rep)?;
                writeln!(out, "{}", snippet(members))?;
            }
            MismatchKind::Differs { truth, loaded } => {
                writeln!(out, "component rep={} differs", m.rep)?;
                writeln!(out, "  true  : {}", snippet(truth))?;
                writeln!(out, "  loaded: {}", snippet(loaded))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_keeps_short_strings_intact() {
        assert_eq!(snippet("1 2 3"), "1 2 3");
        let exact = "9".repeat(SNIPPET_CHARS);
        assert_eq!(snippet(&exact), exact);
    }

    #[test]
    fn snippet_truncates_long_strings_with_marker() {
        let long = "1".repeat(SNIPPET_CHARS + 1);
        let cut = snippet(&long);
        assert_eq!(cut.chars().count(), SNIPPET_CHARS + 1);
        assert!(cut.ends_with(ELLIPSIS));
        assert!(cut.starts_with(&"1".repeat(SNIPPET_CHARS)));
    }

    #[test]
    fn write_verdict_pass_banner() {
        let mut buf = Vec::new();
        write_verdict(&mut buf, &[]).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("Validation PASSED"));
    }

    #[test]
    fn write_verdict_lists_each_kind() {
        let mismatches = vec![
            Mismatch {
                rep: 1,
                kind: MismatchKind::Differs {
                    truth: "1 2".to_string(),
                    loaded: "1".to_string(),
                },
            },
            Mismatch {
                rep: 2,
                kind: MismatchKind::OnlyLoaded {
                    members: "2".to_string(),
                },
            },
            Mismatch {
                rep: 4,
                kind: MismatchKind::OnlyTrue {
                    members: "4 5".to_string(),
                },
            },
        ];
        let mut buf = Vec::new();
        write_verdict(&mut buf, &mismatches).expect("write");
        let text = String::from_utf8(buf).expect("utf8");

        assert!(text.contains("Validation FAILED: first 3 mismatches"));
        assert!(text.contains("component rep=1 differs"));
        assert!(text.contains("  true  : 1 2\n"));
        assert!(text.contains("  loaded: 1\n"));
        assert!(text.contains("component rep=2 only_loaded"));
        assert!(text.contains("component rep=4 only_true"));
        assert!(text.contains("\n4 5\n"));
    }
}
