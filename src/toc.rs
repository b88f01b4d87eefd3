use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::anchor::anchor;
use crate::error::MdTidyError;

/// ATX heading: 1-6 leading `#`, whitespace, then the title text.
/// Seven or more hashes never match.
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)").expect("heading pattern"));

/// How a TOC update ended. Only unanticipated I/O surfaces as an error;
/// these are all normal endings the caller just reports.
pub enum TocOutcome {
    /// Target file does not exist — nothing read, nothing written.
    FileMissing,
    /// No line contains `[TOC]` — file left byte-for-byte unchanged.
    MarkerMissing,
    /// File rewritten with a fresh TOC block of `headings` entries.
    Updated { headings: usize },
}

/// Regenerate the `[TOC]` block of one markdown file in place.
///
/// Two passes over the terminator-preserving line sequence: first collect
/// one entry per heading in document order, then splice the entry list in
/// after the marker, dropping whatever stale block followed it.
pub fn update(path: &Path) -> Result<TocOutcome, MdTidyError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(TocOutcome::FileMissing),
        Err(e) => {
            return Err(MdTidyError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let entries = collect_entries(&lines);

    match splice(&lines, &entries) {
        Some(rewritten) => {
            fs::write(path, rewritten).map_err(|e| MdTidyError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(TocOutcome::Updated {
                headings: entries.len(),
            })
        }
        None => Ok(TocOutcome::MarkerMissing),
    }
}

/// One `- [text](#anchor)` line per heading, indented two spaces per
/// level past the first. Document order is preserved.
fn collect_entries(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| {
            HEADING.captures(line).map(|cap| {
                let level = cap[1].len();
                let text = cap[2].trim();
                let indent = "  ".repeat(level - 1);
                format!("{indent}- [{text}](#{})", anchor(text))
            })
        })
        .collect()
}

/// Two-state splice over the original lines: copying until a line
/// contains the `[TOC]` marker, then the marker line plus the fresh
/// block are emitted and stale lines are skipped until the next line
/// starting with a heading `#` or a `---` rule.
///
/// Returns `None` when no marker was found — the caller must not write.
fn splice(lines: &[&str], entries: &[String]) -> Option<String> {
    let mut out = String::new();
    let mut skipping = false;
    let mut found = false;

    for line in lines {
        if line.contains("[TOC]") {
            out.push_str(line);
            out.push('\n');
            out.push_str(&entries.join("\n"));
            out.push_str("\n\n");
            skipping = true;
            found = true;
            continue;
        }

        if skipping {
            // Entry lines start with `-` or spaces, so a fresh block never
            // re-triggers the boundary; only real structure does.
            if line.starts_with('#') || line.starts_with("---") {
                skipping = false;
                out.push_str(line);
            }
            continue;
        }

        out.push_str(line);
    }

    found.then_some(out)
}
