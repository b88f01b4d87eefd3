use std::fmt::Write;
use std::path::Path;

use crate::assets::CleanOutcome;
use crate::toc::TocOutcome;

/// One status line per TOC run. Pure string building — printing is the
/// caller's job.
pub fn toc_report(path: &Path, outcome: &TocOutcome) -> String {
    match outcome {
        TocOutcome::FileMissing => {
            format!("error: {} not found — skipping TOC update", path.display())
        }
        TocOutcome::MarkerMissing => format!(
            "note: no [TOC] marker in {} — table of contents left as is",
            path.display()
        ),
        TocOutcome::Updated { headings } => format!(
            "updated table of contents in {} ({headings} headings)",
            path.display()
        ),
    }
}

/// Multi-line sweep report: scan header, one line per deletion or
/// failure, final count.
pub fn clean_report(dir: &Path, outcome: &CleanOutcome) -> String {
    match outcome {
        CleanOutcome::DirMissing => {
            format!("note: {} not found — skipping asset cleanup", dir.display())
        }
        CleanOutcome::Cleaned {
            checked,
            deleted,
            failures,
        } => {
            let mut out = format!("checking {} ({checked} entries)...", dir.display());
            for name in deleted {
                let _ = write!(out, "\ndeleted unreferenced asset: {name}");
            }
            for (name, err) in failures {
                let _ = write!(out, "\nfailed to delete {name}: {err}");
            }
            let _ = write!(out, "\nasset cleanup done — {} file(s) deleted", deleted.len());
            out
        }
    }
}
