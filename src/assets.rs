use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::MdTidyError;

/// Image references anchored on a literal `assets/` path segment:
/// markdown `![alt](path/assets/name)` links and inline
/// `<img ... src="path/assets/name">` tags. One alternation, the
/// filename lands in whichever capture group fired.
static IMG_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"!?\[.*?\]\(.*?assets/(.*?)\)|<img.*?src=.*?assets/(.*?)""#)
        .expect("image reference pattern")
});

/// How an asset sweep ended.
pub enum CleanOutcome {
    /// Assets directory does not exist — nothing scanned, nothing deleted.
    DirMissing,
    /// Sweep ran: `checked` entries examined, `deleted` removed,
    /// `failures` are per-file deletion errors that did not stop the scan.
    Cleaned {
        checked: usize,
        deleted: Vec<String>,
        failures: Vec<(String, io::Error)>,
    },
}

/// Delete every regular file in `assets_dir` whose name no markdown file
/// directly under `root` references. Deletion failures are collected,
/// never fatal.
pub fn clean(root: &Path, assets_dir: &Path) -> Result<CleanOutcome, MdTidyError> {
    if !assets_dir.exists() {
        return Ok(CleanOutcome::DirMissing);
    }

    let referenced = referenced_images(root)?;

    let read_dir = fs::read_dir(assets_dir).map_err(|e| MdTidyError::ListDir {
        path: assets_dir.to_path_buf(),
        source: e,
    })?;
    let mut entries: Vec<_> = read_dir.filter_map(Result::ok).collect();
    entries.sort_by_key(fs::DirEntry::file_name);

    let checked = entries.len();
    let mut deleted = Vec::new();
    let mut failures = Vec::new();

    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        if referenced.contains(&name) {
            continue;
        }
        // Subdirectories and other non-files are left alone.
        if !entry.file_type().is_ok_and(|ft| ft.is_file()) {
            continue;
        }
        match fs::remove_file(entry.path()) {
            Ok(()) => deleted.push(name),
            Err(e) => failures.push((name, e)),
        }
    }

    Ok(CleanOutcome::Cleaned {
        checked,
        deleted,
        failures,
    })
}

/// Union of asset filenames referenced by the `*.md` files directly under
/// `root` (non-recursive). Case-sensitive exact strings.
fn referenced_images(root: &Path) -> Result<HashSet<String>, MdTidyError> {
    let read_dir = fs::read_dir(root).map_err(|e| MdTidyError::ListDir {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut referenced = HashSet::new();
    for entry in read_dir.filter_map(Result::ok) {
        let path = entry.path();
        let is_md = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == "md");
        if !is_md || !entry.file_type().is_ok_and(|ft| ft.is_file()) {
            continue;
        }

        let content = fs::read_to_string(&path).map_err(|e| MdTidyError::Read {
            path: path.clone(),
            source: e,
        })?;
        for cap in IMG_REF.captures_iter(&content) {
            if let Some(name) = cap.get(1).or_else(|| cap.get(2)) {
                referenced.insert(name.as_str().to_string());
            }
        }
    }
    Ok(referenced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write(path: PathBuf, content: &str) {
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_missing_dir_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = clean(dir.path(), &dir.path().join("assets")).unwrap();
        assert!(matches!(outcome, CleanOutcome::DirMissing));
    }

    #[test]
    fn test_unreferenced_file_deleted_referenced_kept() {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir(&assets).unwrap();
        write(assets.join("a.png"), "a");
        write(assets.join("b.png"), "b");
        write(dir.path().join("doc.md"), "intro\n![x](docs/assets/a.png)\n");

        let outcome = clean(dir.path(), &assets).unwrap();
        let CleanOutcome::Cleaned {
            checked, deleted, ..
        } = outcome
        else {
            panic!("expected a sweep");
        };
        assert_eq!(checked, 2);
        assert_eq!(deleted, vec!["b.png"]);
        assert!(assets.join("a.png").exists());
        assert!(!assets.join("b.png").exists());
    }

    #[test]
    fn test_img_tag_reference_counts() {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir(&assets).unwrap();
        write(assets.join("logo.svg"), "svg");
        write(
            dir.path().join("doc.md"),
            r#"<img width="200" src="./assets/logo.svg">"#,
        );

        clean(dir.path(), &assets).unwrap();
        assert!(assets.join("logo.svg").exists());
    }

    #[test]
    fn test_references_across_multiple_md_files() {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir(&assets).unwrap();
        write(assets.join("a.png"), "a");
        write(assets.join("b.png"), "b");
        write(dir.path().join("one.md"), "![](assets/a.png)");
        write(dir.path().join("two.md"), "![](assets/b.png)");

        let outcome = clean(dir.path(), &assets).unwrap();
        let CleanOutcome::Cleaned { deleted, .. } = outcome else {
            panic!("expected a sweep");
        };
        assert!(deleted.is_empty());
    }

    #[test]
    fn test_non_md_files_do_not_protect_assets() {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir(&assets).unwrap();
        write(assets.join("a.png"), "a");
        write(dir.path().join("notes.txt"), "![](assets/a.png)");

        let outcome = clean(dir.path(), &assets).unwrap();
        let CleanOutcome::Cleaned { deleted, .. } = outcome else {
            panic!("expected a sweep");
        };
        assert_eq!(deleted, vec!["a.png"]);
    }

    #[test]
    fn test_subdirectories_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir_all(assets.join("nested")).unwrap();

        let outcome = clean(dir.path(), &assets).unwrap();
        let CleanOutcome::Cleaned {
            checked, deleted, ..
        } = outcome
        else {
            panic!("expected a sweep");
        };
        assert_eq!(checked, 1);
        assert!(deleted.is_empty());
        assert!(assets.join("nested").exists());
    }

    #[test]
    fn test_reference_without_assets_segment_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir(&assets).unwrap();
        write(assets.join("a.png"), "a");
        write(dir.path().join("doc.md"), "![](images/a.png)");

        let outcome = clean(dir.path(), &assets).unwrap();
        let CleanOutcome::Cleaned { deleted, .. } = outcome else {
            panic!("expected a sweep");
        };
        assert_eq!(deleted, vec!["a.png"]);
    }

    #[test]
    fn test_plain_link_syntax_counts() {
        // The markdown arm tolerates a missing `!` — plain links into
        // assets/ protect the file too.
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir(&assets).unwrap();
        write(assets.join("manual.pdf"), "pdf");
        write(dir.path().join("doc.md"), "[download](assets/manual.pdf)");

        clean(dir.path(), &assets).unwrap();
        assert!(assets.join("manual.pdf").exists());
    }
}
