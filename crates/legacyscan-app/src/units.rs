//! Turn a directory of source files into scan units.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

use crate::scan::Unit;

/// Walk `root` and build one unit per file whose extension is in `extensions`
/// (case-insensitive, without the dot).
///
/// Units look like `{"pgm_name": "ZPROG", "inc_name": "src/zprog.abap", "type": "FILE",
/// "code": ...}` and come out sorted by relative path.
pub fn collect_units(root: &Utf8Path, extensions: &[String]) -> anyhow::Result<Vec<Unit>> {
    if !root.is_dir() {
        anyhow::bail!("{} is not a directory", root);
    }

    let mut paths: Vec<Utf8PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| pathbuf_to_utf8(e.path().to_path_buf()))
        .filter(|p| has_extension(p, extensions))
        .collect();
    // Stable order.
    paths.sort();

    let mut units = Vec::with_capacity(paths.len());
    for abs in paths {
        let bytes = std::fs::read(&abs).with_context(|| format!("read {}", abs))?;
        let code = String::from_utf8_lossy(&bytes).into_owned();
        let rel = abs
            .strip_prefix(root)
            .unwrap_or(&abs)
            .as_str()
            .replace('\\', "/");
        let pgm_name = abs.file_stem().unwrap_or_default().to_ascii_uppercase();
        debug!(path = %rel, bytes = bytes.len(), "collected unit");

        let mut unit = Unit::new();
        unit.insert("pgm_name".to_string(), Value::String(pgm_name));
        unit.insert("inc_name".to_string(), Value::String(rel));
        unit.insert("type".to_string(), Value::String("FILE".to_string()));
        unit.insert("code".to_string(), Value::String(code));
        units.push(unit);
    }

    Ok(units)
}

fn has_extension(path: &Utf8Path, extensions: &[String]) -> bool {
    path.extension()
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &[u8]) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    fn exts() -> Vec<String> {
        vec!["abap".to_string(), "txt".to_string()]
    }

    #[test]
    fn collects_matching_files_sorted_by_path() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("src/zb.abap"), b"SUBMIT rvkred03.");
        write_file(&root.join("src/nested/za.ABAP"), b"WRITE 'x'.");
        write_file(&root.join("notes.txt"), b"");
        write_file(&root.join("README.md"), b"# ignored");

        let units = collect_units(&root, &exts()).expect("collect");
        let names: Vec<_> = units
            .iter()
            .map(|u| u["inc_name"].as_str().unwrap_or(""))
            .collect();
        assert_eq!(names, vec!["notes.txt", "src/nested/za.ABAP", "src/zb.abap"]);
        assert_eq!(units[2]["pgm_name"], "ZB");
        assert_eq!(units[2]["type"], "FILE");
        assert_eq!(units[2]["code"], "SUBMIT rvkred03.");
    }

    #[test]
    fn invalid_utf8_is_read_lossily() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("zlatin.abap"), b"WRITE 'Pr\xfcfung'.");

        let units = collect_units(&root, &exts()).expect("collect");
        let code = units[0]["code"].as_str().unwrap_or("");
        assert!(code.starts_with("WRITE 'Pr"));
        assert!(code.contains('\u{FFFD}'));
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp).join("nope");
        let err = collect_units(&root, &exts()).unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
    }
}
