use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Default archive location: the source's file name with its extension
/// replaced by `mht`, in the source's directory
pub fn mht_output_path(source: &Path) -> PathBuf {
    source.with_extension("mht")
}

/// Caller-supplied target when present, otherwise the default `.mht` path
pub fn resolve_output_path(source: &Path, target: Option<&Path>) -> PathBuf {
    match target {
        Some(target) => target.to_path_buf(),
        None => mht_output_path(source),
    }
}

/// Staging path for a rewritten copy of the document: `_temp` is inserted
/// between the file stem and the extension of `target` (or `source` when no
/// target is given)
///
/// Conversions never read or write this path; it is kept for callers that
/// stage a modified document before packing it.
pub fn temp_html_path(source: &Path, target: Option<&Path>) -> PathBuf {
    let base = target.unwrap_or(source);

    let mut file_name = OsString::new();
    if let Some(stem) = base.file_stem() {
        file_name.push(stem);
    }
    file_name.push("_temp");
    if let Some(extension) = base.extension() {
        file_name.push(".");
        file_name.push(extension);
    }

    base.with_file_name(file_name)
}

/// Base name used for `Content-Location` headers
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Directory that references are resolved against; the current directory
/// for a bare file name
pub fn base_directory_of(source: &Path) -> PathBuf {
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
