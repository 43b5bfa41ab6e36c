//! Reference resolution
//!
//! A reference is the raw `src`/`href` value taken from the document. It is
//! treated as a file name pattern and looked up among the files sitting
//! directly in the document's directory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

/// Finds the file a reference points at
///
/// Returning `None` is a normal outcome: the reference is simply left out of
/// the archive.
pub trait ResourceResolver {
    fn resolve(&self, reference: &str, base_directory: &Path) -> Option<PathBuf>;
}

/// Resolves references against the regular files of a directory
///
/// `*` matches any run of characters and `?` exactly one; every other
/// character is literal. Candidates are visited in lexicographic order of
/// their file names and the first match wins.
#[derive(Debug, Clone, Default)]
pub struct DirectoryResolver {
    case_insensitive: bool,
}

impl DirectoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    fn matcher_for(&self, reference: &str) -> Option<GlobMatcher> {
        let pattern = reference_to_glob(reference);

        match GlobBuilder::new(&pattern)
            .literal_separator(true)
            .backslash_escape(true)
            .case_insensitive(self.case_insensitive)
            .build()
        {
            Ok(glob) => Some(glob.compile_matcher()),
            Err(e) => {
                tracing::warn!(reference, error = %e, "reference is not a usable file pattern");
                None
            }
        }
    }
}

impl ResourceResolver for DirectoryResolver {
    fn resolve(&self, reference: &str, base_directory: &Path) -> Option<PathBuf> {
        if reference.is_empty() {
            return None;
        }

        let matcher = self.matcher_for(reference)?;

        let entries = match fs::read_dir(base_directory) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    directory = %base_directory.display(),
                    error = %e,
                    "cannot list directory"
                );
                return None;
            }
        };

        let mut candidates: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let found = candidates.into_iter().find(|path| {
            path.file_name()
                .map(|name| matcher.is_match(Path::new(name)))
                .unwrap_or(false)
        });

        tracing::debug!(reference, found = ?found, "resolved reference");
        found
    }
}

/// Escapes everything globset treats specially except `*` and `?`
fn reference_to_glob(reference: &str) -> String {
    let mut pattern = String::with_capacity(reference.len());

    for c in reference.chars() {
        if matches!(c, '[' | ']' | '{' | '}' | '\\' | '!' | ',') {
            pattern.push('\\');
        }
        pattern.push(c);
    }

    pattern
}

/// Fixed reference → path table; the base directory is ignored
///
/// Lets callers decide resolution up front, without touching the
/// filesystem.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    table: HashMap<String, PathBuf>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<P: Into<PathBuf>>(mut self, reference: &str, path: P) -> Self {
        self.table.insert(reference.to_string(), path.into());
        self
    }
}

impl ResourceResolver for StaticResolver {
    fn resolve(&self, reference: &str, _base_directory: &Path) -> Option<PathBuf> {
        self.table.get(reference).cloned()
    }
}
