//! Parsing of `git status --porcelain -z` output.

use std::path::{Component, Path, PathBuf};

/// One entry of `git status --porcelain -z` (format v1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// Two-letter status code (`XY`), e.g. `"A "`, `" M"`, `"??"`.
    pub code: String,

    /// Path relative to the repository root. For renames, the new path.
    pub path: PathBuf,
}

impl StatusEntry {
    /// Returns true if the entry is untracked (`??`).
    #[must_use]
    pub fn is_untracked(&self) -> bool {
        self.code == "??"
    }

    /// Returns true if the entry has changes in the index.
    #[must_use]
    pub fn is_staged(&self) -> bool {
        !self.is_untracked() && !self.code.starts_with(' ')
    }

    /// Returns true if the entry is a rename or copy, which carries a
    /// second (source) path.
    #[must_use]
    pub fn has_source(&self) -> bool {
        self.code.starts_with(['R', 'C'])
    }

    /// Returns true if the entry refers to the given repository-relative path.
    #[must_use]
    pub fn refers_to(&self, path: &Path) -> bool {
        normalize(&self.path) == normalize(path)
    }
}

/// Parses NUL-terminated porcelain v1 output into entries.
///
/// Paths are taken verbatim, without C-style quoting. The source path that
/// follows a rename or copy is skipped. Malformed records are skipped.
#[must_use]
pub fn parse_porcelain(output: &str) -> Vec<StatusEntry> {
    let mut entries = Vec::new();
    let mut records = output.split('\0').filter(|r| !r.is_empty());

    while let Some(record) = records.next() {
        let Some(entry) = parse_record(record) else {
            continue;
        };
        if entry.has_source() {
            records.next();
        }
        entries.push(entry);
    }

    entries
}

fn parse_record(record: &str) -> Option<StatusEntry> {
    if record.len() < 4 || !record.is_char_boundary(2) || !record.is_char_boundary(3) {
        return None;
    }

    let (code, rest) = record.split_at(2);
    let path = rest.strip_prefix(' ')?;

    Some(StatusEntry {
        code: code.to_string(),
        path: PathBuf::from(path),
    })
}

fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
