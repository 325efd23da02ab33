use std::path::Path;

use crate::chunk::{build_chunks, Chunk};
use crate::error::DiffError;
use crate::line::split_lines;
use crate::reader::read_normalized;
use crate::solver::find_edit_script;

/// Tuning knobs for a diff call.
#[derive(Debug, Clone)]
pub struct Options {
    /// Substitute empty content for files that do not exist.
    pub treat_missing_files_as_empty: bool,
    /// Unchanged lines kept around each changed region.
    pub context_lines: usize,
    /// Maximum lag (in `left + right`) a search node may fall behind the
    /// furthest-reached node before it is pruned. Unset runs the exact
    /// solver; set, the result is best-effort rather than minimal.
    pub agg: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            treat_missing_files_as_empty: false,
            context_lines: 3,
            agg: None,
        }
    }
}

/// Diff two whole documents into context-trimmed chunks.
///
/// Identical documents (byte-equal) produce no chunks. The returned chunks
/// own their line content, so they outlive the inputs.
pub fn diff_strings(doc_left: &str, doc_right: &str, options: &Options) -> Vec<Chunk> {
    if doc_left == doc_right {
        return Vec::new();
    }
    let left = split_lines(doc_left);
    let right = split_lines(doc_right);
    let path = find_edit_script(&left, &right, options.agg);
    build_chunks(&path, &left, &right, options.context_lines)
}

/// Diff two files. See [`read_normalized`] for the missing-file and
/// trailing-newline handling.
pub fn diff_files(
    file_left: &Path,
    file_right: &Path,
    options: &Options,
) -> Result<Vec<Chunk>, DiffError> {
    let doc_left = read_normalized(file_left, options.treat_missing_files_as_empty)?;
    let doc_right = read_normalized(file_right, options.treat_missing_files_as_empty)?;
    Ok(diff_strings(&doc_left, &doc_right, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Action;
    use std::io::Write;

    #[test]
    fn identical_strings_produce_nothing() {
        let options = Options::default();
        assert!(diff_strings("", "", &options).is_empty());
        assert!(diff_strings("a\nb\n", "a\nb\n", &options).is_empty());
    }

    #[test]
    fn basic_diff() {
        let chunks = diff_strings("foo\nbar\nfoobar\n", "bar\nbarfoo\n", &Options::default());
        assert_eq!(chunks.len(), 1);
        let actions: Vec<Action> = chunks[0].lines.iter().map(|l| l.action).collect();
        assert_eq!(
            actions,
            vec![
                Action::RemoveLeft,
                Action::Equal,
                Action::RemoveLeft,
                Action::AddRight,
            ]
        );
    }

    #[test]
    fn default_options() {
        let options = Options::default();
        assert!(!options.treat_missing_files_as_empty);
        assert_eq!(options.context_lines, 3);
        assert_eq!(options.agg, None);
    }

    #[test]
    fn diff_files_roundtrip() {
        let mut left = tempfile::NamedTempFile::new().unwrap();
        let mut right = tempfile::NamedTempFile::new().unwrap();
        // No trailing newline on the left: the reader normalizes it.
        left.write_all(b"a\nb").unwrap();
        right.write_all(b"a\nc\n").unwrap();
        let chunks = diff_files(left.path(), right.path(), &Options::default()).unwrap();
        assert_eq!(chunks.len(), 1);
        let rendered: Vec<String> = chunks[0]
            .lines
            .iter()
            .map(|l| format!("{}{}", l.action.prefix(), l.line))
            .collect();
        assert_eq!(rendered, vec![" a", "-b", "+c"]);
    }

    #[test]
    fn diff_files_missing_propagates() {
        let right = tempfile::NamedTempFile::new().unwrap();
        let err = diff_files(
            Path::new("/nonexistent/linediff-left"),
            right.path(),
            &Options::default(),
        )
        .unwrap_err();
        assert_eq!(err.code(), "READ_ERROR");
    }

    #[test]
    fn diff_files_missing_as_empty() {
        let mut right = tempfile::NamedTempFile::new().unwrap();
        right.write_all(b"new\n").unwrap();
        let options = Options {
            treat_missing_files_as_empty: true,
            ..Options::default()
        };
        let chunks = diff_files(Path::new("/nonexistent/linediff-left"), right.path(), &options)
            .unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].lines.len(), 1);
        assert_eq!(chunks[0].lines[0].action, Action::AddRight);
        assert_eq!(chunks[0].lines[0].line, "new");
    }
}
