use std::fs;
use std::io;
use std::path::Path;

use crate::error::DiffError;

/// Read a file's full contents and normalize the trailing newline.
///
/// With `treat_missing_as_empty` set, a file that does not exist yields the
/// empty string; every other I/O failure propagates. Non-empty content that
/// does not end in a newline gets one appended, so the splitter never drops
/// a final unterminated line.
pub fn read_normalized(path: &Path, treat_missing_as_empty: bool) -> Result<String, DiffError> {
    let mut content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound && treat_missing_as_empty => String::new(),
        Err(e) => {
            return Err(DiffError::Read {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    Ok(content)
}
