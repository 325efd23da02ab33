use std::collections::VecDeque;

use serde::Serialize;

use crate::line::Line;
use crate::state::Action;

/// One line of a rendered diff: owned content, the action applied to it, and
/// a 1-based line number.
///
/// Equal and removed lines number by their position in the left document.
/// Added lines number by the left-side insertion point: the left position
/// after consuming every preceding equal or removed line.
#[derive(Debug, Clone, Serialize)]
pub struct DiffLine {
    pub line: String,
    pub action: Action,
    pub line_number: usize,
}

/// A contiguous run of diff lines around one or more changes, bounded by at
/// most `context_lines` equal lines on each side.
#[derive(Debug, Clone, Serialize)]
pub struct Chunk {
    pub lines: Vec<DiffLine>,
}

impl Chunk {
    /// 1-based line number of the first line in the chunk.
    pub fn start_line(&self) -> usize {
        self.lines[0].line_number
    }
}

/// Group an edit script into context-trimmed chunks.
///
/// Walks the action stream once, keeping a rolling window of pending lines:
/// while outside a chunk the window holds at most `context_lines` of leading
/// context, and once `context_lines` equal lines have accumulated after the
/// last change the open chunk is flushed. A script with no changes yields no
/// chunks.
pub fn build_chunks(
    path: &[Action],
    left: &[Line<'_>],
    right: &[Line<'_>],
    context_lines: usize,
) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut buffer: VecDeque<DiffLine> = VecDeque::new();
    let mut in_chunk = false;
    let mut context_count = 0;
    let mut consumed_left = 0;
    let mut consumed_right = 0;

    for &action in path {
        let line = match action {
            Action::Equal | Action::RemoveLeft => left[consumed_left].as_str().to_string(),
            Action::AddRight => right[consumed_right].as_str().to_string(),
            Action::Undefined => unreachable!("undefined action in edit script"),
        };
        let diff_line = DiffLine {
            line,
            action,
            line_number: consumed_left + 1,
        };
        match action {
            Action::Equal => {
                consumed_left += 1;
                consumed_right += 1;
            }
            Action::RemoveLeft => consumed_left += 1,
            Action::AddRight => consumed_right += 1,
            Action::Undefined => unreachable!(),
        }

        if action == Action::Equal && in_chunk && context_count == context_lines {
            chunks.push(Chunk {
                lines: buffer.drain(..).collect(),
            });
            in_chunk = false;
            context_count = 0;
        }

        buffer.push_back(diff_line);

        if action != Action::Equal {
            in_chunk = true;
            context_count = 0;
        } else if in_chunk {
            context_count += 1;
        } else if buffer.len() > context_lines {
            buffer.pop_front();
        }
    }

    if in_chunk {
        chunks.push(Chunk {
            lines: buffer.into_iter().collect(),
        });
    }
    chunks
}
