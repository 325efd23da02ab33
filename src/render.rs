use linediff_engine::{Action, Chunk};

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";

const TAB_STOP: usize = 8;

/// Whether rendered lines carry ANSI color escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Ansi,
    Plain,
}

fn action_color(action: Action, mode: ColorMode) -> &'static str {
    if mode == ColorMode::Plain {
        return "";
    }
    match action {
        Action::AddRight => GREEN,
        Action::RemoveLeft => RED,
        Action::Equal | Action::Undefined => "",
    }
}

fn color_reset(action: Action, mode: ColorMode) -> &'static str {
    if action_color(action, mode).is_empty() {
        ""
    } else {
        RESET
    }
}

/// Expand tabs to the next 8-column boundary.
fn expand_tabs(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut col = 0;
    for ch in input.chars() {
        if ch == '\t' {
            let spaces = TAB_STOP - (col % TAB_STOP);
            for _ in 0..spaces {
                out.push(' ');
            }
            col += spaces;
        } else {
            out.push(ch);
            col += 1;
        }
    }
    out
}

/// Print chunks one under the other, each headed by a rule and its starting
/// line number.
pub fn print_interleaved(chunks: &[Chunk], mode: ColorMode) {
    let rule = "=".repeat(80);
    for chunk in chunks {
        println!("{rule}");
        println!("{}:", chunk.start_line());
        for line in &chunk.lines {
            let color = action_color(line.action, mode);
            let reset = color_reset(line.action, mode);
            println!(
                "{color}{} {}{reset}",
                line.action.prefix(),
                expand_tabs(&line.line)
            );
        }
    }
}

/// Print chunks in two columns: removals on the left, additions on the
/// right, equal lines in both. Long lines wrap within their column and the
/// shorter column is blank-padded so rows stay aligned.
pub fn print_side_by_side(chunks: &[Chunk], column_width: usize, mode: ColorMode) {
    let rule = "=".repeat(column_width * 2 + 1);
    for chunk in chunks {
        println!("{rule}");
        println!("{}:", chunk.start_line());

        let mut left_cells: Vec<String> = Vec::new();
        let mut right_cells: Vec<String> = Vec::new();
        for line in &chunk.lines {
            let cells = format_cells(line.action, &line.line, column_width, mode);
            match line.action {
                Action::AddRight => right_cells.extend(cells),
                Action::RemoveLeft => left_cells.extend(cells),
                Action::Equal => {
                    equalize(&mut left_cells, &mut right_cells, column_width, mode);
                    left_cells.extend(cells.iter().cloned());
                    right_cells.extend(cells);
                }
                Action::Undefined => unreachable!("undefined action in chunk"),
            }
        }
        equalize(&mut left_cells, &mut right_cells, column_width, mode);

        for (left, right) in left_cells.iter().zip(&right_cells) {
            println!("{left}|{right}");
        }
    }
}

/// Format one diff line as one or more fixed-width colored cells, wrapping
/// content that overflows the column.
fn format_cells(action: Action, line: &str, column_width: usize, mode: ColorMode) -> Vec<String> {
    let color = action_color(action, mode);
    let reset = color_reset(action, mode);
    let prefix = action.prefix();
    let pad_width = column_width.saturating_sub(2);
    let wrap_width = column_width.saturating_sub(4).max(1);

    let format_one =
        |content: &str| format!("{color}{prefix} {content:<pad_width$}{reset}");

    let line = expand_tabs(line);
    if line.is_empty() {
        return vec![format_one("")];
    }
    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(wrap_width)
        .map(|piece| format_one(&piece.iter().collect::<String>()))
        .collect()
}

/// Pad the shorter column with blank equal-styled cells.
fn equalize(left: &mut Vec<String>, right: &mut Vec<String>, column_width: usize, mode: ColorMode) {
    while left.len() < right.len() {
        left.extend(format_cells(Action::Equal, "", column_width, mode));
    }
    while right.len() < left.len() {
        right.extend(format_cells(Action::Equal, "", column_width, mode));
    }
}
