//! Hard wrapping of slide and buffer text.
//!
//! Rows are broken at a fixed character count so the on-screen position of
//! the editing cursor can be computed exactly.

/// Text broken into rows of at most `width` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapped {
    /// Display rows, top to bottom.
    pub rows: Vec<String>,
    /// Cursor as (row, column) within `rows`, if one was requested.
    pub cursor: Option<(usize, usize)>,
}

/// Wrap `text` to `width` columns, mapping a (line, column) cursor.
pub fn wrap(text: &str, width: u16, cursor: Option<(usize, usize)>) -> Wrapped {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    let mut cursor_at = None;

    for (line_no, line) in text.split('\n').enumerate() {
        let first_row = rows.len();
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
        } else {
            rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
        }

        if let Some((cursor_line, cursor_col)) = cursor
            && cursor_line == line_no
        {
            let last_row = rows.len() - first_row - 1;
            let row = (cursor_col / width).min(last_row);
            cursor_at = Some((first_row + row, cursor_col - row * width));
        }
    }

    Wrapped { rows, cursor: cursor_at }
}

/// Saturating conversion for screen coordinates.
pub fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
