//! Slide area
//!
//! Displays the current slide centered in the main area, or the editor with
//! a cursor while in edit mode. The display scale narrows the text column and
//! sets the weight, so short slides read large and long ones stay legible.
//!
//! The text column is registered as [`Target::Editor`] in both modes; taps
//! and wheel events over it never navigate.

use std::borrow::Cow;

use memodeck_app::{FontScale, SlideView, Target, editor::TextBuffer};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::{
    Hitmap,
    wrap::{to_u16, wrap},
};

/// Horizontal margin on each side, in percent of the area width.
fn margin_percent(scale: FontScale) -> u16 {
    match scale {
        FontScale::Largest => 25,
        FontScale::Large => 18,
        FontScale::Medium => 12,
        FontScale::Small => 6,
        FontScale::Smallest => 2,
    }
}

fn text_style(scale: FontScale) -> Style {
    match scale {
        FontScale::Largest | FontScale::Large => Style::default().add_modifier(Modifier::BOLD),
        FontScale::Medium | FontScale::Small => Style::default(),
        FontScale::Smallest => Style::default().fg(Color::Gray),
    }
}

/// Text column for `scale` inside `area`.
pub fn column(area: Rect, scale: FontScale) -> Rect {
    let margin = area.width.saturating_mul(margin_percent(scale)) / 100;
    Rect {
        x: area.x.saturating_add(margin),
        width: area.width.saturating_sub(margin.saturating_mul(2)).max(1),
        ..area
    }
}

/// Render the slide area.
pub fn render(frame: &mut Frame, view: &SlideView, area: Rect, hitmap: &mut Hitmap) {
    let column = column(area, view.scale);
    match view.editor {
        Some(editor) => render_editor(frame, editor, view.scale, column, hitmap),
        None => render_slide(frame, view, column, hitmap),
    }
}

/// Whether `scale` separates source lines with a blank row.
fn spaced(scale: FontScale) -> bool {
    matches!(scale, FontScale::Largest | FontScale::Large)
}

fn render_slide(frame: &mut Frame, view: &SlideView, column: Rect, hitmap: &mut Hitmap) {
    let content = if spaced(view.scale) {
        Cow::Owned(view.content.replace('\n', "\n\n"))
    } else {
        Cow::Borrowed(view.content)
    };
    let wrapped = wrap(&content, column.width, None);
    let height = to_u16(wrapped.rows.len()).min(column.height);
    let text_box = Rect {
        y: column.y.saturating_add((column.height - height) / 2),
        height,
        ..column
    };

    let lines: Vec<Line> = wrapped.rows.into_iter().map(Line::from).collect();
    let paragraph = Paragraph::new(lines).style(text_style(view.scale)).alignment(Alignment::Center);
    frame.render_widget(paragraph, text_box);
    hitmap.push(column, Target::Editor);
}

fn render_editor(
    frame: &mut Frame,
    editor: &TextBuffer,
    scale: FontScale,
    column: Rect,
    hitmap: &mut Hitmap,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Editing (Esc to finish) ");
    let inner = block.inner(column);

    let wrapped = wrap(editor.text(), inner.width, Some(editor.cursor_line_col()));
    let (cursor_row, cursor_col) = wrapped.cursor.unwrap_or_default();
    let skip = (cursor_row + 1).saturating_sub(usize::from(inner.height));

    let lines: Vec<Line> = wrapped.rows.into_iter().skip(skip).map(Line::from).collect();
    let paragraph = Paragraph::new(lines).style(text_style(scale)).block(block);
    frame.render_widget(paragraph, column);
    hitmap.push(column, Target::Editor);

    let max_x = inner.x.saturating_add(inner.width.saturating_sub(1));
    let cursor_x = inner.x.saturating_add(to_u16(cursor_col)).min(max_x);
    let cursor_y = inner.y.saturating_add(to_u16(cursor_row.saturating_sub(skip)));
    frame.set_cursor_position((cursor_x, cursor_y));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_narrows_with_scale() {
        let area = Rect::new(0, 1, 100, 20);
        let widths: Vec<u16> = [
            FontScale::Largest,
            FontScale::Large,
            FontScale::Medium,
            FontScale::Small,
            FontScale::Smallest,
        ]
        .into_iter()
        .map(|scale| column(area, scale).width)
        .collect();

        assert_eq!(widths, [50, 64, 76, 88, 96]);
        assert!(widths.is_sorted());
    }

    #[test]
    fn large_scales_are_spaced() {
        assert!(spaced(FontScale::Largest));
        assert!(spaced(FontScale::Large));
        assert!(!spaced(FontScale::Medium));
        assert!(!spaced(FontScale::Smallest));
    }

    #[test]
    fn column_is_centered() {
        let col = column(Rect::new(0, 0, 80, 10), FontScale::Largest);
        assert_eq!(col.x, 20);
        assert_eq!(col.x + col.width, 60);
    }
}
