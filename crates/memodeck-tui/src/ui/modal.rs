//! Import modal
//!
//! A centered panel holding a multi-line buffer for pasting a whole deck,
//! with confirm and cancel buttons. The rest of the screen is dimmed and acts
//! as the backdrop.

use memodeck_app::{ModalPart, Target, editor::TextBuffer};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{
    Hitmap,
    wrap::{to_u16, wrap},
};

const HINT: &str = "Separate slides with a blank line. Ctrl+S imports, Esc cancels.";
const CONFIRM: &str = " Import ";
const CANCEL: &str = " Cancel ";

/// Panel area: 70% by 60% of the screen, centered.
pub fn panel(area: Rect) -> Rect {
    let width = (area.width.saturating_mul(7) / 10).max(20).min(area.width);
    let height = (area.height.saturating_mul(6) / 10).max(8).min(area.height);
    Rect {
        x: area.x.saturating_add((area.width - width) / 2),
        y: area.y.saturating_add((area.height - height) / 2),
        width,
        height,
    }
}

/// Render the modal over the current frame.
pub fn render(frame: &mut Frame, buffer: &TextBuffer, hitmap: &mut Hitmap) {
    let screen = frame.area();
    frame.buffer_mut().set_style(screen, Style::default().add_modifier(Modifier::DIM));

    let panel = panel(screen);
    hitmap.set_modal(panel);
    hitmap.push(panel, Target::Modal(ModalPart::Panel));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Import slides ");
    let inner = block.inner(panel);
    frame.render_widget(Clear, panel);
    frame.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let [hint_area, buffer_area, buttons_area] = chunks.as_ref() else {
        return;
    };

    frame.render_widget(
        Paragraph::new(HINT).style(Style::default().fg(Color::DarkGray)),
        *hint_area,
    );
    render_buffer(frame, buffer, *buffer_area);
    hitmap.push(*buffer_area, Target::Modal(ModalPart::Buffer));
    render_buttons(frame, *buttons_area, hitmap);
}

fn render_buffer(frame: &mut Frame, buffer: &TextBuffer, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);

    let wrapped = wrap(buffer.text(), inner.width, Some(buffer.cursor_line_col()));
    let (cursor_row, cursor_col) = wrapped.cursor.unwrap_or_default();
    let skip = (cursor_row + 1).saturating_sub(usize::from(inner.height));

    let lines: Vec<Line> = wrapped.rows.into_iter().skip(skip).map(Line::from).collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);

    let max_x = inner.x.saturating_add(inner.width.saturating_sub(1));
    let cursor_x = inner.x.saturating_add(to_u16(cursor_col)).min(max_x);
    let cursor_y = inner.y.saturating_add(to_u16(cursor_row.saturating_sub(skip)));
    frame.set_cursor_position((cursor_x, cursor_y));
}

fn render_buttons(frame: &mut Frame, area: Rect, hitmap: &mut Hitmap) {
    let confirm_width = to_u16(CONFIRM.len()).min(area.width);
    let cancel_width = to_u16(CANCEL.len()).min(area.width.saturating_sub(confirm_width + 1));

    let cancel = Rect {
        x: area.x.saturating_add(area.width.saturating_sub(cancel_width)),
        width: cancel_width,
        ..area
    };
    let confirm = Rect {
        x: cancel.x.saturating_sub(confirm_width + 1).max(area.x),
        width: confirm_width,
        ..area
    };

    frame.render_widget(
        Paragraph::new(CONFIRM).style(Style::default().fg(Color::Black).bg(Color::Green)),
        confirm,
    );
    frame.render_widget(
        Paragraph::new(CANCEL).style(Style::default().fg(Color::Black).bg(Color::Gray)),
        cancel,
    );
    hitmap.push(confirm, Target::Modal(ModalPart::Confirm));
    hitmap.push(cancel, Target::Modal(ModalPart::Cancel));
}
