//! Control bars
//!
//! The top bar carries the stopwatch readout and its buttons on the left and
//! the edit and import buttons on the right. The bottom bar shows key hints,
//! the page counter, and the add and delete buttons.

use memodeck_app::{Control, SlideView, Target};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use super::{Hitmap, wrap::to_u16};

const GAP: u16 = 1;
const KEY_HINTS: &str = " \u{2190}/\u{2192} navigate  e edit  i import  q quit";

/// A clickable label.
struct Button {
    label: String,
    target: Target,
    style: Style,
}

impl Button {
    fn new(label: impl Into<String>, control: Control) -> Self {
        Self {
            label: label.into(),
            target: Target::Control(control),
            style: Style::default().fg(Color::Black).bg(Color::Gray),
        }
    }

    fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn width(&self) -> u16 {
        to_u16(Line::from(self.label.as_str()).width())
    }
}

/// Lay buttons out left to right from `x`, clipped to `area`.
///
/// The whole group span is registered first so the gaps between buttons
/// never fall through to the page.
fn draw_from(frame: &mut Frame, hitmap: &mut Hitmap, area: Rect, x: u16, buttons: &[Button]) {
    let end = area.x.saturating_add(area.width);
    let group = Rect { x, width: row_width(buttons).min(end.saturating_sub(x)), ..area };
    hitmap.push(group, Target::Control(Control::Toolbar));

    let mut x = x;
    for button in buttons {
        let width = button.width().min(end.saturating_sub(x));
        if width == 0 {
            break;
        }
        let rect = Rect { x, width, ..area };
        frame.render_widget(Paragraph::new(button.label.as_str()).style(button.style), rect);
        hitmap.push(rect, button.target);
        x = x.saturating_add(width).saturating_add(GAP);
    }
}

fn row_width(buttons: &[Button]) -> u16 {
    let labels: u16 = buttons.iter().map(Button::width).sum();
    labels.saturating_add(GAP.saturating_mul(to_u16(buttons.len().saturating_sub(1))))
}

/// Render the top bar.
pub fn render_top(frame: &mut Frame, view: &SlideView, area: Rect, hitmap: &mut Hitmap) {
    let readout_style = if view.stopwatch_running {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let left = [
        Button::new(format!(" {} ", view.stopwatch), Control::StopwatchDisplay)
            .style(readout_style),
        Button::new(" Start ", Control::StartStopwatch),
        Button::new(" Stop ", Control::StopStopwatch),
        Button::new(" Reset ", Control::ResetStopwatch),
    ];
    let edit_label = if view.editor.is_some() { " Done " } else { " Edit " };
    let right = [Button::new(edit_label, Control::EditToggle), Button::new(" Import ", Control::Import)];

    draw_from(frame, hitmap, area, area.x, &left);
    let right_x = area.x.saturating_add(area.width.saturating_sub(row_width(&right)));
    draw_from(frame, hitmap, area, right_x, &right);
}

/// Render the bottom bar.
pub fn render_bottom(frame: &mut Frame, view: &SlideView, area: Rect, hitmap: &mut Hitmap) {
    frame.render_widget(
        Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::DarkGray)),
        area,
    );

    let counter = format!(" {} / {} ", view.page.current, view.page.total);
    let counter_width = to_u16(counter.len()).min(area.width);
    let counter_area = Rect {
        x: area.x.saturating_add(area.width.saturating_sub(counter_width) / 2),
        width: counter_width,
        ..area
    };
    frame.render_widget(
        Paragraph::new(counter).alignment(Alignment::Center).style(Style::default().fg(Color::Cyan)),
        counter_area,
    );
    hitmap.push(counter_area, Target::Control(Control::PageCounter));

    let mut right = vec![Button::new(" + Add ", Control::AddSlide)];
    if view.show_delete {
        right.push(
            Button::new(" Delete ", Control::DeleteSlide)
                .style(Style::default().fg(Color::White).bg(Color::Red)),
        );
    }
    let right_x = area.x.saturating_add(area.width.saturating_sub(row_width(&right)));
    draw_from(frame, hitmap, area, right_x, &right);
}
