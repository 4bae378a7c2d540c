//! Input panel pane

use crate::input::InputPanel;
use crate::ui::theme::{border_style, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the editable fields. `error` is the last rejected apply, if any.
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    panel: &InputPanel,
    error: Option<&str>,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Input ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = Vec::new();
    for (index, field) in panel.fields().iter().enumerate() {
        let is_selected = is_focused && index == panel.selected();
        lines.push(Line::from(Span::styled(
            field.label,
            Style::default().fg(DEFAULT_THEME.comment),
        )));

        let value_style = if is_selected {
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .bg(DEFAULT_THEME.current_line_bg)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        let mut value = vec![Span::styled(field.value.as_str(), value_style)];
        if is_selected {
            value.push(Span::styled(
                "▏",
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        lines.push(Line::from(value));
        lines.push(Line::default());
    }

    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            error,
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )));
    } else if is_focused {
        lines.push(Line::from(Span::styled(
            "enter apply · esc defaults · ↑/↓ field",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
