//! Status bar rendering with keybindings and state indicators

use crate::playback::PlaybackStatus;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct StatusRenderData<'a> {
    pub message: &'a str,
    /// Steps applied so far
    pub position: usize,
    /// Total steps, `None` while a live producer may still yield more
    pub total: Option<usize>,
    pub status: PlaybackStatus,
    pub is_error: bool,
}

/// Step counter text: `-/-` before generation, `i/?` for unfinished live traces
pub fn step_counter(data: &StatusRenderData) -> String {
    match (data.status, data.total) {
        (PlaybackStatus::Idle, _) => " Step -/- ".to_string(),
        (_, Some(total)) => format!(" Step {}/{} ", data.position, total),
        (_, None) => format!(" Step {}/? ", data.position),
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let left_spans = vec![
        Span::styled(
            step_counter(data),
            Style::default()
                .bg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in [
        (" ⎵ ", " play "),
        (" → ", " step "),
        (" r ", " reset "),
        (" e ", " end "),
        (" x ", " run code "),
        (" ⇥ ", " focus "),
        (" q ", " quit "),
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let badge = match data.status {
        PlaybackStatus::Playing => Some((" ▶ PLAYING ", DEFAULT_THEME.secondary)),
        PlaybackStatus::Finished => Some((" END ", DEFAULT_THEME.error)),
        PlaybackStatus::Idle => Some((" START ", DEFAULT_THEME.success)),
        PlaybackStatus::Ready if data.position == 0 => Some((" START ", DEFAULT_THEME.success)),
        PlaybackStatus::Ready => None,
    };
    if let Some((text, color)) = badge {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(status: PlaybackStatus, position: usize, total: Option<usize>) -> StatusRenderData<'static> {
        StatusRenderData {
            message: "",
            position,
            total,
            status,
            is_error: false,
        }
    }

    #[test]
    fn test_step_counter() {
        assert_eq!(step_counter(&data(PlaybackStatus::Idle, 0, Some(0))), " Step -/- ");
        assert_eq!(step_counter(&data(PlaybackStatus::Ready, 3, Some(9))), " Step 3/9 ");
        assert_eq!(step_counter(&data(PlaybackStatus::Playing, 3, None)), " Step 3/? ");
    }
}
