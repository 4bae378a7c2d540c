use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub active: Color,   // Yellow: compared, current, probed
    pub pivot: Color,    // Pink: pivot, key, best tour
    pub frontier: Color, // Cyan: queue, stack, window
    pub muted: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    active: Color::Rgb(249, 226, 175),
    pivot: Color::Rgb(245, 194, 231),
    frontier: Color::Rgb(148, 226, 213),
    muted: Color::Rgb(69, 71, 90),
};

/// Border style shared by every pane
pub fn border_style(is_focused: bool) -> ratatui::style::Style {
    use ratatui::style::{Modifier, Style};

    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
