//! Algorithm catalog pane

use crate::algorithms::{Algorithm, Category};
use crate::ui::theme::{border_style, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Algorithms in sidebar order: grouped by category, catalog order within
pub fn catalog_order() -> Vec<Algorithm> {
    Category::ALL
        .iter()
        .flat_map(|&category| {
            Algorithm::ALL
                .into_iter()
                .filter(move |a| a.category() == category)
        })
        .collect()
}

/// Render the catalog. `selected` indexes [`catalog_order`]; `open` is the
/// algorithm currently shown in the other panes.
pub fn render_catalog_pane(
    frame: &mut Frame,
    area: Rect,
    selected: usize,
    open: Algorithm,
    is_focused: bool,
) {
    let order = catalog_order();
    let mut items = Vec::with_capacity(order.len() + Category::ALL.len());
    let mut selected_row = 0;
    let mut last_category = None;

    for (index, algorithm) in order.iter().enumerate() {
        let category = algorithm.category();
        if last_category != Some(category) {
            last_category = Some(category);
            items.push(ListItem::new(Line::from(Span::styled(
                category.title(),
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ))));
        }
        if index == selected {
            selected_row = items.len();
        }

        let marker = if *algorithm == open { "● " } else { "  " };
        let style = if *algorithm == open {
            Style::default().fg(DEFAULT_THEME.success)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        items.push(ListItem::new(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(algorithm.title(), style),
        ])));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Algorithms ")
                .borders(Borders::ALL)
                .border_style(border_style(is_focused)),
        )
        .highlight_style(
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(Some(selected_row));
    frame.render_stateful_widget(list, area, &mut state);
}
