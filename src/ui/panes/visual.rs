//! Visualization pane: draws the current step of any algorithm family
//!
//! Before the first step is applied the pane shows the input itself, so the
//! user sees the array, graph or process table they are about to run.

use crate::algorithms::{
    AlgorithmInput, ArrayState, BoardState, Graph, GraphState, Instance, MatchState, MatrixState,
    Process, Scene, ScheduleState, ScheduleStats, TourState,
};
use crate::step::Step;
use crate::ui::theme::{border_style, DEFAULT_THEME};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, Wrap,
    },
    Frame,
};

/// Render the visualization of `step`, or of the raw input when `None`
pub fn render_visual_pane(
    frame: &mut Frame,
    area: Rect,
    instance: &Instance,
    step: Option<&Step<Scene>>,
    is_focused: bool,
) {
    let block = Block::default()
        .title(format!(" {} ", instance.algorithm.title()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let preview;
    let scene = match step {
        Some(step) => &step.state,
        None => {
            preview = preview_scene(&instance.input);
            &preview
        }
    };

    match scene {
        Scene::Array(state) => render_array(frame, inner, state),
        Scene::Text(state) => render_text(frame, inner, state),
        Scene::Graph(state) => match instance.graph() {
            Some(graph) => render_graph(frame, inner, graph, state),
            None => render_note(frame, inner, "(no graph)"),
        },
        Scene::Matrix(state) => render_matrix(frame, inner, state),
        Scene::Board(state) => render_board(frame, inner, state),
        Scene::Schedule(state) => {
            render_schedule(frame, inner, instance.processes().unwrap_or(&[]), state)
        }
        Scene::Tour(state) => render_tour(frame, inner, state),
    }
}

/// What the pane shows before playback: the input with no highlights
pub fn preview_scene(input: &AlgorithmInput) -> Scene {
    match input {
        AlgorithmInput::Search { array, .. }
        | AlgorithmInput::Array { array }
        | AlgorithmInput::Select { array, .. } => Scene::Array(ArrayState::new(array.clone())),
        AlgorithmInput::Text { text, pattern } => Scene::Text(MatchState {
            text: text.clone(),
            pattern: pattern.clone(),
            ..Default::default()
        }),
        AlgorithmInput::Graph { .. } => Scene::Graph(GraphState::default()),
        AlgorithmInput::Matrix { cells } => Scene::Matrix(MatrixState {
            cells: cells.clone(),
            ..Default::default()
        }),
        AlgorithmInput::Board { n } => Scene::Board(BoardState {
            size: *n,
            ..Default::default()
        }),
        AlgorithmInput::Cities { cities, .. } => Scene::Tour(TourState {
            cities: cities.clone(),
            ..Default::default()
        }),
        AlgorithmInput::Processes { .. } => Scene::Schedule(ScheduleState::default()),
    }
}

fn render_note(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(DEFAULT_THEME.comment)),
        area,
    );
}

fn split_info(area: Rect, info_height: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(info_height)])
        .split(area);
    (chunks[0], chunks[1])
}

fn legend(items: &[(&'static str, Color)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (label, color) in items {
        spans.push(Span::styled("■ ", Style::default().fg(*color)));
        spans.push(Span::styled(
            format!("{label}  "),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }
    Line::from(spans)
}

// ---------------------------------------------------------------- arrays

fn bar_color(state: &ArrayState, index: usize) -> Color {
    if state.found == Some(index) {
        DEFAULT_THEME.success
    } else if state.pivot == Some(index) {
        DEFAULT_THEME.pivot
    } else if state.active.contains(&index) {
        DEFAULT_THEME.active
    } else if state.marker == Some(index) {
        DEFAULT_THEME.secondary
    } else if state.settled.contains(&index) {
        DEFAULT_THEME.success
    } else if state
        .window
        .is_some_and(|(low, high)| index < low || index > high)
    {
        DEFAULT_THEME.muted
    } else {
        DEFAULT_THEME.primary
    }
}

fn render_array(frame: &mut Frame, area: Rect, state: &ArrayState) {
    let (chart_area, info_area) = split_info(area, 2);
    if state.values.is_empty() {
        render_note(frame, chart_area, "(empty array)");
        return;
    }

    // Bars need non-negative heights; shift so the smallest value is 1
    let floor = state.values.iter().copied().min().unwrap_or(0).min(0);
    let bars: Vec<Bar> = state
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let color = bar_color(state, i);
            Bar::default()
                .value(v.saturating_sub(floor).unsigned_abs().saturating_add(1))
                .text_value(v.to_string())
                .label(Line::from(i.to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let n = bars.len() as u16;
    let bar_width = (chart_area.width.saturating_sub(n) / n.max(1)).clamp(1, 9);
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    frame.render_widget(chart, chart_area);

    let mut info = Vec::new();
    if let Some((low, high)) = state.window {
        info.push(format!("range [{low}, {high}]"));
    }
    if let Some(min) = state.min {
        info.push(format!("min {min}"));
    }
    if let Some(max) = state.max {
        info.push(format!("max {max}"));
    }
    let lines = vec![
        Line::from(Span::styled(
            info.join("  ·  "),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        legend(&[
            ("compared", DEFAULT_THEME.active),
            ("pivot", DEFAULT_THEME.pivot),
            ("marker", DEFAULT_THEME.secondary),
            ("sorted/found", DEFAULT_THEME.success),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), info_area);
}

// ---------------------------------------------------------------- text

fn render_text(frame: &mut Frame, area: Rect, state: &MatchState) {
    let text: Vec<char> = state.text.chars().collect();
    let pattern: Vec<char> = state.pattern.chars().collect();
    let m = pattern.len();
    let probe = state.position.zip(state.compared).map(|(p, c)| p + c);

    let in_match = |i: usize| state.matches.iter().any(|&s| i >= s && i < s + m);
    let text_spans: Vec<Span> = text
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let style = if probe == Some(i) {
                let color = if state.mismatch {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.active
                };
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD)
            } else if in_match(i) {
                Style::default().fg(DEFAULT_THEME.success)
            } else if state.position.is_some_and(|p| i >= p && i < p + m) {
                Style::default().fg(DEFAULT_THEME.frontier)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            Span::styled(format!("{c} "), style)
        })
        .collect();

    let mut pattern_spans = vec![Span::raw("  ".repeat(state.position.unwrap_or(0)))];
    pattern_spans.extend(pattern.iter().enumerate().map(|(j, c)| {
        let style = if state.compared == Some(j) {
            Style::default()
                .fg(DEFAULT_THEME.active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.pivot)
        };
        Span::styled(format!("{c} "), style)
    }));

    let index_line: String = (0..text.len()).map(|i| format!("{} ", i % 10)).collect();
    let matches = if state.matches.is_empty() {
        "Matches: none yet".to_string()
    } else {
        format!("Matches at: {:?}", state.matches)
    };

    let lines = vec![
        Line::from(Span::styled(
            index_line,
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::from(text_spans),
        Line::from(pattern_spans),
        Line::default(),
        Line::from(Span::styled(matches, Style::default().fg(DEFAULT_THEME.success))),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

// ---------------------------------------------------------------- graphs

fn graph_bounds(graph: &Graph) -> ([f64; 2], [f64; 2]) {
    let pad = 60.0;
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (f64::MAX, f64::MIN, f64::MAX, f64::MIN);
    for node in &graph.nodes {
        min_x = min_x.min(node.x);
        max_x = max_x.max(node.x);
        min_y = min_y.min(node.y);
        max_y = max_y.max(node.y);
    }
    if graph.nodes.is_empty() {
        return ([0.0, 1.0], [0.0, 1.0]);
    }
    // Canvas y grows upward; node coordinates grow downward
    ([min_x - pad, max_x + pad], [-max_y - pad, -min_y + pad])
}

fn node_color(state: &GraphState, node: usize) -> Color {
    if state.current == Some(node) {
        DEFAULT_THEME.active
    } else if state.visited.contains(&node) {
        DEFAULT_THEME.success
    } else if state.frontier.contains(&node) {
        DEFAULT_THEME.frontier
    } else {
        DEFAULT_THEME.primary
    }
}

fn same_edge(graph: &Graph, a: (usize, usize), b: (usize, usize)) -> bool {
    a == b || (!graph.directed && a == (b.1, b.0))
}

fn render_graph(frame: &mut Frame, area: Rect, graph: &Graph, state: &GraphState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(26)])
        .split(area);

    let (x_bounds, y_bounds) = graph_bounds(graph);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for edge in &graph.edges {
                let (Some(a), Some(b)) = (graph.nodes.get(edge.from), graph.nodes.get(edge.to))
                else {
                    continue;
                };
                let ends = (edge.from, edge.to);
                let color = if state
                    .active_edge
                    .is_some_and(|active| same_edge(graph, active, ends))
                {
                    DEFAULT_THEME.active
                } else if state.tree_edges.iter().any(|&t| same_edge(graph, t, ends)) {
                    DEFAULT_THEME.success
                } else {
                    DEFAULT_THEME.muted
                };
                ctx.draw(&CanvasLine::new(a.x, -a.y, b.x, -b.y, color));
                if graph.edges.iter().any(|e| e.weight != 1) {
                    ctx.print(
                        (a.x + b.x) / 2.0,
                        -(a.y + b.y) / 2.0,
                        Span::styled(
                            edge.weight.to_string(),
                            Style::default().fg(DEFAULT_THEME.comment),
                        ),
                    );
                }
            }
            ctx.layer();
            for (index, node) in graph.nodes.iter().enumerate() {
                let color = node_color(state, index);
                ctx.draw(&Circle {
                    x: node.x,
                    y: -node.y,
                    radius: 18.0,
                    color,
                });
                ctx.print(
                    node.x - 4.0,
                    -node.y,
                    Span::styled(
                        node.label.clone(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                );
                if let Some(label) = state.labels.get(index) {
                    ctx.print(
                        node.x - 10.0,
                        -node.y - 32.0,
                        Span::styled(label.clone(), Style::default().fg(DEFAULT_THEME.pivot)),
                    );
                }
            }
        });
    frame.render_widget(canvas, chunks[0]);

    let names = |nodes: &[usize]| -> String {
        nodes
            .iter()
            .map(|&n| graph.label(n))
            .collect::<Vec<_>>()
            .join(" ")
    };
    let mut lines = vec![
        Line::from(Span::styled("Visited", Style::default().fg(DEFAULT_THEME.comment))),
        Line::from(Span::styled(
            names(&state.visited),
            Style::default().fg(DEFAULT_THEME.success),
        )),
        Line::default(),
        Line::from(Span::styled("Frontier", Style::default().fg(DEFAULT_THEME.comment))),
        Line::from(Span::styled(
            names(&state.frontier),
            Style::default().fg(DEFAULT_THEME.frontier),
        )),
    ];
    if !state.labels.is_empty() {
        lines.push(Line::default());
        for (index, label) in state.labels.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>3} ", graph.label(index)),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::styled(label.clone(), Style::default().fg(DEFAULT_THEME.pivot)),
            ]));
        }
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[1]);
}

// ---------------------------------------------------------------- matrices

fn render_matrix(frame: &mut Frame, area: Rect, state: &MatrixState) {
    let n = state.cells.len();
    if n == 0 {
        render_note(frame, area, "(empty matrix)");
        return;
    }
    let (table_area, info_area) = split_info(area, 2);

    let header = Row::new(
        std::iter::once(Cell::from(""))
            .chain((0..n).map(|j| Cell::from(j.to_string())))
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = state
        .cells
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut cells = vec![Cell::from(i.to_string()).style(
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            )];
            cells.extend(row.iter().enumerate().map(|(j, value)| {
                let text = value.map_or_else(|| "∞".to_string(), |v| v.to_string());
                let style = match state.cursor {
                    Some((_, ci, cj)) if (ci, cj) == (i, j) => {
                        let bg = if state.updated {
                            DEFAULT_THEME.success
                        } else {
                            DEFAULT_THEME.active
                        };
                        Style::default().fg(Color::Black).bg(bg)
                    }
                    Some((k, ci, cj)) if (ci, k) == (i, j) || (k, cj) == (i, j) => {
                        Style::default().fg(DEFAULT_THEME.frontier)
                    }
                    _ if state.done => Style::default().fg(DEFAULT_THEME.success),
                    _ => Style::default().fg(DEFAULT_THEME.fg),
                };
                Cell::from(text).style(style)
            }));
            Row::new(cells)
        })
        .collect();

    let widths = vec![Constraint::Length(5); n + 1];
    frame.render_widget(Table::new(rows, widths).header(header), table_area);

    let info = match state.cursor {
        Some((k, i, j)) => format!("k = {k}   i = {i}   j = {j}"),
        None if state.done => "Done".to_string(),
        None => String::new(),
    };
    let lines = vec![
        Line::from(Span::styled(info, Style::default().fg(DEFAULT_THEME.fg))),
        legend(&[
            ("cell (i, j)", DEFAULT_THEME.active),
            ("via k", DEFAULT_THEME.frontier),
            ("updated", DEFAULT_THEME.success),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), info_area);
}

// ---------------------------------------------------------------- boards

fn render_board(frame: &mut Frame, area: Rect, state: &BoardState) {
    let mut lines = Vec::with_capacity(state.size + 2);
    for row in 0..state.size {
        let spans: Vec<Span> = (0..state.size)
            .map(|col| {
                let light = (row + col) % 2 == 0;
                let mut style = Style::default().bg(if light {
                    DEFAULT_THEME.current_line_bg
                } else {
                    DEFAULT_THEME.muted
                });
                let has_queen = state.queens.get(row) == Some(&col);
                if state.probe == Some((row, col)) {
                    style = style
                        .bg(if state.conflict {
                            DEFAULT_THEME.error
                        } else {
                            DEFAULT_THEME.active
                        })
                        .fg(Color::Black);
                } else if has_queen {
                    style = style.fg(if state.solved {
                        DEFAULT_THEME.success
                    } else {
                        DEFAULT_THEME.pivot
                    });
                }
                let glyph = if has_queen { " ♛ " } else { "   " };
                Span::styled(glyph, style.add_modifier(Modifier::BOLD))
            })
            .collect();
        lines.push(Line::from(spans));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("{} of {} queens placed", state.queens.len(), state.size),
        Style::default().fg(DEFAULT_THEME.comment),
    )));
    frame.render_widget(Paragraph::new(lines), area);
}

// ---------------------------------------------------------------- scheduling

const PROCESS_COLORS: [Color; 6] = [
    DEFAULT_THEME.primary,
    DEFAULT_THEME.secondary,
    DEFAULT_THEME.success,
    DEFAULT_THEME.pivot,
    DEFAULT_THEME.frontier,
    DEFAULT_THEME.active,
];

fn process_color(id: u32) -> Color {
    PROCESS_COLORS[id as usize % PROCESS_COLORS.len()]
}

/// Gantt bar and time axis, scaled to `width` columns
fn gantt_lines(state: &ScheduleState, width: usize) -> (Line<'static>, Line<'static>) {
    let total = state.blocks.last().map_or(0, |b| b.end).max(1);
    let scale = width as f64 / f64::from(total);
    let column = |t: u32| ((f64::from(t) * scale).round() as usize).min(width);

    let mut bar = Vec::new();
    let mut axis = vec![' '; width + 4];
    let mut cursor = 0;
    let mark = |axis: &mut Vec<char>, t: u32| {
        for (offset, c) in t.to_string().chars().enumerate() {
            if let Some(slot) = axis.get_mut(column(t) + offset) {
                *slot = c;
            }
        }
    };

    mark(&mut axis, 0);
    for block in &state.blocks {
        let start = column(block.start).max(cursor);
        if start > cursor {
            bar.push(Span::styled(
                "░".repeat(start - cursor),
                Style::default().fg(DEFAULT_THEME.muted),
            ));
        }
        let end = column(block.end).max(start + 1);
        let cell_width = end - start;
        let mut name: String = block.process_name.chars().take(cell_width).collect();
        let pad = cell_width - name.chars().count();
        name = format!("{}{}{}", " ".repeat(pad / 2), name, " ".repeat(pad - pad / 2));
        bar.push(Span::styled(
            name,
            Style::default()
                .fg(Color::Black)
                .bg(process_color(block.process_id))
                .add_modifier(Modifier::BOLD),
        ));
        cursor = end;
        mark(&mut axis, block.end);
    }

    let axis: String = axis.into_iter().collect();
    (
        Line::from(bar),
        Line::from(Span::styled(
            axis.trim_end().to_string(),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    )
}

fn render_schedule(frame: &mut Frame, area: Rect, processes: &[Process], state: &ScheduleState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(3),
        ])
        .split(area);

    let width = chunks[0].width.saturating_sub(4) as usize;
    let (bar, axis) = gantt_lines(state, width.max(1));
    frame.render_widget(Paragraph::new(vec![bar, axis]), chunks[0]);

    let name_of = |id: u32| {
        processes
            .iter()
            .find(|p| p.id == id)
            .map_or_else(|| format!("#{id}"), |p| p.name.clone())
    };
    let ready: Vec<String> = state.ready.iter().map(|&id| name_of(id)).collect();
    let running = state.running.map_or_else(|| "idle".to_string(), name_of);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Time {}  ", state.time),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
            Span::styled(
                format!("Running {running}  "),
                Style::default().fg(DEFAULT_THEME.active),
            ),
            Span::styled(
                format!("Ready [{}]", ready.join(", ")),
                Style::default().fg(DEFAULT_THEME.frontier),
            ),
        ])),
        chunks[1],
    );

    let stats = ScheduleStats::collect(processes, state);
    let has_priority = processes.iter().any(|p| p.priority.is_some());
    let mut header = vec!["Process", "Arrival", "Burst"];
    if has_priority {
        header.push("Priority");
    }
    header.extend(["Completion", "Waiting", "Turnaround"]);

    let rows: Vec<Row> = processes
        .iter()
        .map(|p| {
            let done = stats.rows.iter().find(|r| r.id == p.id);
            let mut cells = vec![
                Cell::from(p.name.clone()).style(Style::default().fg(process_color(p.id))),
                Cell::from(p.arrival.to_string()),
                Cell::from(p.burst.to_string()),
            ];
            if has_priority {
                cells.push(Cell::from(p.priority.unwrap_or(0).to_string()));
            }
            let dash = || "-".to_string();
            cells.push(Cell::from(done.map_or_else(dash, |r| r.completion.to_string())));
            cells.push(Cell::from(done.map_or_else(dash, |r| r.waiting.to_string())));
            cells.push(Cell::from(done.map_or_else(dash, |r| r.turnaround.to_string())));
            Row::new(cells)
        })
        .collect();

    let widths = vec![Constraint::Length(11); header.len()];
    let mut table = Table::new(rows, widths).header(
        Row::new(header).style(
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ),
    );
    if state.completed {
        table = table.footer(
            Row::new(vec![
                Cell::from(format!("Avg waiting {:.2}", stats.average_waiting)),
                Cell::from(""),
                Cell::from(format!("Avg turnaround {:.2}", stats.average_turnaround)),
            ])
            .style(Style::default().fg(DEFAULT_THEME.success)),
        );
    }
    frame.render_widget(table, chunks[2]);
}

// ---------------------------------------------------------------- tours

fn render_tour(frame: &mut Frame, area: Rect, state: &TourState) {
    let (canvas_area, info_area) = split_info(area, 2);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, 600.0])
        .y_bounds([-400.0, 0.0])
        .paint(|ctx| {
            let segment = |path: &[usize]| -> Vec<CanvasLine> {
                path.windows(2)
                    .filter_map(|pair| {
                        let a = state.cities.get(pair[0])?;
                        let b = state.cities.get(pair[1])?;
                        Some((a, b))
                    })
                    .map(|(a, b)| CanvasLine::new(a.x, -a.y, b.x, -b.y, Color::Reset))
                    .collect()
            };
            if state.best != state.path {
                for mut line in segment(&state.best) {
                    line.color = DEFAULT_THEME.success;
                    ctx.draw(&line);
                }
            }
            for mut line in segment(&state.path) {
                line.color = DEFAULT_THEME.frontier;
                ctx.draw(&line);
            }
            if let Some((from, to)) = state.probe {
                if let (Some(a), Some(b)) = (state.cities.get(from), state.cities.get(to)) {
                    ctx.draw(&CanvasLine::new(a.x, -a.y, b.x, -b.y, DEFAULT_THEME.active));
                }
            }
            ctx.layer();
            for (index, city) in state.cities.iter().enumerate() {
                let color = if index == 0 {
                    DEFAULT_THEME.pivot
                } else if state.path.contains(&index) {
                    DEFAULT_THEME.success
                } else {
                    DEFAULT_THEME.primary
                };
                ctx.draw(&Circle {
                    x: city.x,
                    y: -city.y,
                    radius: 6.0,
                    color,
                });
                ctx.print(
                    city.x + 8.0,
                    -city.y,
                    Span::styled(index.to_string(), Style::default().fg(color)),
                );
            }
        });
    frame.render_widget(canvas, canvas_area);

    let mut info = vec![Span::styled(
        format!("Current cost {:.0}  ", state.cost),
        Style::default().fg(DEFAULT_THEME.frontier),
    )];
    if let Some(best) = state.best_cost {
        info.push(Span::styled(
            format!("Best {best:.0}"),
            Style::default().fg(DEFAULT_THEME.success),
        ));
    }
    let lines = vec![
        Line::from(info),
        legend(&[
            ("start", DEFAULT_THEME.pivot),
            ("path", DEFAULT_THEME.frontier),
            ("best", DEFAULT_THEME.success),
            ("checking", DEFAULT_THEME.active),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), info_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_every_default_trace_renders() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        for algorithm in Algorithm::ALL {
            let instance = Instance::with_defaults(algorithm, 7);
            terminal
                .draw(|f| render_visual_pane(f, f.area(), &instance, None, false))
                .unwrap();
            for step in instance.run().iter().take(40) {
                terminal
                    .draw(|f| render_visual_pane(f, f.area(), &instance, Some(step), true))
                    .unwrap();
            }
        }
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(8, 4)).unwrap();
        for algorithm in Algorithm::ALL {
            let instance = Instance::with_defaults(algorithm, 7);
            let steps = instance.run();
            terminal
                .draw(|f| render_visual_pane(f, f.area(), &instance, steps.last(), false))
                .unwrap();
        }
    }

    #[test]
    fn test_gantt_axis_marks_block_ends() {
        let state = ScheduleState {
            blocks: vec![
                crate::algorithms::GanttBlock {
                    process_name: "P1".to_string(),
                    process_id: 0,
                    start: 0,
                    end: 4,
                },
                crate::algorithms::GanttBlock {
                    process_name: "P2".to_string(),
                    process_id: 1,
                    start: 4,
                    end: 8,
                },
            ],
            ..Default::default()
        };
        let (bar, axis) = gantt_lines(&state, 40);
        assert_eq!(bar.width(), 40);
        let axis: String = axis.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(axis.starts_with('0'));
        assert_eq!(axis.find('4'), Some(20));
        assert!(axis.ends_with('8'));
    }
}
