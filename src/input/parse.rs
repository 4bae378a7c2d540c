// Lenient text parsing for the input panel
//
// Malformed tokens are dropped or replaced by defaults; only input that cannot
// be repaired (a ragged matrix) is reported as an error.

use crate::algorithms::matrix::Cells;
use crate::algorithms::{Edge, Graph, Process};
use crate::errors::InputError;

/// Leading integer of `text`: optional whitespace, optional sign, digits.
/// Trailing garbage is ignored, so `"12abc"` is 12 and `"3.7"` is 3.
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Comma separated integers; tokens without a leading integer are dropped
pub fn parse_number_list(text: &str) -> Vec<i64> {
    text.split(',').filter_map(parse_int_prefix).collect()
}

/// A single integer field that falls back when missing, unparseable or zero
pub fn parse_number_or(text: &str, fallback: i64) -> i64 {
    match parse_int_prefix(text) {
        Some(0) | None => fallback,
        Some(value) => value,
    }
}

fn to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// `"P1 0 4 2; P2 1 3"`: name, arrival, burst and optional priority per entry.
///
/// Entries are separated by `;` or newlines, fields by whitespace or commas.
/// A missing name becomes `P<n>`, a missing arrival 0, a missing burst 1.
pub fn parse_processes(text: &str) -> Vec<Process> {
    text.split(|c: char| c == ';' || c == '\n')
        .map(|entry| {
            entry
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|tokens| !tokens.is_empty())
        .enumerate()
        .map(|(index, tokens)| {
            let (name, numbers) = match parse_int_prefix(tokens[0]) {
                Some(_) => (format!("P{}", index + 1), &tokens[..]),
                None => (tokens[0].to_string(), &tokens[1..]),
            };
            let field = |i: usize, fallback: i64| {
                numbers
                    .get(i)
                    .map_or(fallback, |t| parse_number_or(t, fallback))
            };
            let mut process = Process::new(
                index as u32,
                name,
                to_u32(field(0, 0)),
                to_u32(field(1, 1)).max(1),
            );
            if numbers.len() > 2 {
                process.priority = Some(to_u32(field(2, 0)));
            }
            process
        })
        .collect()
}

/// `"A-B:4, B-C"` against the graph's node labels. Unknown labels drop the
/// edge; a missing weight is 1.
pub fn parse_edges(graph: &Graph, text: &str) -> Vec<Edge> {
    text.split(|c: char| c == ',' || c == ';' || c == '\n')
        .filter_map(|token| {
            let (ends, weight) = match token.split_once(':') {
                Some((ends, weight)) => (ends, parse_number_or(weight, 1)),
                None => (token, 1),
            };
            let (from, to) = ends.split_once('-')?;
            Some(Edge {
                from: graph.index_of(from)?,
                to: graph.index_of(to)?,
                weight: to_u32(weight),
            })
        })
        .collect()
}

fn is_infinity(token: &str) -> bool {
    matches!(
        token.to_ascii_lowercase().as_str(),
        "inf" | "infinity" | "∞" | "x" | "-"
    )
}

/// Rows separated by `;` or newlines, cells by commas or whitespace.
/// `inf`/`∞` (and anything else without a leading integer) is no edge.
pub fn parse_matrix(text: &str) -> Result<Cells, InputError> {
    let rows: Vec<Vec<Option<i64>>> = text
        .split(|c: char| c == ';' || c == '\n')
        .map(|row| {
            row.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
                .map(|t| {
                    if is_infinity(t) {
                        None
                    } else {
                        parse_int_prefix(t)
                    }
                })
                .collect::<Vec<_>>()
        })
        .filter(|row| !row.is_empty())
        .collect();

    if rows.is_empty() {
        return Err(InputError::EmptyMatrix);
    }
    let expected = rows.len();
    if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
        return Err(InputError::NotSquare {
            row,
            len: cells.len(),
            expected,
        });
    }
    Ok(rows)
}

pub fn format_number_list(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_processes(processes: &[Process]) -> String {
    processes
        .iter()
        .map(|p| match p.priority {
            Some(priority) => format!("{} {} {} {priority}", p.name, p.arrival, p.burst),
            None => format!("{} {} {}", p.name, p.arrival, p.burst),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn format_edges(graph: &Graph) -> String {
    graph
        .edges
        .iter()
        .map(|e| format!("{}-{}:{}", graph.label(e.from), graph.label(e.to), e.weight))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_matrix(cells: &Cells) -> String {
    cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|c| c.map_or_else(|| "inf".to_string(), |v| v.to_string()))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("; ")
}
