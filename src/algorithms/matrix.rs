// All-pairs sweeps: Floyd-Warshall distances and Warshall reachability

use super::MatrixState;
use crate::step::Step;

pub type Cells = Vec<Vec<Option<i64>>>;

pub fn floyd_default() -> Cells {
    vec![
        vec![Some(0), Some(3), None, Some(7)],
        vec![Some(8), Some(0), Some(2), None],
        vec![Some(5), None, Some(0), Some(1)],
        vec![Some(2), None, None, Some(0)],
    ]
}

pub fn warshall_default() -> Cells {
    [
        [0, 1, 0, 1],
        [0, 0, 1, 0],
        [0, 0, 0, 1],
        [0, 0, 0, 0],
    ]
    .iter()
    .map(|row| row.iter().map(|&c| Some(c)).collect())
    .collect()
}

/// Pad or cut every row to the row count so indexing stays in bounds
fn squared(cells: &Cells, fill: Option<i64>) -> Cells {
    let n = cells.len();
    cells
        .iter()
        .map(|row| (0..n).map(|j| row.get(j).copied().unwrap_or(fill)).collect())
        .collect()
}

fn format_cell(cell: Option<i64>) -> String {
    cell.map_or_else(|| "∞".to_string(), |v| v.to_string())
}

fn snapshot(cells: &Cells, cursor: Option<(usize, usize, usize)>, updated: bool) -> MatrixState {
    MatrixState {
        cells: cells.clone(),
        cursor,
        updated,
        done: false,
    }
}

pub fn floyd_warshall(input: &Cells) -> Vec<Step<MatrixState>> {
    let mut dist = squared(input, None);
    let n = dist.len();
    let mut steps = vec![Step::new(
        snapshot(&dist, None, false),
        "Initialized Distance Matrix",
    )];

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                steps.push(Step::new(
                    snapshot(&dist, Some((k, i, j)), false),
                    format!(
                        "Comparing dist[{i}][{j}] ({}) with dist[{i}][{k}] + dist[{k}][{j}]",
                        format_cell(dist[i][j])
                    ),
                ));

                let through = match (dist[i][k], dist[k][j]) {
                    // An overflowing sum is never shorter than the current distance
                    (Some(a), Some(b)) => a.checked_add(b),
                    _ => None,
                };
                if let Some(candidate) = through {
                    if dist[i][j].map_or(true, |current| candidate < current) {
                        dist[i][j] = Some(candidate);
                        steps.push(Step::new(
                            snapshot(&dist, Some((k, i, j)), true),
                            format!("Update! dist[{i}][{j}] is now {candidate}"),
                        ));
                    }
                }
            }
        }
    }

    let mut last = snapshot(&dist, None, false);
    last.done = true;
    steps.push(Step::new(last, "All-Pairs Shortest Paths Computed!"));
    steps
}

pub fn warshall(input: &Cells) -> Vec<Step<MatrixState>> {
    let mut reach: Cells = squared(input, Some(0))
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|c| Some(i64::from(c.unwrap_or(0) != 0)))
                .collect()
        })
        .collect();
    let n = reach.len();
    let mut steps = vec![Step::new(
        snapshot(&reach, None, false),
        "Initialized Reachability Matrix",
    )];

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                steps.push(Step::new(
                    snapshot(&reach, Some((k, i, j)), false),
                    format!("Checking reachability {i}->{j} via {k}"),
                ));
                if reach[i][j] == Some(0) && reach[i][k] == Some(1) && reach[k][j] == Some(1) {
                    reach[i][j] = Some(1);
                    steps.push(Step::new(
                        snapshot(&reach, Some((k, i, j)), true),
                        format!("Path found! {i}->{j} is reachable via {k}"),
                    ));
                }
            }
        }
    }

    let mut last = snapshot(&reach, None, false);
    last.done = true;
    steps.push(Step::new(last, "Transitive Closure Computed!"));
    steps
}
