// Travelling salesman: seeded city layout, nearest neighbor, exhaustive search

use super::TourState;
use crate::step::{CancelToken, Step, Trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const EXACT_DEFAULT_CITIES: usize = 4;
pub const APPROX_DEFAULT_CITIES: usize = 15;
pub const MIN_CITIES: usize = 2;
/// Exhaustive search visits (n-1)! tours
pub const EXACT_MAX_CITIES: usize = 8;
pub const APPROX_MAX_CITIES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn distance(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Place `count` cities in the 600×400 canvas, keeping a 50 unit margin
pub fn generate_cities(count: usize, seed: u64) -> Vec<City> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| City {
            x: rng.gen_range(50.0..550.0_f64).round(),
            y: rng.gen_range(50.0..350.0_f64).round(),
        })
        .collect()
}

/// Closed tour length, returning to the first city
pub fn tour_cost(cities: &[City], path: &[usize]) -> f64 {
    path.windows(2)
        .map(|pair| cities[pair[0]].distance(&cities[pair[1]]))
        .sum()
}

/// Initialization and terminal step for a layout without cities
fn empty_tour() -> Trace<TourState> {
    Trace::Recorded(vec![
        Step::new(TourState::default(), "Starting with 0 cities"),
        Step::new(TourState::default(), "No cities to visit"),
    ])
}

struct NearestNeighbor {
    cities: Vec<City>,
    path: Vec<usize>,
    visited: Vec<bool>,
    cost: f64,
    /// Next unvisited city to compare against the current best
    next_candidate: usize,
    nearest: Option<(usize, f64)>,
    started: bool,
    done: bool,
}

impl NearestNeighbor {
    fn state(&self, probe: Option<(usize, usize)>) -> TourState {
        TourState {
            cities: self.cities.clone(),
            path: self.path.clone(),
            best: Vec::new(),
            best_cost: None,
            probe,
            cost: self.cost,
        }
    }

    fn current(&self) -> usize {
        self.path.last().copied().unwrap_or(0)
    }
}

impl Iterator for NearestNeighbor {
    type Item = Step<TourState>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            self.path.push(0);
            self.visited[0] = true;
            return Some(Step::new(self.state(None), "Starting at City 0"));
        }

        let current = self.current();

        if self.path.len() == self.cities.len() {
            self.cost += self.cities[current].distance(&self.cities[0]);
            self.path.push(0);
            self.done = true;
            let mut state = self.state(None);
            state.best = self.path.clone();
            state.best_cost = Some(self.cost);
            return Some(Step::new(
                state,
                format!("Returned to start. Total Cost: {}", self.cost.round()),
            ));
        }

        let candidate = (self.next_candidate..self.cities.len()).find(|&j| !self.visited[j]);
        if let Some(j) = candidate {
            self.next_candidate = j + 1;
            let d = self.cities[current].distance(&self.cities[j]);
            if self.nearest.map_or(true, |(_, best)| d < best) {
                self.nearest = Some((j, d));
            }
            return Some(Step::new(
                self.state(Some((current, j))),
                format!("Checking City {j} (Dist: {})", d.round()),
            ));
        }

        let (j, d) = self.nearest.take()?;
        self.next_candidate = 0;
        self.visited[j] = true;
        self.path.push(j);
        self.cost += d;
        Some(Step::new(
            self.state(None),
            format!("Moved to City {j} (Dist: {})", d.round()),
        ))
    }
}

/// Greedy tour from city 0, one step per candidate check and per move
pub fn nearest_neighbor(cities: &[City], cancel: &CancelToken) -> Trace<TourState> {
    if cities.is_empty() {
        return empty_tour();
    }
    Trace::live(
        NearestNeighbor {
            cities: cities.to_vec(),
            path: Vec::with_capacity(cities.len() + 1),
            visited: vec![false; cities.len()],
            cost: 0.0,
            next_candidate: 0,
            nearest: None,
            started: false,
            done: false,
        },
        cancel,
    )
}

/// Rearrange into the next lexicographic permutation; false once the last is passed
fn next_permutation(items: &mut [usize]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let Some(successor) = items.iter().rposition(|&x| x > items[pivot]) else {
        return false;
    };
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

struct Exhaustive {
    cities: Vec<City>,
    /// Visiting order of cities 1..n; city 0 is fixed as start and end
    order: Vec<usize>,
    best: Vec<usize>,
    best_cost: Option<f64>,
    started: bool,
    exhausted: bool,
    done: bool,
}

impl Iterator for Exhaustive {
    type Item = Step<TourState>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(Step::new(
                TourState {
                    cities: self.cities.clone(),
                    path: vec![0],
                    ..Default::default()
                },
                format!(
                    "Searching every tour of {} cities starting at City 0",
                    self.cities.len()
                ),
            ));
        }

        if self.exhausted {
            self.done = true;
            let cost = self.best_cost.unwrap_or(0.0);
            return Some(Step::new(
                TourState {
                    cities: self.cities.clone(),
                    path: self.best.clone(),
                    best: self.best.clone(),
                    best_cost: Some(cost),
                    probe: None,
                    cost,
                },
                format!("Optimal Path Found! Cost: {}", cost.round()),
            ));
        }

        let mut path = Vec::with_capacity(self.order.len() + 2);
        path.push(0);
        path.extend_from_slice(&self.order);
        path.push(0);
        let cost = tour_cost(&self.cities, &path);
        if self.best_cost.map_or(true, |best| cost < best) {
            self.best_cost = Some(cost);
            self.best = path.clone();
        }
        self.exhausted = !next_permutation(&mut self.order);

        Some(Step::new(
            TourState {
                cities: self.cities.clone(),
                path,
                best: self.best.clone(),
                best_cost: self.best_cost,
                probe: None,
                cost,
            },
            format!("Evaluating path cost: {}", cost.round()),
        ))
    }
}

/// Brute force over all tours with city 0 fixed, in lexicographic order
pub fn exact(cities: &[City], cancel: &CancelToken) -> Trace<TourState> {
    if cities.is_empty() {
        return empty_tour();
    }
    Trace::live(
        Exhaustive {
            cities: cities.to_vec(),
            order: (1..cities.len()).collect(),
            best: Vec::new(),
            best_cost: None,
            started: false,
            exhausted: false,
            done: false,
        },
        cancel,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<City> {
        [(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]
            .iter()
            .map(|&(x, y)| City { x, y })
            .collect()
    }

    #[test]
    fn test_cities_are_seeded() {
        let a = generate_cities(10, 42);
        let b = generate_cities(10, 42);
        assert_eq!(a, b);
        assert_ne!(a, generate_cities(10, 43));
        assert!(a
            .iter()
            .all(|c| (50.0..=550.0).contains(&c.x) && (50.0..=350.0).contains(&c.y)));
    }

    #[test]
    fn test_next_permutation_order() {
        let mut items = vec![1, 2, 3];
        let mut seen = vec![items.clone()];
        while next_permutation(&mut items) {
            seen.push(items.clone());
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[1], vec![1, 3, 2]);
        assert_eq!(seen[5], vec![3, 2, 1]);
    }

    #[test]
    fn test_exact_finds_perimeter() {
        let steps = exact(&square(), &CancelToken::new()).collect_steps();
        let evaluated = steps
            .iter()
            .filter(|s| s.message.starts_with("Evaluating"))
            .count();
        assert_eq!(evaluated, 6);
        let last = steps.last().unwrap();
        assert_eq!(last.message, "Optimal Path Found! Cost: 40");
        assert_eq!(last.state.best.first(), Some(&0));
        assert_eq!(last.state.best.last(), Some(&0));
    }

    #[test]
    fn test_nearest_neighbor_visits_every_city() {
        let steps = nearest_neighbor(&square(), &CancelToken::new()).collect_steps();
        let last = steps.last().unwrap();
        assert_eq!(last.state.path.len(), 5);
        let mut visited = last.state.path[..4].to_vec();
        visited.sort_unstable();
        assert_eq!(visited, vec![0, 1, 2, 3]);
        assert!(last.message.starts_with("Returned to start. Total Cost:"));
        assert_eq!(steps[0].message, "Starting at City 0");
    }

    #[test]
    fn test_nearest_neighbor_picks_closest() {
        let steps = nearest_neighbor(&square(), &CancelToken::new()).collect_steps();
        let first_move = steps
            .iter()
            .find(|s| s.message.starts_with("Moved"))
            .unwrap();
        assert_eq!(first_move.message, "Moved to City 2 (Dist: 10)");
    }

    #[test]
    fn test_no_cities() {
        for trace in [
            exact(&[], &CancelToken::new()),
            nearest_neighbor(&[], &CancelToken::new()),
        ] {
            let steps = trace.collect_steps();
            assert_eq!(steps.len(), 2);
            assert_eq!(steps[0].message, "Starting with 0 cities");
            assert_eq!(steps[1].message, "No cities to visit");
        }
    }
}
