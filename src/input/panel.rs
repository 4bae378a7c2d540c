// Editable text fields for the selected algorithm's input

use super::parse::{
    format_edges, format_matrix, format_number_list, format_processes, parse_edges,
    parse_int_prefix, parse_matrix, parse_number_list, parse_number_or, parse_processes,
};
use crate::algorithms::backtrack::MAX_BOARD;
use crate::algorithms::{tsp, Algorithm, AlgorithmInput, Instance};
use crate::errors::InputError;
use tracing::{debug, warn};

/// One labelled text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(key: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Field {
            key,
            label,
            value: value.into(),
        }
    }
}

/// Form state for one algorithm. Edits stay local until [`InputPanel::apply`].
#[derive(Debug, Clone)]
pub struct InputPanel {
    algorithm: Algorithm,
    fields: Vec<Field>,
    selected: usize,
    /// Seed the shipped defaults were generated with
    seed: u64,
}

impl InputPanel {
    /// Fields showing the shipped defaults
    pub fn new(algorithm: Algorithm, seed: u64) -> Self {
        let instance = Instance::with_defaults(algorithm, seed);
        Self::from_instance(&instance, seed)
    }

    /// Fields showing the input the instance currently runs against
    pub fn from_instance(instance: &Instance, seed: u64) -> Self {
        InputPanel {
            algorithm: instance.algorithm,
            fields: fields_for(instance),
            selected: 0,
            seed,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn value(&self, key: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map_or("", |f| f.value.as_str())
    }

    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.key == key) {
            field.value = value.into();
        }
    }

    pub fn select_next(&mut self) {
        if !self.fields.is_empty() {
            self.selected = (self.selected + 1) % self.fields.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.fields.is_empty() {
            self.selected = (self.selected + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.selected) {
            field.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.selected) {
            field.value.pop();
        }
    }

    pub fn clear_field(&mut self) {
        if let Some(field) = self.fields.get_mut(self.selected) {
            field.value.clear();
        }
    }

    /// Reset every field to the shipped default input
    pub fn restore_defaults(&mut self) {
        let selected = self.selected;
        *self = InputPanel::new(self.algorithm, self.seed);
        self.selected = selected.min(self.fields.len().saturating_sub(1));
        debug!(algorithm = self.algorithm.slug(), "input restored to defaults");
    }

    /// Move the TSP seed forward so the next apply lays out new cities
    pub fn reseed(&mut self) {
        let seed = parse_int_prefix(self.value("seed"))
            .map_or(self.seed, |s| s.unsigned_abs())
            .wrapping_add(1);
        self.set_value("seed", seed.to_string());
    }

    /// Parse the fields into a new input
    pub fn apply(&self) -> Result<AlgorithmInput, InputError> {
        let defaults = self.algorithm.default_input(self.seed);
        let result = self.parse(defaults);
        match &result {
            Ok(_) => debug!(algorithm = self.algorithm.slug(), "input parsed"),
            Err(error) => warn!(algorithm = self.algorithm.slug(), %error, "input rejected"),
        }
        result
    }

    fn parse(&self, defaults: AlgorithmInput) -> Result<AlgorithmInput, InputError> {
        use AlgorithmInput as I;

        Ok(match defaults {
            I::Search { target, .. } => {
                let mut array = parse_number_list(self.value("array"));
                if self.algorithm == Algorithm::BinarySearch {
                    array.sort_unstable();
                }
                I::Search {
                    array,
                    target: parse_int_prefix(self.value("target")).unwrap_or(target),
                }
            }
            I::Array { .. } => I::Array {
                array: parse_number_list(self.value("array")),
            },
            I::Select { k, .. } => I::Select {
                array: parse_number_list(self.value("array")),
                k: parse_int_prefix(self.value("k")).unwrap_or(k),
            },
            I::Text { .. } => I::Text {
                text: self.value("text").to_string(),
                pattern: self.value("pattern").to_string(),
            },
            I::Graph { graph, start } => {
                if graph.nodes.is_empty() {
                    return Err(InputError::EmptyGraph);
                }
                let label = self.value("start").trim();
                let start = if label.is_empty() {
                    start
                } else {
                    graph
                        .index_of(label)
                        .ok_or_else(|| InputError::UnknownNode(label.to_string()))?
                };
                let edges = parse_edges(&graph, self.value("edges"));
                I::Graph {
                    graph: graph.with_edges(edges),
                    start,
                }
            }
            I::Matrix { .. } => I::Matrix {
                cells: parse_matrix(self.value("matrix"))?,
            },
            I::Board { n } => {
                let size = parse_number_or(self.value("n"), n as i64);
                if size < 1 || size > MAX_BOARD as i64 {
                    return Err(InputError::BoardSize {
                        size,
                        max: MAX_BOARD,
                    });
                }
                I::Board { n: size as usize }
            }
            I::Cities { cities, seed } => {
                let (min, max) = match self.algorithm {
                    Algorithm::TspExact => (tsp::MIN_CITIES, tsp::EXACT_MAX_CITIES),
                    _ => (tsp::MIN_CITIES, tsp::APPROX_MAX_CITIES),
                };
                let count = parse_number_or(self.value("cities"), cities.len() as i64);
                if count < min as i64 || count > max as i64 {
                    return Err(InputError::CityCount { count, min, max });
                }
                let seed = parse_int_prefix(self.value("seed")).map_or(seed, |s| s.unsigned_abs());
                I::Cities {
                    cities: tsp::generate_cities(count as usize, seed),
                    seed,
                }
            }
            I::Processes { quantum, .. } => {
                let processes = parse_processes(self.value("processes"));
                if processes.is_empty() {
                    return Err(InputError::EmptyProcessList);
                }
                let quantum = match self.algorithm {
                    Algorithm::RoundRobin => {
                        let q = parse_int_prefix(self.value("quantum")).unwrap_or(i64::from(quantum));
                        if q < 1 {
                            return Err(InputError::InvalidQuantum);
                        }
                        u32::try_from(q).unwrap_or(u32::MAX)
                    }
                    _ => quantum,
                };
                I::Processes { processes, quantum }
            }
        })
    }
}

fn fields_for(instance: &Instance) -> Vec<Field> {
    use AlgorithmInput as I;

    match &instance.input {
        I::Search { array, target } => vec![
            Field::new("array", "Array (comma-separated)", format_number_list(array)),
            Field::new("target", "Target", target.to_string()),
        ],
        I::Array { array } => vec![Field::new(
            "array",
            "Array (comma-separated)",
            format_number_list(array),
        )],
        I::Select { array, k } => vec![
            Field::new("array", "Array (comma-separated)", format_number_list(array)),
            Field::new("k", "k", k.to_string()),
        ],
        I::Text { text, pattern } => vec![
            Field::new("text", "Text to search in", text.clone()),
            Field::new("pattern", "Pattern", pattern.clone()),
        ],
        I::Graph { graph, start } => vec![
            Field::new("edges", "Edges (A-B:weight, ...)", format_edges(graph)),
            Field::new("start", "Start Node", graph.label(*start)),
        ],
        I::Matrix { cells } => vec![Field::new(
            "matrix",
            "Matrix (rows by ';', inf = no edge)",
            format_matrix(cells),
        )],
        I::Board { n } => vec![Field::new("n", "Board Size (N)", n.to_string())],
        I::Cities { cities, seed } => vec![
            Field::new("cities", "Number of Cities", cities.len().to_string()),
            Field::new("seed", "Layout Seed", seed.to_string()),
        ],
        I::Processes { processes, quantum } => {
            let label = if processes.iter().any(|p| p.priority.is_some()) {
                "Processes (name arrival burst priority; ...)"
            } else {
                "Processes (name arrival burst; ...)"
            };
            let mut fields = vec![Field::new("processes", label, format_processes(processes))];
            if instance.algorithm == Algorithm::RoundRobin {
                fields.push(Field::new("quantum", "Time Quantum", quantum.to_string()));
            }
            fields
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip() {
        for algorithm in Algorithm::ALL {
            let panel = InputPanel::new(algorithm, 3);
            assert_eq!(
                panel.apply(),
                Ok(algorithm.default_input(3)),
                "{}",
                algorithm.slug()
            );
        }
    }

    #[test]
    fn test_binary_search_input_is_sorted() {
        let mut panel = InputPanel::new(Algorithm::BinarySearch, 0);
        panel.set_value("array", "30, 10, oops, 20");
        let Ok(AlgorithmInput::Search { array, .. }) = panel.apply() else {
            panic!("expected search input");
        };
        assert_eq!(array, vec![10, 20, 30]);
    }

    #[test]
    fn test_board_size_out_of_range() {
        let mut panel = InputPanel::new(Algorithm::NQueens, 0);
        panel.set_value("n", "13");
        assert_eq!(
            panel.apply(),
            Err(InputError::BoardSize { size: 13, max: 12 })
        );
    }

    #[test]
    fn test_empty_processes_rejected() {
        let mut panel = InputPanel::new(Algorithm::Fcfs, 0);
        panel.set_value("processes", " ; ");
        assert_eq!(panel.apply(), Err(InputError::EmptyProcessList));
    }

    #[test]
    fn test_zero_quantum_rejected() {
        let mut panel = InputPanel::new(Algorithm::RoundRobin, 0);
        panel.set_value("quantum", "0");
        assert_eq!(panel.apply(), Err(InputError::InvalidQuantum));
    }

    #[test]
    fn test_unknown_start_node() {
        let mut panel = InputPanel::new(Algorithm::Bfs, 0);
        panel.set_value("start", "Q");
        assert_eq!(panel.apply(), Err(InputError::UnknownNode("Q".to_string())));
    }

    #[test]
    fn test_editing_and_restore() {
        let mut panel = InputPanel::new(Algorithm::LinearSearch, 0);
        panel.select_next();
        panel.clear_field();
        panel.insert_char('9');
        assert_eq!(panel.value("target"), "9");
        panel.backspace();
        assert_eq!(panel.value("target"), "");
        panel.restore_defaults();
        assert_eq!(panel.value("target"), "22");
        assert_eq!(panel.selected(), 1);
    }

    #[test]
    fn test_reseed_changes_cities() {
        let mut panel = InputPanel::new(Algorithm::TspApprox, 5);
        panel.reseed();
        assert_eq!(panel.value("seed"), "6");
        let Ok(AlgorithmInput::Cities { cities, seed }) = panel.apply() else {
            panic!("expected cities");
        };
        assert_eq!(seed, 6);
        assert_eq!(cities, tsp::generate_cities(tsp::APPROX_DEFAULT_CITIES, 6));
    }
}
