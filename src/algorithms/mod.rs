//! Step generators for every algorithm in the catalog
//!
//! This module is organized into several submodules:
//! - [`search`]: Linear, binary, pattern matching, k-th smallest (quickselect)
//! - [`sort`]: Insertion, heap, merge and quick sort
//! - [`graph`]: BFS, DFS, Dijkstra and Prim over a shared [`Graph`]
//! - [`matrix`]: Floyd-Warshall shortest paths and Warshall transitive closure
//! - [`backtrack`]: N-Queens as a lazily stepped state machine
//! - [`design`]: Divide and conquer min/max with an explicit frame stack
//! - [`tsp`]: Seeded city placement, nearest neighbor and exhaustive tours
//! - [`scheduling`]: FCFS, SJF, SRTF, Round Robin and Priority simulators
//!
//! # State Families
//!
//! Each generator records snapshots of one state family. The families are
//! summed into [`Scene`], which is what the playback controller stores and the
//! visualization pane renders:
//!
//! | Family | Type | Rendered as |
//! |---|---|---|
//! | array | [`ArrayState`] | bars |
//! | text | [`MatchState`] | text strip with pattern window |
//! | graph | [`GraphState`] | node/edge canvas |
//! | matrix | [`MatrixState`] | table |
//! | board | [`BoardState`] | chessboard |
//! | schedule | [`ScheduleState`] | Gantt timeline + statistics |
//! | tour | [`TourState`] | city canvas |
//!
//! # Generation Contract
//!
//! Generators borrow their input and copy before mutating, emit an
//! initialization step first and a terminal step last, and are deterministic
//! for a fixed input. Expected negative outcomes ("not found", "no solution")
//! are terminal steps, never errors.

pub mod backtrack;
pub mod design;
pub mod graph;
pub mod matrix;
pub mod scheduling;
pub mod search;
pub mod sort;
pub mod tsp;

pub use graph::{Edge, Graph, Node};
pub use scheduling::{GanttBlock, Process, ScheduleStats};
pub use tsp::City;

use crate::playback::StepGenerator;
use crate::step::{CancelToken, Step, Trace};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Array bars with highlight roles
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArrayState {
    pub values: Vec<i64>,
    /// Indices being compared or moved in this step
    pub active: Vec<usize>,
    /// Indices known to be in their final position (or eliminated)
    pub settled: Vec<usize>,
    pub pivot: Option<usize>,
    /// Inclusive index range still under consideration
    pub window: Option<(usize, usize)>,
    /// Secondary cursor (midpoint, insertion key, heap root)
    pub marker: Option<usize>,
    pub found: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl ArrayState {
    pub fn new(values: Vec<i64>) -> Self {
        ArrayState {
            values,
            ..Default::default()
        }
    }
}

/// Naive pattern matching progress
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchState {
    pub text: String,
    pub pattern: String,
    /// Alignment of the pattern against the text
    pub position: Option<usize>,
    /// Pattern index being compared at `position + compared`
    pub compared: Option<usize>,
    pub mismatch: bool,
    pub matches: Vec<usize>,
}

/// Graph traversal progress; the graph itself lives in the input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphState {
    /// Nodes in the order they were visited or finalized
    pub visited: Vec<usize>,
    pub current: Option<usize>,
    /// Queue, stack or pending set, front first
    pub frontier: Vec<usize>,
    pub active_edge: Option<(usize, usize)>,
    /// Edges of the traversal tree, shortest path tree or MST
    pub tree_edges: Vec<(usize, usize)>,
    /// Per-node annotation (distance or key); empty for BFS/DFS
    pub labels: Vec<String>,
}

/// Distance (`None` = ∞) or reachability (0/1) matrix
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatrixState {
    pub cells: Vec<Vec<Option<i64>>>,
    /// `(k, i, j)` triple examined in this step
    pub cursor: Option<(usize, usize, usize)>,
    pub updated: bool,
    pub done: bool,
}

/// N-Queens board; `queens[r]` is the column of the queen in row `r`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    pub size: usize,
    pub queens: Vec<usize>,
    /// Square tried or removed in this step
    pub probe: Option<(usize, usize)>,
    pub conflict: bool,
    pub solved: bool,
}

/// Gantt chart progress of a scheduling simulation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleState {
    pub blocks: Vec<GanttBlock>,
    pub time: u32,
    /// Ready queue by process id, front first
    pub ready: Vec<u32>,
    pub running: Option<u32>,
    /// Filled in as processes complete, keyed by process id
    pub waiting: FxHashMap<u32, u32>,
    pub turnaround: FxHashMap<u32, u32>,
    pub completed: bool,
}

/// TSP tour progress
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TourState {
    pub cities: Vec<City>,
    pub path: Vec<usize>,
    pub best: Vec<usize>,
    pub best_cost: Option<f64>,
    /// Candidate edge being checked
    pub probe: Option<(usize, usize)>,
    pub cost: f64,
}

/// Snapshot of any algorithm, as stored by the controller
#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    Array(ArrayState),
    Text(MatchState),
    Graph(GraphState),
    Matrix(MatrixState),
    Board(BoardState),
    Schedule(ScheduleState),
    Tour(TourState),
}

impl From<ArrayState> for Scene {
    fn from(state: ArrayState) -> Self {
        Scene::Array(state)
    }
}

impl From<MatchState> for Scene {
    fn from(state: MatchState) -> Self {
        Scene::Text(state)
    }
}

impl From<GraphState> for Scene {
    fn from(state: GraphState) -> Self {
        Scene::Graph(state)
    }
}

impl From<MatrixState> for Scene {
    fn from(state: MatrixState) -> Self {
        Scene::Matrix(state)
    }
}

impl From<BoardState> for Scene {
    fn from(state: BoardState) -> Self {
        Scene::Board(state)
    }
}

impl From<ScheduleState> for Scene {
    fn from(state: ScheduleState) -> Self {
        Scene::Schedule(state)
    }
}

impl From<TourState> for Scene {
    fn from(state: TourState) -> Self {
        Scene::Tour(state)
    }
}

/// Catalog grouping, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    SearchingSorting,
    Graph,
    Design,
    Advanced,
    CpuScheduling,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::SearchingSorting,
        Category::Graph,
        Category::Design,
        Category::Advanced,
        Category::CpuScheduling,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::SearchingSorting => "Searching & Sorting",
            Category::Graph => "Graph Algorithms",
            Category::Design => "Algorithm Design",
            Category::Advanced => "Advanced Algorithms",
            Category::CpuScheduling => "CPU Scheduling",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    LinearSearch,
    BinarySearch,
    PatternMatching,
    InsertionSort,
    HeapSort,
    MergeSort,
    QuickSort,
    Bfs,
    Dfs,
    Dijkstra,
    Prim,
    Floyd,
    Warshall,
    DivideConquer,
    NQueens,
    TspExact,
    TspApprox,
    KthSmallest,
    Fcfs,
    Sjf,
    Srtf,
    RoundRobin,
    Priority,
}

impl Algorithm {
    /// Catalog order
    pub const ALL: [Algorithm; 23] = [
        Algorithm::LinearSearch,
        Algorithm::BinarySearch,
        Algorithm::PatternMatching,
        Algorithm::InsertionSort,
        Algorithm::HeapSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Prim,
        Algorithm::Floyd,
        Algorithm::Warshall,
        Algorithm::DivideConquer,
        Algorithm::NQueens,
        Algorithm::TspExact,
        Algorithm::TspApprox,
        Algorithm::KthSmallest,
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "linear-search",
            Algorithm::BinarySearch => "binary-search",
            Algorithm::PatternMatching => "pattern-matching",
            Algorithm::InsertionSort => "insertion-sort",
            Algorithm::HeapSort => "heap-sort",
            Algorithm::MergeSort => "merge-sort",
            Algorithm::QuickSort => "quick-sort",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Prim => "prim",
            Algorithm::Floyd => "floyd",
            Algorithm::Warshall => "warshall",
            Algorithm::DivideConquer => "divide-conquer",
            Algorithm::NQueens => "n-queens",
            Algorithm::TspExact => "tsp-exact",
            Algorithm::TspApprox => "tsp-approx",
            Algorithm::KthSmallest => "kth-smallest",
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::Srtf => "srtf",
            Algorithm::RoundRobin => "round-robin",
            Algorithm::Priority => "priority-aging",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "Linear Search",
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::PatternMatching => "Naive Pattern Matching",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::HeapSort => "Heap Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::Bfs => "Breadth First Search",
            Algorithm::Dfs => "Depth First Search",
            Algorithm::Dijkstra => "Dijkstra's Algorithm",
            Algorithm::Prim => "Prim's Algorithm",
            Algorithm::Floyd => "Floyd's Algorithm",
            Algorithm::Warshall => "Warshall's Algorithm",
            Algorithm::DivideConquer => "Divide & Conquer (Max/Min)",
            Algorithm::NQueens => "N-Queens Problem",
            Algorithm::TspExact => "TSP - Exact Solution",
            Algorithm::TspApprox => "TSP - Approximation",
            Algorithm::KthSmallest => "Kth Smallest Element",
            Algorithm::Fcfs => "First Come First Served",
            Algorithm::Sjf => "Shortest Job First",
            Algorithm::Srtf => "Shortest Remaining Time First",
            Algorithm::RoundRobin => "Round Robin",
            Algorithm::Priority => "Priority Scheduling with Aging",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Algorithm::LinearSearch
            | Algorithm::BinarySearch
            | Algorithm::PatternMatching
            | Algorithm::InsertionSort
            | Algorithm::HeapSort
            | Algorithm::MergeSort
            | Algorithm::QuickSort => Category::SearchingSorting,
            Algorithm::Bfs
            | Algorithm::Dfs
            | Algorithm::Dijkstra
            | Algorithm::Prim
            | Algorithm::Floyd
            | Algorithm::Warshall => Category::Graph,
            Algorithm::DivideConquer | Algorithm::NQueens => Category::Design,
            Algorithm::TspExact | Algorithm::TspApprox | Algorithm::KthSmallest => {
                Category::Advanced
            }
            Algorithm::Fcfs
            | Algorithm::Sjf
            | Algorithm::Srtf
            | Algorithm::RoundRobin
            | Algorithm::Priority => Category::CpuScheduling,
        }
    }

    /// Default playback pacing in milliseconds
    pub fn interval_ms(self) -> u64 {
        match self {
            Algorithm::LinearSearch | Algorithm::InsertionSort => 1000,
            Algorithm::BinarySearch | Algorithm::Bfs | Algorithm::Dfs => 1200,
            Algorithm::PatternMatching | Algorithm::MergeSort | Algorithm::DivideConquer => 800,
            Algorithm::QuickSort | Algorithm::HeapSort => 900,
            Algorithm::Dijkstra | Algorithm::Prim => 1500,
            Algorithm::Floyd | Algorithm::Warshall => 100,
            Algorithm::NQueens | Algorithm::KthSmallest => 500,
            Algorithm::TspExact => 50,
            Algorithm::TspApprox => 300,
            Algorithm::Fcfs
            | Algorithm::Sjf
            | Algorithm::RoundRobin
            | Algorithm::Priority => 1500,
            Algorithm::Srtf => 1000,
        }
    }

    /// Whether the generator yields steps lazily instead of precomputing them
    pub fn is_live(self) -> bool {
        matches!(
            self,
            Algorithm::NQueens
                | Algorithm::DivideConquer
                | Algorithm::TspExact
                | Algorithm::TspApprox
        )
    }

    pub fn from_slug(slug: &str) -> Option<Algorithm> {
        Algorithm::ALL.into_iter().find(|a| a.slug() == slug)
    }

    /// Resolve `/algorithm/<slug>` (or a bare slug). `/` and unknown paths give `None`.
    pub fn from_route(route: &str) -> Option<Algorithm> {
        let trimmed = route.trim().trim_end_matches('/');
        let slug = trimmed.strip_prefix("/algorithm/").unwrap_or(trimmed);
        Algorithm::from_slug(slug)
    }

    /// Shipped default input. `seed` only affects the TSP city layout.
    pub fn default_input(self, seed: u64) -> AlgorithmInput {
        match self {
            Algorithm::LinearSearch => AlgorithmInput::Search {
                array: vec![64, 34, 25, 12, 22, 11, 90],
                target: 22,
            },
            Algorithm::BinarySearch => AlgorithmInput::Search {
                array: vec![11, 22, 33, 44, 55, 66, 77, 88, 99],
                target: 55,
            },
            Algorithm::PatternMatching => AlgorithmInput::Text {
                text: "AABAACAADAABAABA".to_string(),
                pattern: "AABA".to_string(),
            },
            Algorithm::InsertionSort | Algorithm::HeapSort => AlgorithmInput::Array {
                array: vec![12, 11, 13, 5, 6, 7],
            },
            Algorithm::MergeSort => AlgorithmInput::Array {
                array: vec![38, 27, 43, 3, 9, 82, 10],
            },
            Algorithm::QuickSort => AlgorithmInput::Array {
                array: vec![10, 7, 8, 9, 1, 5],
            },
            Algorithm::DivideConquer => AlgorithmInput::Array {
                array: vec![1000, 11, 445, 1, 330, 3000],
            },
            Algorithm::KthSmallest => AlgorithmInput::Select {
                array: vec![7, 10, 4, 3, 20, 15, 1, 30, 25],
                k: 3,
            },
            Algorithm::Bfs | Algorithm::Dfs => AlgorithmInput::Graph {
                graph: graph::traversal_graph(),
                start: 0,
            },
            Algorithm::Dijkstra => AlgorithmInput::Graph {
                graph: graph::dijkstra_graph(),
                start: 0,
            },
            Algorithm::Prim => AlgorithmInput::Graph {
                graph: graph::prim_graph(),
                start: 0,
            },
            Algorithm::Floyd => AlgorithmInput::Matrix {
                cells: matrix::floyd_default(),
            },
            Algorithm::Warshall => AlgorithmInput::Matrix {
                cells: matrix::warshall_default(),
            },
            Algorithm::NQueens => AlgorithmInput::Board { n: 4 },
            Algorithm::TspExact => AlgorithmInput::Cities {
                cities: tsp::generate_cities(tsp::EXACT_DEFAULT_CITIES, seed),
                seed,
            },
            Algorithm::TspApprox => AlgorithmInput::Cities {
                cities: tsp::generate_cities(tsp::APPROX_DEFAULT_CITIES, seed),
                seed,
            },
            Algorithm::Fcfs => AlgorithmInput::Processes {
                processes: scheduling::fcfs_default(),
                quantum: scheduling::DEFAULT_QUANTUM,
            },
            Algorithm::Sjf => AlgorithmInput::Processes {
                processes: scheduling::sjf_default(),
                quantum: scheduling::DEFAULT_QUANTUM,
            },
            Algorithm::Srtf => AlgorithmInput::Processes {
                processes: scheduling::srtf_default(),
                quantum: scheduling::DEFAULT_QUANTUM,
            },
            Algorithm::RoundRobin => AlgorithmInput::Processes {
                processes: scheduling::round_robin_default(),
                quantum: scheduling::DEFAULT_QUANTUM,
            },
            Algorithm::Priority => AlgorithmInput::Processes {
                processes: scheduling::priority_default(),
                quantum: scheduling::DEFAULT_QUANTUM,
            },
        }
    }

    /// Message shown before the first step
    pub fn idle_message(self) -> String {
        match self {
            Algorithm::TspExact => "Cities generated. Click Play to find shortest path.".to_string(),
            Algorithm::TspApprox => {
                "Cities generated. Click Start to run Nearest Neighbor.".to_string()
            }
            other => format!("Click Play to start {}", other.title()),
        }
    }
}

/// User-editable parameters, one shape per input family
#[derive(Debug, Clone, PartialEq)]
pub enum AlgorithmInput {
    Search { array: Vec<i64>, target: i64 },
    Array { array: Vec<i64> },
    Select { array: Vec<i64>, k: i64 },
    Text { text: String, pattern: String },
    Graph { graph: Graph, start: usize },
    Matrix { cells: Vec<Vec<Option<i64>>> },
    Board { n: usize },
    Cities { cities: Vec<City>, seed: u64 },
    Processes { processes: Vec<Process>, quantum: u32 },
}

/// An algorithm paired with the input it will run against
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub algorithm: Algorithm,
    pub input: AlgorithmInput,
}

impl Instance {
    pub fn new(algorithm: Algorithm, input: AlgorithmInput) -> Self {
        Instance { algorithm, input }
    }

    pub fn with_defaults(algorithm: Algorithm, seed: u64) -> Self {
        Instance {
            algorithm,
            input: algorithm.default_input(seed),
        }
    }

    /// The graph the trace refers to, for graph-family algorithms
    pub fn graph(&self) -> Option<&Graph> {
        match &self.input {
            AlgorithmInput::Graph { graph, .. } => Some(graph),
            _ => None,
        }
    }

    pub fn processes(&self) -> Option<&[Process]> {
        match &self.input {
            AlgorithmInput::Processes { processes, .. } => Some(processes),
            _ => None,
        }
    }

    /// Run the generator to completion and return every step
    pub fn run(&self) -> Vec<Step<Scene>> {
        self.generate(&CancelToken::new()).collect_steps()
    }

    fn mismatch(&self) -> Trace<Scene> {
        Trace::Recorded(vec![Step::new(
            Scene::Array(ArrayState::default()),
            format!("No {} input to run", self.algorithm.title()),
        )])
    }
}

fn recorded<S: Into<Scene>>(steps: Vec<Step<S>>) -> Trace<Scene> {
    Trace::Recorded(steps.into_iter().map(|s| s.map(Into::into)).collect())
}

impl StepGenerator for Instance {
    type State = Scene;

    fn generate(&self, cancel: &CancelToken) -> Trace<Scene> {
        use AlgorithmInput as I;

        debug!(algorithm = self.algorithm.slug(), "generating trace");
        match (self.algorithm, &self.input) {
            (Algorithm::LinearSearch, I::Search { array, target }) => {
                recorded(search::linear_search(array, *target))
            }
            (Algorithm::BinarySearch, I::Search { array, target }) => {
                recorded(search::binary_search(array, *target))
            }
            (Algorithm::PatternMatching, I::Text { text, pattern }) => {
                recorded(search::pattern_match(text, pattern))
            }
            (Algorithm::KthSmallest, I::Select { array, k }) => {
                recorded(search::kth_smallest(array, *k))
            }
            (Algorithm::InsertionSort, I::Array { array }) => {
                recorded(sort::insertion_sort(array))
            }
            (Algorithm::HeapSort, I::Array { array }) => recorded(sort::heap_sort(array)),
            (Algorithm::MergeSort, I::Array { array }) => recorded(sort::merge_sort(array)),
            (Algorithm::QuickSort, I::Array { array }) => recorded(sort::quick_sort(array)),
            (Algorithm::DivideConquer, I::Array { array }) => {
                design::min_max(array, cancel).map(Scene::Array)
            }
            (Algorithm::Bfs, I::Graph { graph, start }) => recorded(graph::bfs(graph, *start)),
            (Algorithm::Dfs, I::Graph { graph, start }) => recorded(graph::dfs(graph, *start)),
            (Algorithm::Dijkstra, I::Graph { graph, start }) => {
                recorded(graph::dijkstra(graph, *start))
            }
            (Algorithm::Prim, I::Graph { graph, start }) => recorded(graph::prim(graph, *start)),
            (Algorithm::Floyd, I::Matrix { cells }) => recorded(matrix::floyd_warshall(cells)),
            (Algorithm::Warshall, I::Matrix { cells }) => recorded(matrix::warshall(cells)),
            (Algorithm::NQueens, I::Board { n }) => {
                backtrack::n_queens(*n, cancel).map(Scene::Board)
            }
            (Algorithm::TspExact, I::Cities { cities, .. }) => {
                tsp::exact(cities, cancel).map(Scene::Tour)
            }
            (Algorithm::TspApprox, I::Cities { cities, .. }) => {
                tsp::nearest_neighbor(cities, cancel).map(Scene::Tour)
            }
            (Algorithm::Fcfs, I::Processes { processes, .. }) => {
                recorded(scheduling::fcfs(processes))
            }
            (Algorithm::Sjf, I::Processes { processes, .. }) => {
                recorded(scheduling::sjf(processes))
            }
            (Algorithm::Srtf, I::Processes { processes, .. }) => {
                recorded(scheduling::srtf(processes))
            }
            (Algorithm::RoundRobin, I::Processes { processes, quantum }) => {
                recorded(scheduling::round_robin(processes, *quantum))
            }
            (Algorithm::Priority, I::Processes { processes, .. }) => {
                recorded(scheduling::priority(processes))
            }
            _ => self.mismatch(),
        }
    }

    fn idle_message(&self) -> String {
        self.algorithm.idle_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_are_unique_and_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_slug(algorithm.slug()), Some(algorithm));
        }
        let mut slugs: Vec<_> = Algorithm::ALL.iter().map(|a| a.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), 23);
    }

    #[test]
    fn test_routes() {
        assert_eq!(Algorithm::from_route("/algorithm/dijkstra"), Some(Algorithm::Dijkstra));
        assert_eq!(Algorithm::from_route("/algorithm/fcfs/"), Some(Algorithm::Fcfs));
        assert_eq!(Algorithm::from_route("quick-sort"), Some(Algorithm::QuickSort));
        assert_eq!(Algorithm::from_route("/"), None);
        assert_eq!(Algorithm::from_route("/algorithm/bogo-sort"), None);
    }

    #[test]
    fn test_every_default_generates_init_and_terminal() {
        for algorithm in Algorithm::ALL {
            let steps = Instance::with_defaults(algorithm, 7).run();
            assert!(steps.len() >= 2, "{} produced {} steps", algorithm.slug(), steps.len());
        }
    }

    #[test]
    fn test_live_flag_matches_trace_kind() {
        let cancel = CancelToken::new();
        for algorithm in Algorithm::ALL {
            let trace = Instance::with_defaults(algorithm, 1).generate(&cancel);
            assert_eq!(trace.is_live(), algorithm.is_live(), "{}", algorithm.slug());
        }
    }

    #[test]
    fn test_mismatched_input_is_a_terminal_step() {
        let instance = Instance::new(Algorithm::Bfs, AlgorithmInput::Board { n: 4 });
        let steps = instance.run();
        assert_eq!(steps.len(), 1);
        assert!(steps[0].message.contains("Breadth First Search"));
    }
}
