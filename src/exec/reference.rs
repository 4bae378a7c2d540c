// Reference Python programs, rendered against the current input

use crate::algorithms::{Algorithm, AlgorithmInput, Category, City, Graph, Instance, Process};
use std::fmt::Write;

/// Python source that runs the textbook version of the instance's algorithm on
/// its input and prints the result
pub fn reference_source(instance: &Instance) -> String {
    let mut source = String::new();
    source.push_str(&bindings(&instance.input));
    source.push('\n');
    source.push_str(body(instance.algorithm));
    if instance.algorithm.category() == Category::CpuScheduling {
        source.push_str(SCHEDULE_REPORT);
    }
    source
}

fn py_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn py_list(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(i64::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn py_graph(graph: &Graph) -> String {
    let adjacency = graph.adjacency();
    let mut out = String::from("{\n");
    for (index, neighbors) in adjacency.iter().enumerate() {
        let entries: Vec<String> = neighbors
            .iter()
            .map(|&(to, weight)| format!("{}: {weight}", py_str(graph.label(to))))
            .collect();
        let _ = writeln!(out, "    {}: {{{}}},", py_str(graph.label(index)), entries.join(", "));
    }
    out.push('}');
    out
}

fn py_cities(cities: &[City]) -> String {
    let items: Vec<String> = cities.iter().map(|c| format!("({}, {})", c.x, c.y)).collect();
    format!("[{}]", items.join(", "))
}

fn py_processes(processes: &[Process]) -> String {
    let mut out = String::from("[\n");
    for p in processes {
        let _ = writeln!(
            out,
            "    {{'id': {}, 'arrival': {}, 'burst': {}, 'priority': {}}},",
            py_str(&p.name),
            p.arrival,
            p.burst,
            p.priority.unwrap_or(0)
        );
    }
    out.push(']');
    out
}

fn bindings(input: &AlgorithmInput) -> String {
    match input {
        AlgorithmInput::Search { array, target } => {
            format!("arr = {}\ntarget = {target}\n", py_list(array))
        }
        AlgorithmInput::Array { array } => format!("arr = {}\n", py_list(array)),
        AlgorithmInput::Select { array, k } => format!("arr = {}\nk = {k}\n", py_list(array)),
        AlgorithmInput::Text { text, pattern } => {
            format!("text = {}\npattern = {}\n", py_str(text), py_str(pattern))
        }
        AlgorithmInput::Graph { graph, start } => format!(
            "graph = {}\nstart = {}\n",
            py_graph(graph),
            py_str(graph.label(*start))
        ),
        AlgorithmInput::Matrix { cells } => {
            let rows: Vec<String> = cells
                .iter()
                .map(|row| {
                    let items: Vec<String> = row
                        .iter()
                        .map(|c| c.map_or_else(|| "INF".to_string(), |v| v.to_string()))
                        .collect();
                    format!("    [{}],", items.join(", "))
                })
                .collect();
            format!("INF = float('inf')\nmatrix = [\n{}\n]\n", rows.join("\n"))
        }
        AlgorithmInput::Board { n } => format!("n = {n}\n"),
        AlgorithmInput::Cities { cities, .. } => format!("cities = {}\n", py_cities(cities)),
        AlgorithmInput::Processes { processes, quantum } => format!(
            "processes = {}\ntime_quantum = {quantum}\n",
            py_processes(processes)
        ),
    }
}

const LINEAR_SEARCH: &str = r#"def linear_search(arr, target):
    for i in range(len(arr)):
        if arr[i] == target:
            return i
    return -1

result = linear_search(arr, target)
if result != -1:
    print(f"Element {target} found at index {result}")
else:
    print(f"Element {target} not found in the array")
print(f"\nArray: {arr}")
print(f"Target: {target}")
"#;

const BINARY_SEARCH: &str = r#"def binary_search(arr, target, left, right):
    if left > right:
        return -1
    mid = (left + right) // 2
    if arr[mid] == target:
        return mid
    if target < arr[mid]:
        return binary_search(arr, target, left, mid - 1)
    return binary_search(arr, target, mid + 1, right)

result = binary_search(arr, target, 0, len(arr) - 1)
if result != -1:
    print(f"Element {target} found at index {result}")
else:
    print(f"Element {target} not found in the array")
print(f"\nSorted Array: {arr}")
print(f"Target: {target}")
"#;

const PATTERN_MATCHING: &str = r#"def naive_search(text, pattern):
    n, m = len(text), len(pattern)
    found = []
    for i in range(n - m + 1):
        j = 0
        while j < m and text[i + j] == pattern[j]:
            j += 1
        if m > 0 and j == m:
            found.append(i)
    return found

matches = naive_search(text, pattern)
print(f"Text: {text}")
print(f"Pattern: {pattern}")
if matches:
    print(f"Pattern found at indices: {matches}")
else:
    print("Pattern not found")
"#;

const INSERTION_SORT: &str = r#"def insertion_sort(arr):
    for i in range(1, len(arr)):
        key = arr[i]
        j = i - 1
        while j >= 0 and arr[j] > key:
            arr[j + 1] = arr[j]
            j -= 1
        arr[j + 1] = key
    return arr

print(f"Original array: {arr}")
print(f"Sorted array: {insertion_sort(list(arr))}")
"#;

const MERGE_SORT: &str = r#"def merge_sort(arr):
    if len(arr) <= 1:
        return arr
    mid = len(arr) // 2
    left = merge_sort(arr[:mid])
    right = merge_sort(arr[mid:])
    merged = []
    i = j = 0
    while i < len(left) and j < len(right):
        if left[i] <= right[j]:
            merged.append(left[i])
            i += 1
        else:
            merged.append(right[j])
            j += 1
    merged.extend(left[i:])
    merged.extend(right[j:])
    return merged

print(f"Original array: {arr}")
print(f"Sorted array: {merge_sort(arr)}")
"#;

const QUICK_SORT: &str = r#"def partition(arr, low, high):
    pivot = arr[high]
    i = low - 1
    for j in range(low, high):
        if arr[j] < pivot:
            i += 1
            arr[i], arr[j] = arr[j], arr[i]
    arr[i + 1], arr[high] = arr[high], arr[i + 1]
    return i + 1

def quick_sort(arr, low, high):
    if low < high:
        p = partition(arr, low, high)
        quick_sort(arr, low, p - 1)
        quick_sort(arr, p + 1, high)

data = list(arr)
quick_sort(data, 0, len(data) - 1)
print(f"Original array: {arr}")
print(f"Sorted array: {data}")
"#;

const HEAP_SORT: &str = r#"def heapify(arr, n, i):
    largest = i
    left, right = 2 * i + 1, 2 * i + 2
    if left < n and arr[left] > arr[largest]:
        largest = left
    if right < n and arr[right] > arr[largest]:
        largest = right
    if largest != i:
        arr[i], arr[largest] = arr[largest], arr[i]
        heapify(arr, n, largest)

def heap_sort(arr):
    n = len(arr)
    for i in range(n // 2 - 1, -1, -1):
        heapify(arr, n, i)
    for end in range(n - 1, 0, -1):
        arr[0], arr[end] = arr[end], arr[0]
        heapify(arr, end, 0)
    return arr

print(f"Original array: {arr}")
print(f"Sorted array: {heap_sort(list(arr))}")
"#;

const BFS: &str = r#"from collections import deque

def bfs(graph, start):
    visited = [start]
    queue = deque([start])
    while queue:
        node = queue.popleft()
        print(f"Visiting {node}")
        for neighbor in graph[node]:
            if neighbor not in visited:
                visited.append(neighbor)
                queue.append(neighbor)
    return visited

print(f"BFS order: {bfs(graph, start)}")
"#;

const DFS: &str = r#"def dfs(graph, node, visited):
    visited.append(node)
    print(f"Visiting {node}")
    for neighbor in graph[node]:
        if neighbor not in visited:
            dfs(graph, neighbor, visited)
    return visited

print(f"DFS order: {dfs(graph, start, [])}")
"#;

const DIJKSTRA: &str = r#"import heapq

def dijkstra(graph, start):
    distances = {node: float('inf') for node in graph}
    distances[start] = 0
    pq = [(0, start)]
    while pq:
        dist, node = heapq.heappop(pq)
        if dist > distances[node]:
            continue
        print(f"Visiting {node} (Dist: {dist})")
        for neighbor, weight in graph[node].items():
            candidate = dist + weight
            if candidate < distances[neighbor]:
                distances[neighbor] = candidate
                heapq.heappush(pq, (candidate, neighbor))
                print(f"  Updated {neighbor}: {candidate}")
    return distances

for node, dist in dijkstra(graph, start).items():
    print(f"{start} -> {node}: {dist}")
"#;

const PRIM: &str = r#"import heapq

def prim(graph, start):
    in_tree = {start}
    edges = [(w, start, v) for v, w in graph[start].items()]
    heapq.heapify(edges)
    mst = []
    while edges and len(in_tree) < len(graph):
        w, u, v = heapq.heappop(edges)
        if v in in_tree:
            continue
        in_tree.add(v)
        mst.append((u, v, w))
        print(f"Added edge {u}-{v} (weight {w})")
        for nxt, nw in graph[v].items():
            if nxt not in in_tree:
                heapq.heappush(edges, (nw, v, nxt))
    return mst

mst = prim(graph, start)
print(f"Total MST weight: {sum(w for _, _, w in mst)}")
"#;

const FLOYD: &str = r#"def floyd_warshall(dist):
    n = len(dist)
    dist = [row[:] for row in dist]
    for k in range(n):
        for i in range(n):
            for j in range(n):
                if dist[i][k] + dist[k][j] < dist[i][j]:
                    dist[i][j] = dist[i][k] + dist[k][j]
    return dist

for row in floyd_warshall(matrix):
    print(" ".join("INF" if x == INF else str(x) for x in row))
"#;

const WARSHALL: &str = r#"def warshall(graph):
    n = len(graph)
    reach = [[0 if x in (0, INF) else 1 for x in row] for row in graph]
    for k in range(n):
        for i in range(n):
            for j in range(n):
                reach[i][j] = reach[i][j] or (reach[i][k] and reach[k][j])
    return reach

print("Transitive Closure:")
for row in warshall(matrix):
    print(" ".join(str(x) for x in row))
"#;

const DIVIDE_CONQUER: &str = r#"def min_max(arr, low, high):
    if low == high:
        return arr[low], arr[low]
    if high == low + 1:
        return min(arr[low], arr[high]), max(arr[low], arr[high])
    mid = (low + high) // 2
    min1, max1 = min_max(arr, low, mid)
    min2, max2 = min_max(arr, mid + 1, high)
    return min(min1, min2), max(max1, max2)

if arr:
    lo, hi = min_max(arr, 0, len(arr) - 1)
    print(f"Minimum: {lo}, Maximum: {hi}")
else:
    print("The array is empty")
"#;

const N_QUEENS: &str = r#"def solve_n_queens(n):
    board = [-1] * n

    def is_safe(row, col):
        for i in range(row):
            if board[i] == col or abs(board[i] - col) == abs(i - row):
                return False
        return True

    def solve(row):
        if row == n:
            return True
        for col in range(n):
            if is_safe(row, col):
                board[row] = col
                if solve(row + 1):
                    return True
                board[row] = -1
        return False

    return board if solve(0) else None

solution = solve_n_queens(n)
if solution is None:
    print(f"No solution for {n} queens")
else:
    for col in solution:
        print(" ".join("Q" if c == col else "." for c in range(n)))
"#;

const TSP_EXACT: &str = r#"from itertools import permutations
from math import dist

def tour_cost(path):
    return sum(dist(cities[a], cities[b]) for a, b in zip(path, path[1:]))

best, best_cost = None, float('inf')
for order in permutations(range(1, len(cities))):
    path = (0,) + order + (0,)
    cost = tour_cost(path)
    if cost < best_cost:
        best, best_cost = path, cost

print(f"Optimal path: {best}")
print(f"Cost: {round(best_cost)}")
"#;

const TSP_APPROX: &str = r#"from math import dist

path = [0]
unvisited = set(range(1, len(cities)))
cost = 0.0
while unvisited:
    here = cities[path[-1]]
    nearest = min(unvisited, key=lambda j: (dist(here, cities[j]), j))
    cost += dist(here, cities[nearest])
    path.append(nearest)
    unvisited.remove(nearest)
cost += dist(cities[path[-1]], cities[0])
path.append(0)

print(f"Nearest neighbor tour: {path}")
print(f"Total Cost: {round(cost)}")
"#;

const KTH_SMALLEST: &str = r#"def partition(arr, low, high):
    pivot = arr[high]
    i = low
    for j in range(low, high):
        if arr[j] <= pivot:
            arr[i], arr[j] = arr[j], arr[i]
            i += 1
    arr[i], arr[high] = arr[high], arr[i]
    return i

def kth_smallest(arr, k):
    low, high = 0, len(arr) - 1
    while low <= high:
        p = partition(arr, low, high)
        if p == k - 1:
            return arr[p]
        if p > k - 1:
            high = p - 1
        else:
            low = p + 1
    return None

if 1 <= k <= len(arr):
    print(f"The {k}-th smallest element is {kth_smallest(list(arr), k)}")
else:
    print(f"k must be between 1 and {len(arr)}")
"#;

const SCHEDULE_REPORT: &str = r#"
print(f"{'Process':<10}{'Arrival':<10}{'Burst':<10}{'Waiting':<10}{'Turnaround':<10}")
for p in processes:
    s = stats[p['id']]
    print(f"{p['id']:<10}{p['arrival']:<10}{p['burst']:<10}{s[0]:<10}{s[1]:<10}")
n = len(processes)
print(f"\nAverage Waiting Time: {sum(s[0] for s in stats.values()) / n:.2f}")
print(f"Average Turnaround Time: {sum(s[1] for s in stats.values()) / n:.2f}")
"#;

const FCFS: &str = r#"time = 0
stats = {}
for p in sorted(processes, key=lambda p: p['arrival']):
    time = max(time, p['arrival'])
    print(f"Executing {p['id']} from time {time} to {time + p['burst']}")
    time += p['burst']
    turnaround = time - p['arrival']
    stats[p['id']] = (turnaround - p['burst'], turnaround)
"#;

const SJF: &str = r#"time = 0
stats = {}
pending = list(processes)
while pending:
    ready = [p for p in pending if p['arrival'] <= time]
    if not ready:
        time = min(p['arrival'] for p in pending)
        continue
    p = min(ready, key=lambda p: (p['burst'], p['arrival']))
    print(f"Executing {p['id']} from time {time} to {time + p['burst']}")
    time += p['burst']
    turnaround = time - p['arrival']
    stats[p['id']] = (turnaround - p['burst'], turnaround)
    pending.remove(p)
"#;

const SRTF: &str = r#"time = 0
remaining = {p['id']: p['burst'] for p in processes}
stats = {}
while len(stats) < len(processes):
    ready = [p for p in processes if p['arrival'] <= time and remaining[p['id']] > 0]
    if not ready:
        time += 1
        continue
    p = min(ready, key=lambda p: (remaining[p['id']], p['arrival']))
    remaining[p['id']] -= 1
    time += 1
    if remaining[p['id']] == 0:
        turnaround = time - p['arrival']
        stats[p['id']] = (turnaround - p['burst'], turnaround)
        print(f"{p['id']} completed at time {time}")
"#;

const ROUND_ROBIN: &str = r#"time = 0
remaining = {p['id']: p['burst'] for p in processes}
arrivals = sorted(processes, key=lambda p: p['arrival'])
queue = []
stats = {}
print(f"Time Quantum: {time_quantum}")
while len(stats) < len(processes):
    while arrivals and arrivals[0]['arrival'] <= time:
        queue.append(arrivals.pop(0))
    if not queue:
        time = arrivals[0]['arrival']
        continue
    p = queue.pop(0)
    run = min(time_quantum, remaining[p['id']])
    print(f"{time:<6}{p['id']:<6}Runs for {run} units")
    time += run
    remaining[p['id']] -= run
    while arrivals and arrivals[0]['arrival'] <= time:
        queue.append(arrivals.pop(0))
    if remaining[p['id']] > 0:
        queue.append(p)
    else:
        turnaround = time - p['arrival']
        stats[p['id']] = (turnaround - p['burst'], turnaround)
"#;

const PRIORITY: &str = r#"time = 0
stats = {}
pending = list(processes)
while pending:
    ready = [p for p in pending if p['arrival'] <= time]
    if not ready:
        time = min(p['arrival'] for p in pending)
        continue
    p = min(ready, key=lambda p: (p['priority'], p['arrival']))
    print(f"Executing {p['id']} (Priority {p['priority']}) from time {time} to {time + p['burst']}")
    time += p['burst']
    turnaround = time - p['arrival']
    stats[p['id']] = (turnaround - p['burst'], turnaround)
    pending.remove(p)
"#;

fn body(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::LinearSearch => LINEAR_SEARCH,
        Algorithm::BinarySearch => BINARY_SEARCH,
        Algorithm::PatternMatching => PATTERN_MATCHING,
        Algorithm::InsertionSort => INSERTION_SORT,
        Algorithm::MergeSort => MERGE_SORT,
        Algorithm::QuickSort => QUICK_SORT,
        Algorithm::HeapSort => HEAP_SORT,
        Algorithm::Bfs => BFS,
        Algorithm::Dfs => DFS,
        Algorithm::Dijkstra => DIJKSTRA,
        Algorithm::Prim => PRIM,
        Algorithm::Floyd => FLOYD,
        Algorithm::Warshall => WARSHALL,
        Algorithm::DivideConquer => DIVIDE_CONQUER,
        Algorithm::NQueens => N_QUEENS,
        Algorithm::TspExact => TSP_EXACT,
        Algorithm::TspApprox => TSP_APPROX,
        Algorithm::KthSmallest => KTH_SMALLEST,
        Algorithm::Fcfs => FCFS,
        Algorithm::Sjf => SJF,
        Algorithm::Srtf => SRTF,
        Algorithm::RoundRobin => ROUND_ROBIN,
        Algorithm::Priority => PRIORITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_algorithm_has_source() {
        for algorithm in Algorithm::ALL {
            let source = reference_source(&Instance::with_defaults(algorithm, 1));
            assert!(source.contains("print("), "{}", algorithm.slug());
        }
    }

    #[test]
    fn test_input_is_bound() {
        let source = reference_source(&Instance::with_defaults(Algorithm::LinearSearch, 0));
        assert!(source.starts_with("arr = [64, 34, 25, 12, 22, 11, 90]\ntarget = 22\n"));
    }

    #[test]
    fn test_strings_are_escaped() {
        assert_eq!(py_str("it's"), "'it\\'s'");
        assert_eq!(py_str("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn test_scheduling_prints_report() {
        let source = reference_source(&Instance::with_defaults(Algorithm::RoundRobin, 0));
        assert!(source.contains("time_quantum = 2"));
        assert!(source.ends_with("print(f\"Average Turnaround Time: {sum(s[1] for s in stats.values()) / n:.2f}\")\n"));
    }

    #[test]
    fn test_matrix_uses_inf() {
        let source = reference_source(&Instance::with_defaults(Algorithm::Floyd, 0));
        assert!(source.starts_with("INF = float('inf')\nmatrix = [\n"));
        assert!(source.contains("INF"));
    }
}
