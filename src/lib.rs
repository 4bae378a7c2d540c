//! # Introduction
//!
//! algotrace runs classic algorithms against editable inputs, records every
//! interesting micro-operation as a [`step::Step`], and replays the steps in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input panel → Instance → Trace (recorded or live) → AnimationController → TUI
//! ```
//!
//! 1. [`input`] parses free-form text into an
//!    [`algorithms::AlgorithmInput`], repairing what it can.
//! 2. [`algorithms`] turns an [`algorithms::Instance`] into a
//!    [`step::Trace`]. Most generators precompute every step; backtracking and
//!    exhaustive searches yield steps lazily.
//! 3. [`playback`] plays, pauses, steps and resets over the trace.
//! 4. [`exec`] runs a reference Python program for the same input through an
//!    external interpreter.
//! 5. [`ui`] draws the catalog, inputs, current step and program output; not
//!    part of the stable library API.
//!
//! ## Catalog
//!
//! Searching & sorting, graph algorithms (BFS, DFS, Dijkstra, Prim, Floyd,
//! Warshall), algorithm design (divide & conquer, N-Queens), advanced
//! algorithms (TSP exact and nearest neighbor, k-th smallest) and CPU
//! scheduling (FCFS, SJF, SRTF, Round Robin, Priority).

pub mod algorithms;
pub mod errors;
pub mod exec;
pub mod input;
pub mod playback;
pub mod settings;
pub mod step;
pub mod ui;
