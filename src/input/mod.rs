//! Text input for algorithm parameters.
//!
//! [`parse`] turns free-form text into arrays, process lists, edge lists and
//! matrices, repairing what it can. [`InputPanel`] holds the editable fields
//! for the selected algorithm and validates them into an
//! [`AlgorithmInput`](crate::algorithms::AlgorithmInput) on apply.

pub mod panel;
pub mod parse;

pub use panel::{Field, InputPanel};
