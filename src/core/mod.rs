//! Core data handling for sample sequences.

mod series;

pub use series::{finite_values, pooled_values, select_source};
