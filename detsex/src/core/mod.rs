//! Deterministic, pure logic for resolving experiments.
//!
//! Core modules are free of I/O side effects and hold no shared state; they
//! read only their arguments and compile-time tables.

pub mod ducts;
pub mod gonads;
pub mod hormones;
pub mod labels;
pub mod narrative;
pub mod resolver;
pub mod types;
