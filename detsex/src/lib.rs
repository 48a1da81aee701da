//! Jost-style sexual differentiation experiments.
//!
//! Given a genetic sex and a set of interventions (gonad ablation, gonadal
//! grafts, hormone implants), determine the fate of the Wolffian and Müllerian
//! ducts and the resulting phenotype. The crate keeps a strict separation:
//!
//! - **[`core`]**: the pure outcome resolver and its lookup tables. No I/O,
//!   no shared state, safe to call from any thread.
//! - **[`io`]**: the `.detsex/` directory (config, experiment history).
//!
//! [`history`] and [`comparison`] model past experiments; [`lab`] coordinates
//! core logic with I/O to implement CLI commands, and [`render`] formats
//! their output.

pub mod comparison;
pub mod core;
pub mod exit_codes;
pub mod history;
pub mod io;
pub mod lab;
pub mod logging;
pub mod render;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
