//! Potsim - Potential-field finite element simulator
//!
//! This crate implements the finite element method for two-dimensional
//! steady potential problems (electrical conduction, steady heat, seepage):
//!
//! ```text
//! div(k · grad φ) + s = 0
//! ```
//!
//! Boundary conditions are declared on named groups of boundary edges
//! (ports); the solver fixes the prescribed degrees of freedom and solves
//! the reduced system for the free ones.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod analytical;
pub mod base;
pub mod fem;
pub mod prelude;
pub mod util;
