//! Implements the finite element discretization and solution

mod bc_concentrated;
mod bc_distributed;
mod bc_prescribed;
mod element_potential;
mod element_trait;
mod elements;
mod fem_base;
mod fem_state;
mod file_io;
mod linear_system;
mod post_proc;
mod solver_steady;
pub use crate::fem::bc_concentrated::*;
pub use crate::fem::bc_distributed::*;
pub use crate::fem::bc_prescribed::*;
pub use crate::fem::element_potential::*;
pub use crate::fem::element_trait::*;
pub use crate::fem::elements::*;
pub use crate::fem::fem_base::*;
pub use crate::fem::fem_state::*;
pub use crate::fem::file_io::*;
pub use crate::fem::linear_system::*;
pub use crate::fem::post_proc::*;
pub use crate::fem::solver_steady::*;
