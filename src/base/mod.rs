//! Implements the base structures to define a potential-field simulation

mod all_dofs;
mod assemble;
mod attributes;
mod config;
mod constants;
mod element_dofs;
mod enums;
mod essential;
mod natural;
mod parameters;
mod ports;
mod sample_meshes;
pub use crate::base::all_dofs::*;
pub use crate::base::assemble::*;
pub use crate::base::attributes::*;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::element_dofs::*;
pub use crate::base::enums::*;
pub use crate::base::essential::*;
pub use crate::base::natural::*;
pub use crate::base::parameters::*;
pub use crate::base::ports::*;
pub use crate::base::sample_meshes::*;
