//! Makes available common structures needed to run a simulation
//!
//! You may write `use potsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::analytical::QuarterAnnulusPotential;
pub use crate::base::{Config, Dof, Elem, Essential, Natural, Nbc, ParamPotential, Pbc, Ports};
pub use crate::fem::{FemBase, FemState, FileIo, PostProc, SolverSteady};
pub use crate::util::ConvergenceResults;
