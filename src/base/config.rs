use crate::StrError;
use gemlab::mesh::Mesh;
use russell_sparse::{Genie, LinSolParams};

/// Holds configuration parameters
pub struct Config {
    /// Space dimension of the mesh (must be 2)
    pub(crate) ndim: usize,

    /// Out-of-plane thickness
    pub thickness: f64,

    /// Linear solver type
    pub lin_sol_genie: Genie,

    /// Linear solver parameters
    pub lin_sol_params: LinSolParams,

    /// Tolerance to check the symmetry of local matrices during assembly
    pub symmetry_check_tolerance: Option<f64>,

    /// Enables verbose output of the sparse solver
    pub verbose_lin_sys_solve: bool,
}

impl Config {
    /// Allocates a new instance
    pub fn new(mesh: &Mesh) -> Self {
        Config {
            ndim: mesh.ndim,
            thickness: 1.0,
            lin_sol_genie: Genie::Umfpack,
            lin_sol_params: LinSolParams::new(),
            symmetry_check_tolerance: Some(1e-10),
            verbose_lin_sys_solve: false,
        }
    }

    /// Validates the configuration; returns a message in case of errors
    pub fn validate(&self) -> Option<String> {
        if self.ndim != 2 {
            return Some(format!("ndim = {} is invalid; the simulations are 2D only", self.ndim));
        }
        if self.thickness <= 0.0 {
            return Some(format!("thickness = {:?} is incorrect; it must be > 0.0", self.thickness));
        }
        None
    }

    /// Sets the out-of-plane thickness
    pub fn set_thickness(&mut self, thickness: f64) -> &mut Self {
        self.thickness = thickness;
        self
    }

    /// Sets the linear solver type
    pub fn set_lin_sol_genie(&mut self, genie: Genie) -> &mut Self {
        self.lin_sol_genie = genie;
        self
    }

    /// Returns an error if the configuration is invalid
    pub(crate) fn checked(&self) -> Result<(), StrError> {
        if let Some(msg) = self.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate simulation because config.validate() failed");
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
