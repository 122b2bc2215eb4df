use super::FemBase;
use crate::base::Config;
use crate::StrError;
use gemlab::mesh::Mesh;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the state of a simulation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FemState {
    /// Primary unknowns {U} (the potential at all DOFs)
    ///
    /// (n_equation)
    pub uu: Vector,
}

impl FemState {
    /// Allocates a new instance
    ///
    /// All values are initialized to zero; thus, DOFs that are neither
    /// prescribed nor free (none here) and DOFs prescribed at zero keep the
    /// zero value without further work.
    pub fn new(mesh: &Mesh, base: &FemBase, config: &Config) -> Result<FemState, StrError> {
        if mesh.cells.len() == 0 {
            return Err("there are no cells in the mesh");
        }
        config.checked()?;
        let neq = base.dofs.size();
        Ok(FemState { uu: Vector::new(neq) })
    }

    /// Reads a JSON file containing the state data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let data = File::open(path).map_err(|_| "cannot open state file")?;
        let buffered = BufReader::new(data);
        let state = serde_json::from_reader(buffered).map_err(|_| "cannot parse state file")?;
        Ok(state)
    }

    /// Writes a JSON file with the state data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create state file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write state file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
