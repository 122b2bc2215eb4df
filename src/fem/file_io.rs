use super::{FemBase, FemState};
use crate::base::DEFAULT_OUT_DIR;
use crate::StrError;
use gemlab::mesh::Mesh;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Assists in writing the simulation data to files
///
/// The output is a set of JSON files under `output_dir`: the mesh, the base
/// data, the recorded states, and a summary with the recorded indices.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileIo {
    /// Indicates whether the output is enabled or not
    pub enabled: bool,

    /// Holds the output directory
    pub output_dir: String,

    /// Holds the filename stem
    pub fn_stem: String,

    /// Holds the indices of the recorded states
    pub indices: Vec<usize>,
}

impl FileIo {
    /// Allocates a new instance (output disabled)
    pub fn new() -> Self {
        FileIo {
            enabled: false,
            output_dir: String::new(),
            fn_stem: String::new(),
            indices: Vec::new(),
        }
    }

    /// Activates the output and writes the mesh and base files
    ///
    /// # Input
    ///
    /// * `mesh` -- the mesh
    /// * `base` -- the FemBase data
    /// * `fn_stem` -- the filename stem for all output files
    /// * `output_dir` -- the output directory; if None, the default is used
    pub fn activate(&mut self, mesh: &Mesh, base: &FemBase, fn_stem: &str, output_dir: Option<&str>) -> Result<(), StrError> {
        self.enabled = true;
        self.output_dir = match output_dir {
            Some(d) => d.to_string(),
            None => DEFAULT_OUT_DIR.to_string(),
        };
        self.fn_stem = fn_stem.to_string();
        fs::create_dir_all(&self.output_dir).map_err(|_| "cannot create output directory")?;

        // write the mesh
        let path = self.path_mesh();
        let mut file = File::create(&path).map_err(|_| "cannot create mesh file")?;
        serde_json::to_writer(&mut file, mesh).map_err(|_| "cannot write mesh file")?;

        // write the base data
        base.write_json(&self.path_base())?;
        Ok(())
    }

    /// Returns the path of the mesh file
    pub fn path_mesh(&self) -> String {
        format!("{}/{}-mesh.json", self.output_dir, self.fn_stem)
    }

    /// Returns the path of the base file
    pub fn path_base(&self) -> String {
        format!("{}/{}-base.json", self.output_dir, self.fn_stem)
    }

    /// Returns the path of the state file with the given index
    pub fn path_state(&self, index: usize) -> String {
        format!("{}/{}-state-{:0>20}.json", self.output_dir, self.fn_stem, index)
    }

    /// Returns the path of the summary file
    pub fn path_summary(&self) -> String {
        format!("{}/{}-summary.json", self.output_dir, self.fn_stem)
    }

    /// Writes the state to a file, if the output is enabled
    pub fn write_state(&mut self, state: &FemState) -> Result<(), StrError> {
        if self.enabled {
            let index = self.indices.len();
            state.write_json(&self.path_state(index))?;
            self.indices.push(index);
        }
        Ok(())
    }

    /// Writes the summary file, if the output is enabled
    pub fn write_self(&self) -> Result<(), StrError> {
        if self.enabled {
            let path = self.path_summary();
            let mut file = File::create(&path).map_err(|_| "cannot create summary file")?;
            serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write summary file")?;
        }
        Ok(())
    }

    /// Reads a JSON file containing the summary data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let data = File::open(path).map_err(|_| "cannot open summary file")?;
        let buffered = BufReader::new(data);
        let file_io = serde_json::from_reader(buffered).map_err(|_| "cannot parse summary file")?;
        Ok(file_io)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
