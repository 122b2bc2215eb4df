use super::FemBase;
use crate::base::Natural;
use crate::StrError;
use russell_lab::Vector;

/// Assists in adding a concentrated source to the external forces vector
///
/// This data structure corresponds to a single point boundary condition.
pub struct BcConcentrated {
    /// Equation corresponding to the source
    pub eq: usize,

    /// Specified value
    pub value: f64,
}

/// Implements an array of BcConcentrated
pub struct BcConcentratedArray {
    /// All values
    pub all: Vec<BcConcentrated>,
}

impl BcConcentratedArray {
    /// Allocates a new instance
    pub fn new(base: &FemBase, natural: &Natural) -> Result<Self, StrError> {
        let mut all = Vec::with_capacity(natural.at_points.len());
        for (point_id, pbc, value) in &natural.at_points {
            all.push(BcConcentrated {
                eq: base.dofs.eq(*point_id, pbc.dof())?,
                value: *value,
            });
        }
        Ok(BcConcentratedArray { all })
    }

    /// Adds the sources to the external forces vector
    pub fn add_to_ff_ext(&self, ff_ext: &mut Vector) {
        for bc in &self.all {
            ff_ext[bc.eq] += bc.value;
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
