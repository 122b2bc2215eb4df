use super::{FemBase, FemState};
use crate::base::{assemble_matrix, assemble_vector, Config, Natural, Nbc};
use crate::StrError;
use gemlab::integ::{self, Gauss};
use gemlab::mesh::{Edge, Mesh};
use gemlab::shapes::Scratchpad;
use russell_lab::{Matrix, Vector};
use russell_sparse::CooMatrix;

/// Assists in the integration of distributed BCs over the boundary of an element
///
/// This data structure corresponds to a single natural (Neumann/Robin)
/// boundary condition applied to an edge.
pub struct BcDistributed<'a> {
    /// Global configuration
    config: &'a Config,

    /// Scratchpad to perform numerical integration
    pad: Scratchpad,

    /// Integration (Gauss) points
    gauss: Gauss,

    /// Holds the local contribution to the internal forces vector
    f_int: Vector,

    /// Holds the local contribution to the external forces vector
    f_ext: Vector,

    /// Holds the local Jacobian matrix
    ///
    /// This optional matrix appears with the contact conductance condition.
    kke: Option<Matrix>,

    /// Local-to-global mapping
    ///
    /// (n_local_eq)
    local_to_global: Vec<usize>,

    /// Natural boundary condition
    nbc: Nbc,

    /// Specified BC value (imposed flux or far potential)
    value: f64,
}

/// Implements an array of BcDistributed
pub struct BcDistributedArray<'a> {
    /// Global configuration
    config: &'a Config,

    /// All values
    pub all: Vec<BcDistributed<'a>>,
}

impl<'a> BcDistributed<'a> {
    /// Allocates a new instance
    pub fn new(
        mesh: &Mesh,
        base: &FemBase,
        config: &'a Config,
        edge: &Edge,
        nbc: Nbc,
        value: f64,
    ) -> Result<Self, StrError> {
        // pad and integration points
        let mut pad = Scratchpad::new(mesh.ndim, edge.kind)?;
        mesh.set_pad(&mut pad, &edge.points);
        let gauss = Gauss::new(edge.kind);

        // dofs
        let nnode = edge.points.len();
        let dofs = nbc.dof_equation_pairs(nnode);
        let n_local_eq = 1 + dofs.last().unwrap().last().unwrap().1;

        // local_to_global
        let mut local_to_global = vec![0; n_local_eq];
        for m in 0..nnode {
            for (dof, local) in &dofs[m] {
                local_to_global[*local] = base.dofs.eq(edge.points[m], *dof)?;
            }
        }

        // new instance
        Ok(BcDistributed {
            config,
            pad,
            gauss,
            f_int: Vector::new(n_local_eq),
            f_ext: Vector::new(n_local_eq),
            kke: if nbc.contributes_to_jacobian_matrix() {
                Some(Matrix::new(n_local_eq, n_local_eq))
            } else {
                None
            },
            local_to_global,
            nbc,
            value,
        })
    }

    /// Calculates the local contribution to the internal forces vector
    pub fn calc_f_int(&mut self, state: &FemState) -> Result<(), StrError> {
        let nnode = self.local_to_global.len();
        let l2g = &self.local_to_global;
        let uu = &state.uu;
        let res = &mut self.f_int;
        let mut args = integ::CommonArgs::new(&mut self.pad, &self.gauss);
        args.alpha = self.config.thickness;
        match self.nbc {
            // the imposed flux does not depend on the unknowns
            Nbc::Qn => {
                res.fill(0.0);
                Ok(())
            }
            Nbc::Cc(cc) => integ::vec_01_ns(res, &mut args, |_, nn| {
                // interpolate φ from the nodes to the integration point
                let mut phi = 0.0;
                for m in 0..nnode {
                    phi += nn[m] * uu[l2g[m]];
                }
                Ok(cc * phi)
            }),
        }
    }

    /// Calculates the local contribution to the external forces vector
    pub fn calc_f_ext(&mut self) -> Result<(), StrError> {
        let res = &mut self.f_ext;
        let value = self.value;
        let mut args = integ::CommonArgs::new(&mut self.pad, &self.gauss);
        args.alpha = self.config.thickness;
        match self.nbc {
            Nbc::Qn => integ::vec_01_ns(res, &mut args, |_, _| Ok(value)),
            Nbc::Cc(cc) => integ::vec_01_ns(res, &mut args, |_, _| Ok(cc * value)),
        }
    }

    /// Calculates the local Jacobian matrix
    pub fn calc_kke(&mut self, _state: &FemState) -> Result<(), StrError> {
        match self.nbc {
            Nbc::Cc(cc) => {
                let kk = self.kke.as_mut().unwrap();
                let mut args = integ::CommonArgs::new(&mut self.pad, &self.gauss);
                args.alpha = self.config.thickness;
                integ::mat_01_nsn_bry(kk, &mut args, |_, _, _| Ok(cc))
            }
            _ => Ok(()),
        }
    }

    /// Returns the number of local equations
    pub fn n_local_eq(&self) -> usize {
        self.local_to_global.len()
    }

    /// Tells whether this BC needs the calculation of a Jacobian matrix or not
    pub fn with_jacobian(&self) -> bool {
        self.kke.is_some()
    }
}

impl<'a> BcDistributedArray<'a> {
    /// Allocates a new instance
    pub fn new(mesh: &Mesh, base: &FemBase, config: &'a Config, natural: &Natural) -> Result<Self, StrError> {
        let mut all = Vec::with_capacity(natural.on_edges.len());
        for (edge, nbc, value) in &natural.on_edges {
            all.push(BcDistributed::new(mesh, base, config, edge, *nbc, *value)?);
        }
        Ok(BcDistributedArray { config, all })
    }

    /// Calculates the f_int contributions and adds them to the global vector
    ///
    /// `ignore` (n_equation) flags the prescribed equations to be skipped in
    /// the assembly; i.e., it allows the generation of the reduced system.
    pub fn assemble_f_int(&mut self, ff_int: &mut Vector, state: &FemState, ignore: &[bool]) -> Result<(), StrError> {
        for e in &mut self.all {
            e.calc_f_int(state)?;
            assemble_vector(ff_int, &e.f_int, &e.local_to_global, ignore);
        }
        Ok(())
    }

    /// Calculates the f_ext contributions and adds them to the global vector
    pub fn assemble_f_ext(&mut self, ff_ext: &mut Vector, ignore: &[bool]) -> Result<(), StrError> {
        for e in &mut self.all {
            e.calc_f_ext()?;
            assemble_vector(ff_ext, &e.f_ext, &e.local_to_global, ignore);
        }
        Ok(())
    }

    /// Calculates the Ke matrices and adds them to the global matrix
    pub fn assemble_kke(&mut self, kk: &mut CooMatrix, state: &FemState, ignore: &[bool]) -> Result<(), StrError> {
        let tol = self.config.symmetry_check_tolerance;
        for e in &mut self.all {
            e.calc_kke(state)?;
            if let Some(kke) = &e.kke {
                assemble_matrix(kk, kke, &e.local_to_global, ignore, tol)?;
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
