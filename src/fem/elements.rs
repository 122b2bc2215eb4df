use super::{ElementPotential, ElementTrait, FemBase, FemState};
use crate::base::{assemble_matrix, assemble_vector, Config, Elem};
use crate::StrError;
use gemlab::mesh::{Cell, Mesh};
use russell_lab::{Matrix, Vector};
use russell_sparse::CooMatrix;

/// Defines a generic finite element, wrapping an "actual" implementation
pub struct GenericElement<'a> {
    /// Connects to the "actual" implementation of local equations
    pub actual: Box<dyn ElementTrait + 'a>,

    /// Holds the local f_int vector
    pub f_int: Vector,

    /// Holds the local f_ext vector
    pub f_ext: Vector,

    /// Holds the local Jacobian matrix
    pub kke: Matrix,
}

/// Holds a collection of (generic) finite elements
pub struct Elements<'a> {
    /// Holds configuration parameters
    config: &'a Config,

    /// All elements
    pub all: Vec<GenericElement<'a>>,
}

impl<'a> GenericElement<'a> {
    /// Allocates a new instance
    pub fn new(mesh: &'a Mesh, base: &'a FemBase, config: &'a Config, cell: &'a Cell) -> Result<Self, StrError> {
        let elem = base.amap.get(cell)?;
        let actual: Box<dyn ElementTrait> = match elem {
            Elem::Potential(p) => Box::new(ElementPotential::new(mesh, base, config, cell, p)?),
        };
        let neq = base.n_local_eq(cell).unwrap(); // already checked
        Ok(GenericElement {
            actual,
            f_int: Vector::new(neq),
            f_ext: Vector::new(neq),
            kke: Matrix::new(neq, neq),
        })
    }
}

impl<'a> Elements<'a> {
    /// Allocates a new instance
    pub fn new(mesh: &'a Mesh, base: &'a FemBase, config: &'a Config) -> Result<Self, StrError> {
        let res: Result<Vec<_>, _> = mesh
            .cells
            .iter()
            .map(|cell| GenericElement::new(mesh, base, config, cell))
            .collect();
        match res {
            Ok(all) => Ok(Elements { config, all }),
            Err(e) => Err(e),
        }
    }

    /// Calculates the f_int vectors and adds them to the global vector
    ///
    /// `ignore` (n_equation) flags the prescribed equations to be skipped in
    /// the assembly; i.e., it allows the generation of the reduced system.
    pub fn assemble_f_int(&mut self, ff_int: &mut Vector, state: &FemState, ignore: &[bool]) -> Result<(), StrError> {
        for e in &mut self.all {
            e.actual.calc_f_int(&mut e.f_int, state)?;
            assemble_vector(ff_int, &e.f_int, &e.actual.local_to_global(), ignore);
        }
        Ok(())
    }

    /// Calculates the f_ext vectors and adds them to the global vector
    pub fn assemble_f_ext(&mut self, ff_ext: &mut Vector, ignore: &[bool]) -> Result<(), StrError> {
        for e in &mut self.all {
            e.actual.calc_f_ext(&mut e.f_ext)?;
            assemble_vector(ff_ext, &e.f_ext, &e.actual.local_to_global(), ignore);
        }
        Ok(())
    }

    /// Calculates the Ke matrices and adds them to the global matrix
    pub fn assemble_kke(&mut self, kk: &mut CooMatrix, state: &FemState, ignore: &[bool]) -> Result<(), StrError> {
        let tol = self.config.symmetry_check_tolerance;
        for e in &mut self.all {
            e.actual.calc_kke(&mut e.kke, state)?;
            assemble_matrix(kk, &e.kke, &e.actual.local_to_global(), ignore, tol)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
