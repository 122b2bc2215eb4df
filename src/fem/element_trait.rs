use super::FemState;
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Defines the trait for (finite) elements
pub trait ElementTrait {
    /// Returns whether the local Jacobian matrix is symmetric or not
    fn symmetric_jacobian(&self) -> bool;

    /// Returns the local-to-global mapping
    fn local_to_global(&self) -> &Vec<usize>;

    /// Calculates the vector of internal forces f_int (e.g., -w, the flux term)
    fn calc_f_int(&mut self, f_int: &mut Vector, state: &FemState) -> Result<(), StrError>;

    /// Calculates the vector of external forces f_ext (e.g., the source term)
    fn calc_f_ext(&mut self, f_ext: &mut Vector) -> Result<(), StrError>;

    /// Calculates the Jacobian matrix (derivative of f_int with respect to the unknowns)
    fn calc_kke(&mut self, kke: &mut Matrix, state: &FemState) -> Result<(), StrError>;
}
