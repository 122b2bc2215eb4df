use super::{BcDistributedArray, BcPrescribedArray, Elements, FemBase};
use crate::base::Config;
use crate::StrError;
use russell_lab::Vector;
use russell_sparse::{LinSolver, SparseMatrix, Sym};

/// Holds variables to solve the global linear system
pub struct LinearSystem<'a> {
    /// Total number of global equations (total number of DOFs)
    pub neq_total: usize,

    /// Holds the supremum of the number of nonzero values (nnz) in the global matrix
    ///
    /// **Notes:**
    ///
    /// 1. The global matrix is sparse with the number of nonzero values indicated by `nnz`
    /// 2. The local element matrices add only to parts of the global matrix yielding a banded matrix
    /// 3. The largest upper bound of nnz is the total number of entries in the global matrix (nrow × ncol).
    ///    However, the elements share DOFs; therefore, the exact nnz is (much) less than nrow × ncol
    /// 4. The least upper bound (supremum) of nnz, indicated here by `nnz_sup`, is equal to the
    ///    sum of all the number of entries in the local matrices (elements and boundaries) plus the
    ///    number of prescribed equations since ones are put on the diagonal of the reduced matrix; thus
    ///    `nnz ≤ n_prescribed + Σ (ndof_local × ndof_local) + Σ (ndof_local_boundary × ndof_local_boundary)`
    pub nnz_sup: usize,

    /// Holds the global internal forces vector F_int
    pub ff_int: Vector,

    /// Holds the global external forces vector F_ext
    pub ff_ext: Vector,

    /// Holds the residual vector R
    pub rr: Vector,

    /// Holds the global (reduced) matrix K
    pub kk: SparseMatrix,

    /// Holds the linear solver
    pub solver: LinSolver<'a>,

    /// Holds the "minus-delta-U" vector (the solution of the linear system)
    pub mdu: Vector,
}

impl<'a> LinearSystem<'a> {
    /// Allocates a new instance
    pub fn new(
        base: &FemBase,
        config: &Config,
        prescribed: &BcPrescribedArray,
        elements: &Elements,
        boundaries: &BcDistributedArray,
    ) -> Result<Self, StrError> {
        // equation (DOF) numbers
        let neq_total = base.dofs.size();

        // estimate the number of non-zero values
        let mut nnz_sup = prescribed.equations.len();

        // elements always have a Jacobian matrix
        nnz_sup += elements.all.iter().fold(0, |acc, e| {
            let n = e.actual.local_to_global().len();
            acc + n * n
        });

        // boundary data may have a Jacobian matrix
        nnz_sup += boundaries.all.iter().fold(0, |acc, e| {
            let n = e.n_local_eq();
            if e.with_jacobian() {
                acc + n * n
            } else {
                acc
            }
        });

        // allocate new instance
        Ok(LinearSystem {
            neq_total,
            nnz_sup,
            ff_int: Vector::new(neq_total),
            ff_ext: Vector::new(neq_total),
            rr: Vector::new(neq_total),
            kk: SparseMatrix::new_coo(neq_total, neq_total, nnz_sup, Sym::No)?,
            solver: LinSolver::new(config.lin_sol_genie)?,
            mdu: Vector::new(neq_total),
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
