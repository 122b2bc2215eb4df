use crate::StrError;
use russell_lab::{Matrix, Vector};
use russell_sparse::CooMatrix;

/// Assembles a local vector into the global vector
///
/// The entries whose global equation is flagged in `ignore` are skipped;
/// this generates the reduced system in which the prescribed equations do
/// not receive contributions.
pub fn assemble_vector(rr: &mut Vector, local: &Vector, local_to_global: &[usize], ignore: &[bool]) {
    let n_local_eq = local.dim();
    for l in 0..n_local_eq {
        let g = local_to_global[l];
        if !ignore[g] {
            rr[g] += local[l];
        }
    }
}

/// Assembles a local matrix into the global (sparse) matrix
///
/// Rows and columns whose global equation is flagged in `ignore` are
/// skipped. If a tolerance is given, the symmetry of the local matrix is
/// spot-checked first.
pub fn assemble_matrix(
    kk: &mut CooMatrix,
    local: &Matrix,
    local_to_global: &[usize],
    ignore: &[bool],
    tolerance: Option<f64>,
) -> Result<(), StrError> {
    let (n_local_eq, _) = local.dims();
    if let Some(tol) = tolerance {
        for l in 0..n_local_eq {
            for ll in (l + 1)..n_local_eq {
                if f64::abs(local.get(l, ll) - local.get(ll, l)) > tol {
                    return Err("local matrix is not symmetric");
                }
            }
        }
    }
    for l in 0..n_local_eq {
        let g = local_to_global[l];
        if !ignore[g] {
            for ll in 0..n_local_eq {
                let gg = local_to_global[ll];
                if !ignore[gg] {
                    kk.put(g, gg, local.get(l, ll))?;
                }
            }
        }
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
