use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines degrees-of-freedom (DOF) types
///
/// Note: The fixed numbering scheme assists in sorting the DOFs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Dof {
    /// Scalar potential (e.g., voltage, temperature, hydraulic head)
    Phi = 0,
}

/// Defines natural boundary conditions (NBC)
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum Nbc {
    /// Imposed normal flux
    ///
    /// A positive value injects flux into the domain (through the outer
    /// boundary, against the outward normal).
    Qn,

    /// Contact conductance (Robin condition)
    ///
    /// The value in parenthesis is constant and corresponds to the contact
    /// conductance `cc`. The specified BC value is the far potential `φ∞`.
    Cc(f64),
}

/// Defines concentrated boundary conditions (point sources)
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum Pbc {
    /// Concentrated source (e.g., injected current at a point)
    Q,
}

impl Nbc {
    /// Returns the boundary cell DOF keys and local equation numbers
    ///
    /// **Notes:** The outer array has length = nnode.
    /// The inner arrays have lengths = ndof at the node.
    pub fn dof_equation_pairs(&self, nnode: usize) -> Vec<Vec<(Dof, usize)>> {
        let mut dofs = vec![Vec::new(); nnode];
        let mut count = 0;
        match self {
            Nbc::Qn | Nbc::Cc(..) => {
                for m in 0..nnode {
                    dofs[m].push((Dof::Phi, count));
                    count += 1;
                }
            }
        }
        dofs
    }

    /// Tells whether this NBC contributes to the Jacobian matrix or not
    pub fn contributes_to_jacobian_matrix(&self) -> bool {
        match self {
            Nbc::Qn => false,
            Nbc::Cc(..) => true,
        }
    }
}

impl Pbc {
    /// Returns the DOF corresponding to the concentrated source
    pub fn dof(&self) -> Dof {
        match self {
            Pbc::Q => Dof::Phi,
        }
    }
}

impl fmt::Display for Nbc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Nbc::Qn => write!(f, "Qn").unwrap(),
            Nbc::Cc(cc) => write!(f, "Cc({})", cc).unwrap(),
        }
        Ok(())
    }
}

impl fmt::Display for Pbc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Pbc::Q => write!(f, "Q").unwrap(),
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Dof, Nbc, Pbc};

    #[test]
    fn dof_derive_works() {
        let dof = Dof::Phi;
        let clone = dof.clone();
        assert_eq!(format!("{:?}", dof), "Phi");
        assert_eq!(dof, clone);
        let json = serde_json::to_string(&dof).unwrap();
        let read: Dof = serde_json::from_str(&json).unwrap();
        assert_eq!(read, Dof::Phi);
    }

    #[test]
    fn nbc_methods_work() {
        let qn = Nbc::Qn;
        assert_eq!(qn.dof_equation_pairs(2), &[[(Dof::Phi, 0)], [(Dof::Phi, 1)]]);
        assert_eq!(qn.contributes_to_jacobian_matrix(), false);
        assert_eq!(format!("{}", qn), "Qn");

        let cc = Nbc::Cc(55.0);
        assert_eq!(cc.dof_equation_pairs(3), &[[(Dof::Phi, 0)], [(Dof::Phi, 1)], [(Dof::Phi, 2)]]);
        assert_eq!(cc.contributes_to_jacobian_matrix(), true);
        assert_eq!(format!("{}", cc), "Cc(55)");
    }

    #[test]
    fn pbc_methods_work() {
        let q = Pbc::Q;
        assert_eq!(q.dof(), Dof::Phi);
        assert_eq!(format!("{}", q), "Q");
    }
}
