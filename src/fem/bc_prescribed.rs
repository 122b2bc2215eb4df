use super::FemBase;
use crate::base::{Dof, Essential};
use crate::StrError;
use gemlab::mesh::{Mesh, Point, PointId};
use russell_lab::Vector;

/// Assists in calculating a prescribed value boundary condition
///
/// This data structure corresponds to a single essential (Dirichlet)
/// boundary condition.
pub struct BcPrescribed<'a> {
    /// Point corresponding to the prescribed value
    pub point: &'a Point,

    /// The fixed DOF
    pub dof: Dof,

    /// The prescribed value
    pub value: f64,

    /// Equation corresponding to the prescribed value
    pub eq: usize,
}

/// Implements an array of BcPrescribed
pub struct BcPrescribedArray<'a> {
    /// All values
    pub all: Vec<BcPrescribed<'a>>,

    /// An array indicating which DOFs (equations) are prescribed
    ///
    /// The length of `flags` is equal to `n_equation`, the total number of
    /// DOFs (total number of equations).
    pub flags: Vec<bool>,

    /// Array with only the numbers of the prescribed equations
    ///
    /// Compared to the array `flags`, this is a "smaller" array with only
    /// the prescribed equation numbers.
    pub equations: Vec<usize>,
}

impl<'a> BcPrescribed<'a> {
    /// Allocates a new instance
    pub fn new(mesh: &'a Mesh, base: &FemBase, point_id: PointId, dof: Dof, value: f64) -> Result<Self, StrError> {
        if point_id >= mesh.points.len() {
            return Err("cannot find equation number because PointId is out-of-bounds");
        }
        Ok(BcPrescribed {
            point: &mesh.points[point_id],
            dof,
            value,
            eq: base.dofs.eq(point_id, dof)?,
        })
    }

    /// Sets the prescribed value in the solution vector
    pub fn set_value(&self, uu: &mut Vector) {
        uu[self.eq] = self.value;
    }
}

impl<'a> BcPrescribedArray<'a> {
    /// Allocates a new instance
    ///
    /// The conditions are sorted by (PointId, Dof) so that repeated runs
    /// assemble the system identically.
    pub fn new(mesh: &'a Mesh, base: &FemBase, essential: &Essential) -> Result<Self, StrError> {
        let mut keys: Vec<_> = essential.all.keys().copied().collect();
        keys.sort();
        let mut all = Vec::with_capacity(keys.len());
        let mut flags = vec![false; base.dofs.size()];
        let mut equations = Vec::with_capacity(keys.len());
        for (point_id, dof) in keys {
            let value = essential.all.get(&(point_id, dof)).unwrap();
            let bc = BcPrescribed::new(mesh, base, point_id, dof, *value)?;
            flags[bc.eq] = true;
            equations.push(bc.eq);
            all.push(bc);
        }
        Ok(BcPrescribedArray { all, flags, equations })
    }

    /// Sets all prescribed values in the solution vector
    pub fn apply(&self, uu: &mut Vector) {
        self.all.iter().for_each(|e| e.set_value(uu));
    }

    /// Tells whether there is at least one non-zero prescribed value or not
    pub fn has_non_zero(&self) -> bool {
        self.all.iter().any(|e| e.value != 0.0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{BcPrescribed, BcPrescribedArray};
    use crate::base::{Dof, Elem, Essential, ParamPotential};
    use crate::fem::FemBase;
    use gemlab::mesh::Samples;
    use russell_lab::Vector;

    #[test]
    fn new_captures_errors() {
        let mesh = Samples::one_tri3();
        let p1 = ParamPotential::sample();
        let base = FemBase::new(&mesh, [(1, Elem::Potential(p1))]).unwrap();
        assert_eq!(
            BcPrescribed::new(&mesh, &base, 123, Dof::Phi, 0.0).err(),
            Some("cannot find equation number because PointId is out-of-bounds")
        );

        let mut essential = Essential::new();
        essential.points(&[100], Dof::Phi, 0.0);
        assert_eq!(
            BcPrescribedArray::new(&mesh, &base, &essential).err(),
            Some("cannot find equation number because PointId is out-of-bounds")
        );
    }

    #[test]
    fn set_values_work() {
        let mesh = Samples::one_tri3();
        let p1 = ParamPotential::sample();
        let base = FemBase::new(&mesh, [(1, Elem::Potential(p1))]).unwrap();
        let mut essential = Essential::new();
        essential.points(&[0], Dof::Phi, 110.0);
        let mut uu = Vector::new(base.dofs.size());
        uu.fill(100.0);
        let values = BcPrescribedArray::new(&mesh, &base, &essential).unwrap();
        values.apply(&mut uu);
        assert_eq!(uu.as_data(), &[110.0, 100.0, 100.0]);
        assert!(values.has_non_zero());
    }

    #[test]
    fn prescribed_arrays_are_correct() {
        //       {4} 4---.__
        //          / \     `--.___3 {3}  [#] indicates id
        //         /   \          / \     (#) indicates attribute
        //        /     \  [1]   /   \    {#} indicates equation number
        //       /  [0]  \ (1)  / [2] \
        //      /   (1)   \    /  (1)  \
        // {0} 0---.__     \  /      ___2 {2}
        //            `--.__\/__.---'
        //               {1} 1
        let mesh = Samples::three_tri3();
        let p1 = ParamPotential::sample();
        let base = FemBase::new(&mesh, [(1, Elem::Potential(p1))]).unwrap();
        let mut essential = Essential::new();
        essential.points(&[4, 0], Dof::Phi, 0.0);
        let values = BcPrescribedArray::new(&mesh, &base, &essential).unwrap();
        assert_eq!(values.flags, &[true, false, false, false, true]);
        assert_eq!(values.equations, &[0, 4]);
        assert!(!values.has_non_zero());
    }
}
