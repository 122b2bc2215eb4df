use super::{Dof, ElementDofsMap};
use crate::StrError;
use gemlab::mesh::{Mesh, PointId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Holds all DOF numbers for all points
///
/// For the potential element there is one `Phi` DOF per mesh point, so the
/// global equation numbers follow the point ids; nonetheless, the numbering
/// is computed from the element DOF tables and not assumed.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AllDofs {
    /// Holds all DOFs and respective global numbers for all points
    ///
    /// (npoint)
    list: Vec<HashMap<Dof, usize>>,

    /// Holds the total number of DOFs
    ndof: usize,
}

impl AllDofs {
    /// Allocates a new instance
    pub fn new(mesh: &Mesh, emap: &ElementDofsMap) -> Result<Self, StrError> {
        // auxiliary memoization data
        let npoint = mesh.points.len();
        let mut memo_point_dofs = vec![HashSet::new(); npoint];

        // find all element DOFs and add (unique) DOF keys to the point DOFs array
        for cell in &mesh.cells {
            let info = emap.get(cell)?;
            for m in 0..cell.points.len() {
                for (dof, _) in &info.dofs[m] {
                    memo_point_dofs[cell.points[m]].insert(*dof);
                }
            }
        }

        // assign numbers to all DOFs
        let mut list = vec![HashMap::new(); npoint];
        let mut ndof = 0;
        for point_id in 0..npoint {
            let mut sorted_dofs: Vec<_> = memo_point_dofs[point_id].iter().collect();
            sorted_dofs.sort();
            for dof in sorted_dofs {
                list[point_id].insert(*dof, ndof);
                ndof += 1;
            }
        }

        // done
        Ok(AllDofs { list, ndof })
    }

    /// Returns whether a point has a specific DOF or not
    pub fn contains(&self, point_id: PointId, dof: Dof) -> bool {
        self.list[point_id].contains_key(&dof)
    }

    /// Returns the total number of DOFs
    pub fn size(&self) -> usize {
        self.ndof
    }

    /// Returns the (global) number of a DOF
    pub fn eq(&self, point_id: PointId, dof: Dof) -> Result<usize, StrError> {
        if point_id >= self.list.len() {
            return Err("cannot find equation number because PointId is out-of-bounds");
        }
        let eq = self.list[point_id]
            .get(&dof)
            .ok_or("cannot find the number of a (PointId, DOF) pair")?;
        Ok(*eq)
    }
}

impl fmt::Display for AllDofs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Points: DOF keys and global numbers\n").unwrap();
        write!(f, "===================================\n").unwrap();
        for point_id in 0..self.list.len() {
            let mut dof_eqn: Vec<_> = self.list[point_id].iter().collect();
            dof_eqn.sort_by(|a, b| a.0.partial_cmp(b.0).unwrap());
            write!(f, "{:?}: {:?}\n", point_id, dof_eqn).unwrap();
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::AllDofs;
    use crate::base::{Attributes, Dof, Elem, ElementDofsMap, ParamPotential};
    use gemlab::mesh::Samples;

    #[test]
    fn new_captures_errors() {
        let mesh = Samples::three_tri3();
        let mut mesh_wrong = mesh.clone();
        mesh_wrong.cells[0].attribute = 100; // << never do this!
        let p1 = ParamPotential::sample();
        let amap = Attributes::from([(1, Elem::Potential(p1))]);
        let emap = ElementDofsMap::new(&mesh, &amap).unwrap();
        assert_eq!(
            AllDofs::new(&mesh_wrong, &emap).err(),
            Some("cannot find (CellAttribute, GeoKind) in ElementDofsMap")
        );
    }

    #[test]
    fn all_dofs_works() {
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
        let amap = Attributes::from([(1, Elem::Potential(p1))]);
        let emap = ElementDofsMap::new(&mesh, &amap).unwrap();
        let dofs = AllDofs::new(&mesh, &emap).unwrap();
        assert_eq!(dofs.size(), 5);
        for point_id in 0..5 {
            assert!(dofs.contains(point_id, Dof::Phi));
            assert_eq!(dofs.eq(point_id, Dof::Phi).unwrap(), point_id);
        }
        assert_eq!(
            dofs.eq(111, Dof::Phi).err(),
            Some("cannot find equation number because PointId is out-of-bounds")
        );
    }

    #[test]
    fn display_works() {
        let mesh = Samples::one_tri3();
        let p1 = ParamPotential::sample();
        let amap = Attributes::from([(1, Elem::Potential(p1))]);
        let emap = ElementDofsMap::new(&mesh, &amap).unwrap();
        let dofs = AllDofs::new(&mesh, &emap).unwrap();
        assert_eq!(
            format!("{}", dofs),
            "Points: DOF keys and global numbers\n\
             ===================================\n\
             0: [(Phi, 0)]\n\
             1: [(Phi, 1)]\n\
             2: [(Phi, 2)]\n"
        );
    }

    #[test]
    fn derive_works() {
        let mesh = Samples::one_tri3();
        let p1 = ParamPotential::sample();
        let amap = Attributes::from([(1, Elem::Potential(p1))]);
        let emap = ElementDofsMap::new(&mesh, &amap).unwrap();
        let dofs = AllDofs::new(&mesh, &emap).unwrap();
        let clone = dofs.clone();
        let json = serde_json::to_string(&clone).unwrap();
        let read: AllDofs = serde_json::from_str(&json).unwrap();
        assert_eq!(format!("{}", read), format!("{}", dofs));
    }
}
