use super::{Attributes, Dof, Elem};
use crate::StrError;
use gemlab::mesh::{Cell, CellAttribute, Mesh};
use gemlab::shapes::GeoKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the local DOF keys and local equation numbers of an element
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElementDofs {
    /// All local DOF keys and equation numbers
    ///
    /// The outer array has length = nnode; the inner arrays list the
    /// (Dof, local_equation) pairs of each node.
    pub dofs: Vec<Vec<(Dof, usize)>>,

    /// The number of local equations
    pub n_equation: usize,
}

/// Holds the ElementDofs of all (CellAttribute, GeoKind) combinations
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElementDofsMap {
    all: Vec<((CellAttribute, GeoKind), ElementDofs)>,
}

impl ElementDofs {
    /// Allocates a new instance
    pub fn new(ndim: usize, elem: &Elem, kind: GeoKind) -> Result<Self, StrError> {
        if ndim != 2 {
            return Err("potential elements are only available in 2D");
        }
        let nnode = kind.nnode();
        let mut dofs = vec![Vec::new(); nnode];
        let mut count = 0;
        match elem {
            Elem::Potential(..) => {
                for m in 0..nnode {
                    dofs[m].push((Dof::Phi, count));
                    count += 1;
                }
            }
        }
        Ok(ElementDofs {
            dofs,
            n_equation: count,
        })
    }
}

impl ElementDofsMap {
    /// Allocates a new instance
    pub fn new(mesh: &Mesh, amap: &Attributes) -> Result<Self, StrError> {
        let mut all = Vec::new();
        for cell in &mesh.cells {
            let elem = amap.get(cell)?;
            let key = (cell.attribute, cell.kind);
            if all.iter().all(|(k, _)| *k != key) {
                all.push((key, ElementDofs::new(mesh.ndim, elem, cell.kind)?));
            }
        }
        Ok(ElementDofsMap { all })
    }

    /// Returns the ElementDofs corresponding to a cell
    pub fn get(&self, cell: &Cell) -> Result<&ElementDofs, StrError> {
        let key = (cell.attribute, cell.kind);
        self.all
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, d)| d)
            .ok_or("cannot find (CellAttribute, GeoKind) in ElementDofsMap")
    }
}

impl fmt::Display for ElementDofs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in 0..self.dofs.len() {
            write!(f, "{}: {:?}\n", m, self.dofs[m]).unwrap();
        }
        write!(f, "count of local equations = {}\n", self.n_equation).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ElementDofs, ElementDofsMap};
    use crate::base::{Attributes, Elem, ParamPotential};
    use gemlab::mesh::{Cell, Samples};
    use gemlab::shapes::GeoKind;

    #[test]
    fn new_handles_errors() {
        let p1 = ParamPotential::sample();
        assert_eq!(
            ElementDofs::new(3, &Elem::Potential(p1), GeoKind::Tri3).err(),
            Some("potential elements are only available in 2D")
        );
    }

    #[test]
    fn new_works() {
        let p1 = ParamPotential::sample();
        let ed = ElementDofs::new(2, &Elem::Potential(p1), GeoKind::Tri3).unwrap();
        assert_eq!(ed.n_equation, 3);
        assert_eq!(
            format!("{}", ed),
            "0: [(Phi, 0)]\n\
             1: [(Phi, 1)]\n\
             2: [(Phi, 2)]\n\
             count of local equations = 3\n"
        );
    }

    #[test]
    fn map_works() {
        let mesh = Samples::three_tri3();
        let p1 = ParamPotential::sample();
        let amap = Attributes::from([(1, Elem::Potential(p1))]);
        let emap = ElementDofsMap::new(&mesh, &amap).unwrap();
        let info = emap.get(&mesh.cells[0]).unwrap();
        assert_eq!(info.n_equation, 3);

        let wrong_cell = Cell {
            id: 0,
            attribute: 1,
            kind: GeoKind::Qua4,
            points: vec![0, 1, 2, 3],
        };
        assert_eq!(
            emap.get(&wrong_cell).err(),
            Some("cannot find (CellAttribute, GeoKind) in ElementDofsMap")
        );
    }

    #[test]
    fn map_handles_errors() {
        let mesh = Samples::three_tri3();
        let mut mesh_wrong = mesh.clone();
        mesh_wrong.cells[0].attribute = 100; // << never do this!
        let p1 = ParamPotential::sample();
        let amap = Attributes::from([(1, Elem::Potential(p1))]);
        assert_eq!(
            ElementDofsMap::new(&mesh_wrong, &amap).err(),
            Some("cannot find CellAttribute in Attributes map")
        );
    }
}
