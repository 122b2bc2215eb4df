use super::Dof;
use gemlab::mesh::{Edge, PointId};
use std::collections::HashMap;
use std::fmt;

/// Holds essential (Dirichlet) boundary conditions
///
/// The values are constants: the simulation is steady and the prescribed
/// potentials do not vary.
pub struct Essential {
    /// Holds all prescribed (PointId, Dof) pairs and respective values
    pub all: HashMap<(PointId, Dof), f64>,
}

impl Essential {
    /// Allocates a new instance
    pub fn new() -> Self {
        Essential { all: HashMap::new() }
    }

    /// Sets essential boundary condition at points
    pub fn points(&mut self, points: &[PointId], dof: Dof, value: f64) -> &mut Self {
        for point_id in points {
            self.all.insert((*point_id, dof), value);
        }
        self
    }

    /// Sets essential boundary condition on edges
    pub fn edges(&mut self, edges: &[Edge], dof: Dof, value: f64) -> &mut Self {
        for edge in edges {
            for point_id in &edge.points {
                self.all.insert((*point_id, dof), value);
            }
        }
        self
    }

    /// Returns the number of prescribed (PointId, Dof) pairs
    pub fn size(&self) -> usize {
        self.all.len()
    }
}

impl fmt::Display for Essential {
    /// Prints a formatted summary of the essential boundary conditions
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Essential boundary conditions\n").unwrap();
        write!(f, "=============================\n").unwrap();
        let mut keys: Vec<_> = self.all.keys().collect();
        keys.sort();
        for key in keys {
            let value = self.all.get(key).unwrap();
            write!(f, "{:?} : {:?} = {:?}\n", key.0, key.1, value).unwrap();
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
