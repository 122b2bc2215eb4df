use super::{Nbc, Pbc};
use gemlab::mesh::{Edge, PointId};
use std::fmt;

/// Holds natural (Neumann/Robin) boundary conditions
pub struct Natural {
    /// Holds the concentrated sources (point, kind, value)
    pub at_points: Vec<(PointId, Pbc, f64)>,

    /// Holds the distributed conditions (edge, kind, value)
    pub on_edges: Vec<(Edge, Nbc, f64)>,
}

impl Natural {
    /// Allocates a new instance
    pub fn new() -> Self {
        Natural {
            at_points: Vec::new(),
            on_edges: Vec::new(),
        }
    }

    /// Sets natural boundary condition at points
    pub fn points(&mut self, points: &[PointId], pbc: Pbc, value: f64) -> &mut Self {
        for point_id in points {
            self.at_points.push((*point_id, pbc, value));
        }
        self
    }

    /// Sets natural boundary condition on edges
    pub fn edges(&mut self, edges: &[Edge], nbc: Nbc, value: f64) -> &mut Self {
        for edge in edges {
            self.on_edges.push((edge.clone(), nbc, value));
        }
        self
    }
}

impl fmt::Display for Natural {
    /// Prints a formatted summary of the natural boundary conditions
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Concentrated boundary conditions\n").unwrap();
        write!(f, "================================\n").unwrap();
        for (id, pbc, value) in &self.at_points {
            write!(f, "{:?} : {} = {:?}\n", id, pbc, value).unwrap();
        }
        write!(f, "\nDistributed boundary conditions\n").unwrap();
        write!(f, "===============================\n").unwrap();
        for (edge, nbc, value) in &self.on_edges {
            write!(f, "{:?} : {} = {:?}\n", edge.points, nbc, value).unwrap();
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Natural;
    use crate::base::{Nbc, Pbc};
    use gemlab::mesh::Edge;
    use gemlab::shapes::GeoKind;

    #[test]
    fn natural_works() {
        let mut natural = Natural::new();
        let edges = vec![
            Edge {
                kind: GeoKind::Lin2,
                points: vec![1, 2],
            },
            Edge {
                kind: GeoKind::Lin2,
                points: vec![2, 3],
            },
        ];
        natural
            .points(&[10], Pbc::Q, -100.0)
            .edges(&edges, Nbc::Qn, 5.0);
        assert_eq!(natural.at_points.len(), 1);
        assert_eq!(natural.on_edges.len(), 2);
        assert_eq!(
            format!("{}", natural),
            "Concentrated boundary conditions\n\
             ================================\n\
             10 : Q = -100.0\n\
             \n\
             Distributed boundary conditions\n\
             ===============================\n\
             [1, 2] : Qn = 5.0\n\
             [2, 3] : Qn = 5.0\n"
        );
    }
}
