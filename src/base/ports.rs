use crate::StrError;
use gemlab::mesh::{Edge, PointId};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Holds named groups of boundary edges (ports)
///
/// A port is a labeled part of the boundary, e.g., `"ground"` or
/// `"positive"`, used to prescribe potentials and to account for fluxes.
/// Each boundary edge belongs to at most one port; the untagged remainder
/// of the boundary is insulated by omission (zero natural flux).
pub struct Ports {
    /// Port names in insertion order
    names: Vec<String>,

    /// Maps a port name to its edges
    groups: HashMap<String, Vec<Edge>>,

    /// Keys (endpoint pairs) of all tagged edges
    tagged: HashSet<(PointId, PointId)>,
}

/// Returns the key of an edge (sorted endpoints)
fn edge_key(edge: &Edge) -> (PointId, PointId) {
    let (a, b) = (edge.points[0], edge.points[1]);
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

impl Ports {
    /// Allocates a new instance
    pub fn new() -> Self {
        Ports {
            names: Vec::new(),
            groups: HashMap::new(),
            tagged: HashSet::new(),
        }
    }

    /// Tags a group of edges with a name
    pub fn tag(&mut self, name: &str, edges: &[Edge]) -> Result<&mut Self, StrError> {
        if self.groups.contains_key(name) {
            return Err("a port with the same name exists already");
        }
        let mut keys = HashSet::new();
        for edge in edges {
            let key = edge_key(edge);
            if self.tagged.contains(&key) || !keys.insert(key) {
                return Err("an edge cannot belong to more than one port");
            }
        }
        self.tagged.extend(keys.into_iter());
        self.names.push(name.to_string());
        self.groups.insert(name.to_string(), edges.to_vec());
        Ok(self)
    }

    /// Returns the edges of a port
    pub fn get(&self, name: &str) -> Result<&[Edge], StrError> {
        match self.groups.get(name) {
            Some(edges) => Ok(edges),
            None => Err("cannot find port with the given name"),
        }
    }

    /// Returns the port names in insertion order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the (sorted, unique) ids of all points of a port
    pub fn point_ids(&self, name: &str) -> Result<Vec<PointId>, StrError> {
        let edges = self.get(name)?;
        let mut set = HashSet::new();
        for edge in edges {
            for point_id in &edge.points {
                set.insert(*point_id);
            }
        }
        let mut ids: Vec<_> = set.into_iter().collect();
        ids.sort();
        Ok(ids)
    }
}

impl fmt::Display for Ports {
    /// Prints a formatted summary of the ports
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ports\n").unwrap();
        write!(f, "=====\n").unwrap();
        for name in &self.names {
            let edges = self.groups.get(name).unwrap();
            write!(f, "{:?} : {} edges\n", name, edges.len()).unwrap();
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
