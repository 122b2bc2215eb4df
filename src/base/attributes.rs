use super::Elem;
use crate::StrError;
use gemlab::mesh::{Cell, CellAttribute};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Holds all (CellAttribute, Elem) pairs
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Attributes {
    all: HashMap<CellAttribute, Elem>,
}

impl Attributes {
    /// Allocates a new instance from an array of (CellAttribute, Elem) pairs
    pub fn from<const N: usize>(arr: [(CellAttribute, Elem); N]) -> Self {
        Attributes {
            all: HashMap::from(arr),
        }
    }

    /// Returns the element associated with a cell
    pub fn get(&self, cell: &Cell) -> Result<&Elem, StrError> {
        self.all
            .get(&cell.attribute)
            .ok_or("cannot find CellAttribute in Attributes map")
    }

    /// Returns the requested number of integration points of an attribute
    pub fn ngauss(&self, attribute: CellAttribute) -> Result<Option<usize>, StrError> {
        let elem = self
            .all
            .get(&attribute)
            .ok_or("cannot find CellAttribute in Attributes map")?;
        Ok(elem.ngauss())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
