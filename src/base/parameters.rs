use serde::{Deserialize, Serialize};

/// Holds parameters for a potential-field (diffusion) element
///
/// The conductivity tensor is diagonal with components `kx` and `ky`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamPotential {
    /// Conductivity along the first dimension
    pub kx: f64,

    /// Conductivity along the second dimension
    pub ky: f64,

    /// Volumetric source term
    pub source: Option<f64>,

    /// Number of integration (Gauss) points (supplied to the integration rules)
    pub ngauss: Option<usize>,
}

impl ParamPotential {
    /// Returns sample parameters (unit isotropic conductivity)
    pub fn sample() -> Self {
        ParamPotential {
            kx: 1.0,
            ky: 1.0,
            source: None,
            ngauss: None,
        }
    }
}

/// Defines the element type with its parameters
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum Elem {
    Potential(ParamPotential),
}

impl Elem {
    /// Returns the name of the element
    pub fn name(&self) -> String {
        match self {
            Elem::Potential(..) => "Potential".to_string(),
        }
    }

    /// Returns the requested number of integration points, if any
    pub fn ngauss(&self) -> Option<usize> {
        match self {
            Elem::Potential(p) => p.ngauss,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Elem, ParamPotential};

    #[test]
    fn sample_works() {
        let p = ParamPotential::sample();
        assert_eq!(p.kx, 1.0);
        assert_eq!(p.ky, 1.0);
        assert_eq!(p.source, None);
        assert_eq!(p.ngauss, None);
    }

    #[test]
    fn elem_methods_work() {
        let mut p = ParamPotential::sample();
        p.ngauss = Some(4);
        let elem = Elem::Potential(p);
        assert_eq!(elem.name(), "Potential");
        assert_eq!(elem.ngauss(), Some(4));
    }

    #[test]
    fn derive_works() {
        let p = ParamPotential::sample();
        let elem = Elem::Potential(p);
        let clone = elem.clone();
        assert_eq!(format!("{:?}", clone), format!("{:?}", elem));
        let json = serde_json::to_string(&elem).unwrap();
        let read: Elem = serde_json::from_str(&json).unwrap();
        assert_eq!(read, elem);
    }
}
