use crate::StrError;
use std::f64::consts::PI;

/// Implements the isopotential quarter-annulus solution
///
/// The domain is the quarter annulus `rin < r < rout`, `0 < θ < π/2` with
/// unit potential on the edge at `θ = π/2`, zero potential on the edge at
/// `θ = 0`, and both arcs insulated. The potential satisfying the Laplace
/// equation is:
///
/// ```text
/// φ(x, y) = 2 θ / π       with θ = atan2(y, x)
/// ```
///
/// The squared field strength is `|grad φ|² = 4 / (π² r²)`; hence, the
/// conductance (for a unit potential difference and unit conductivity) is:
///
/// ```text
/// C = ∫ |grad φ|² dΩ = 2 ln(rout / rin) / π
/// ```
pub struct QuarterAnnulusPotential {
    /// Inner radius
    rin: f64,

    /// Outer radius
    rout: f64,
}

impl QuarterAnnulusPotential {
    /// Allocates a new instance
    pub fn new(rin: f64, rout: f64) -> Result<Self, StrError> {
        if rin <= 0.0 {
            return Err("rin must be positive");
        }
        if rout <= rin {
            return Err("rout must be greater than rin");
        }
        Ok(QuarterAnnulusPotential { rin, rout })
    }

    /// Calculates the potential
    pub fn phi(&self, x: f64, y: f64) -> f64 {
        2.0 * f64::atan2(y, x) / PI
    }

    /// Calculates the gradient of the potential
    pub fn gradient(&self, x: f64, y: f64) -> (f64, f64) {
        let rr = x * x + y * y;
        (-2.0 * y / (PI * rr), 2.0 * x / (PI * rr))
    }

    /// Calculates the conductance (for a unit potential difference and unit conductivity)
    pub fn conductance(&self) -> f64 {
        2.0 * f64::ln(self.rout / self.rin) / PI
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
