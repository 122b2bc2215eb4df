use super::{ElementTrait, FemBase, FemState};
use crate::base::{Config, ParamPotential};
use crate::StrError;
use gemlab::integ::{self, Gauss};
use gemlab::mesh::{Cell, Mesh};
use gemlab::shapes::Scratchpad;
use russell_lab::{Matrix, Vector};
use russell_tensor::{Mandel, Tensor2};

/// Implements the potential-field (steady diffusion) element
///
/// The element contributes the following terms to the global system:
///
/// ```text
/// f_int = ∫ Gᵀ w dΩ     with w = k · grad(φ)
/// f_ext = ∫ Nᵀ s dΩ     (source term, if any)
/// Ke    = ∫ Gᵀ k G dΩ
/// ```
pub struct ElementPotential<'a> {
    /// Global configuration
    pub config: &'a Config,

    /// The cell corresponding to this element
    pub cell: &'a Cell,

    /// The element parameters
    pub param: &'a ParamPotential,

    /// Local-to-global mapping
    pub local_to_global: Vec<usize>,

    /// Scratchpad to perform numerical integration
    pub pad: Scratchpad,

    /// Integration (Gauss) points
    pub gauss: Gauss,

    /// Conductivity tensor
    conductivity: Tensor2,
}

impl<'a> ElementPotential<'a> {
    /// Allocates a new instance
    pub fn new(
        mesh: &Mesh,
        base: &FemBase,
        config: &'a Config,
        cell: &'a Cell,
        param: &'a ParamPotential,
    ) -> Result<Self, StrError> {
        // local-to-global mapping
        let info = base.emap.get(cell)?;
        let mut local_to_global = vec![0; info.n_equation];
        for m in 0..cell.points.len() {
            for (dof, local) in &info.dofs[m] {
                local_to_global[*local] = base.dofs.eq(cell.points[m], *dof)?;
            }
        }

        // pad and integration points
        let mut pad = Scratchpad::new(mesh.ndim, cell.kind)?;
        mesh.set_pad(&mut pad, &cell.points);
        let gauss = Gauss::new_or_sized(cell.kind, param.ngauss)?;

        // conductivity
        let mut conductivity = Tensor2::new(Mandel::Symmetric2D);
        conductivity.sym_set(0, 0, param.kx);
        conductivity.sym_set(1, 1, param.ky);

        // done
        Ok(ElementPotential {
            config,
            cell,
            param,
            local_to_global,
            pad,
            gauss,
            conductivity,
        })
    }
}

impl<'a> ElementTrait for ElementPotential<'a> {
    /// Returns whether the local Jacobian matrix is symmetric or not
    fn symmetric_jacobian(&self) -> bool {
        true
    }

    /// Returns the local-to-global mapping
    fn local_to_global(&self) -> &Vec<usize> {
        &self.local_to_global
    }

    /// Calculates the vector of internal forces (the flux term)
    fn calc_f_int(&mut self, f_int: &mut Vector, state: &FemState) -> Result<(), StrError> {
        let (kx, ky) = (self.param.kx, self.param.ky);
        let l2g = &self.local_to_global;
        let uu = &state.uu;
        let mut args = integ::CommonArgs::new(&mut self.pad, &self.gauss);
        args.alpha = self.config.thickness;
        integ::vec_03_vg(f_int, &mut args, |w, _, _, gg| {
            // interpolate grad(φ) at the integration point
            let (nnode, _) = gg.dims();
            let mut gx = 0.0;
            let mut gy = 0.0;
            for m in 0..nnode {
                let phi_m = uu[l2g[m]];
                gx += gg.get(m, 0) * phi_m;
                gy += gg.get(m, 1) * phi_m;
            }
            w[0] = kx * gx;
            w[1] = ky * gy;
            Ok(())
        })
    }

    /// Calculates the vector of external forces (the source term)
    fn calc_f_ext(&mut self, f_ext: &mut Vector) -> Result<(), StrError> {
        match self.param.source {
            Some(s) => {
                let mut args = integ::CommonArgs::new(&mut self.pad, &self.gauss);
                args.alpha = self.config.thickness;
                integ::vec_01_ns(f_ext, &mut args, |_, _| Ok(s))
            }
            None => {
                f_ext.fill(0.0);
                Ok(())
            }
        }
    }

    /// Calculates the Jacobian matrix
    fn calc_kke(&mut self, kke: &mut Matrix, _state: &FemState) -> Result<(), StrError> {
        let conductivity = &self.conductivity;
        let mut args = integ::CommonArgs::new(&mut self.pad, &self.gauss);
        args.alpha = self.config.thickness;
        integ::mat_03_gtg(kke, &mut args, |tt, _, _, _| {
            tt.set_tensor(1.0, conductivity);
            Ok(())
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ElementPotential;
    use crate::base::{Config, Elem, ParamPotential};
    use crate::fem::{ElementTrait, FemBase, FemState};
    use gemlab::mesh::{Cell, Mesh, Point};
    use gemlab::shapes::GeoKind;
    use russell_lab::{mat_approx_eq, vec_approx_eq, Matrix, Vector};

    /// Returns a right triangle with unit legs
    ///
    /// ```text
    /// 2
    /// | \
    /// |   \
    /// 0-----1
    /// ```
    #[rustfmt::skip]
    fn one_tri3_right() -> Mesh {
        Mesh {
            ndim: 2,
            points: vec![
                Point { id: 0, marker: 0, coords: vec![0.0, 0.0] },
                Point { id: 1, marker: 0, coords: vec![1.0, 0.0] },
                Point { id: 2, marker: 0, coords: vec![0.0, 1.0] },
            ],
            cells: vec![
                Cell { id: 0, attribute: 1, kind: GeoKind::Tri3, points: vec![0, 1, 2] },
            ],
        }
    }

    #[test]
    fn new_works() {
        let mesh = one_tri3_right();
        let p1 = ParamPotential::sample();
        let base = FemBase::new(&mesh, [(1, Elem::Potential(p1))]).unwrap();
        let config = Config::new(&mesh);
        let elem = ElementPotential::new(&mesh, &base, &config, &mesh.cells[0], &p1).unwrap();
        assert_eq!(elem.local_to_global(), &vec![0, 1, 2]);
        assert_eq!(elem.symmetric_jacobian(), true);
    }

    #[test]
    fn calc_kke_works() {
        let mesh = one_tri3_right();
        let mut p1 = ParamPotential::sample();
        p1.kx = 2.0;
        p1.ky = 2.0;
        let base = FemBase::new(&mesh, [(1, Elem::Potential(p1))]).unwrap();
        let config = Config::new(&mesh);
        let mut elem = ElementPotential::new(&mesh, &base, &config, &mesh.cells[0], &p1).unwrap();
        let state = FemState::new(&mesh, &base, &config).unwrap();
        let mut kke = Matrix::new(3, 3);
        elem.calc_kke(&mut kke, &state).unwrap();
        // K = (k/2) [[2,-1,-1],[-1,1,0],[-1,0,1]] for the unit right triangle
        let correct = Matrix::from(&[
            [2.0, -1.0, -1.0],
            [-1.0, 1.0, 0.0],
            [-1.0, 0.0, 1.0],
        ]);
        mat_approx_eq(&kke, &correct, 1e-14);
    }

    #[test]
    fn calc_f_int_works() {
        let mesh = one_tri3_right();
        let mut p1 = ParamPotential::sample();
        p1.kx = 3.0;
        let base = FemBase::new(&mesh, [(1, Elem::Potential(p1))]).unwrap();
        let config = Config::new(&mesh);
        let mut elem = ElementPotential::new(&mesh, &base, &config, &mesh.cells[0], &p1).unwrap();

        // φ = x  ⇒  w = (kx, 0)  ⇒  f_int = A (Gᵀ w) = kx (-1/2, 1/2, 0)
        let mut state = FemState::new(&mesh, &base, &config).unwrap();
        for point in &mesh.points {
            state.uu[point.id] = point.coords[0];
        }
        let mut f_int = Vector::new(3);
        elem.calc_f_int(&mut f_int, &state).unwrap();
        vec_approx_eq(f_int.as_data(), &[-1.5, 1.5, 0.0], 1e-14);
    }

    #[test]
    fn calc_f_ext_works() {
        let mesh = one_tri3_right();
        let mut p1 = ParamPotential::sample();
        p1.source = Some(6.0);
        let base = FemBase::new(&mesh, [(1, Elem::Potential(p1))]).unwrap();
        let config = Config::new(&mesh);
        let mut elem = ElementPotential::new(&mesh, &base, &config, &mesh.cells[0], &p1).unwrap();
        let mut f_ext = Vector::new(3);
        elem.calc_f_ext(&mut f_ext).unwrap();
        // s A / 3 at each node
        vec_approx_eq(f_ext.as_data(), &[1.0, 1.0, 1.0], 1e-14);

        // without a source, the vector is cleared
        let p2 = ParamPotential::sample();
        let base = FemBase::new(&mesh, [(1, Elem::Potential(p2))]).unwrap();
        let mut elem = ElementPotential::new(&mesh, &base, &config, &mesh.cells[0], &p2).unwrap();
        let mut f_ext = Vector::from(&[123.0, 123.0, 123.0]);
        elem.calc_f_ext(&mut f_ext).unwrap();
        vec_approx_eq(f_ext.as_data(), &[0.0, 0.0, 0.0], 1e-15);
    }
}
