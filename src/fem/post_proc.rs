use super::{Elements, FemBase, FemState};
use crate::base::{Config, Dof, Elem};
use crate::StrError;
use gemlab::integ::{self, Gauss};
use gemlab::mesh::{CellId, Edge, Mesh, PointId};
use gemlab::shapes::{GeoClass, Scratchpad};
use russell_lab::{vec_inner, Matrix, Vector};
use russell_sparse::{CooMatrix, Sym};
use std::collections::HashMap;

/// Assists in post-processing the results
///
/// Implements the mass-weighted L2 norm, the discrete energy (conductance),
/// and the per-port boundary flux accounting.
pub struct PostProc<'a> {
    /// Holds the mesh
    mesh: &'a Mesh,

    /// Holds the element parameters, attributes, and equation numbers
    base: &'a FemBase,

    /// Holds configuration parameters
    config: &'a Config,

    /// Holds all Scratchpads (lazily allocated)
    all_pads: HashMap<CellId, Scratchpad>,

    /// Maps an edge (sorted endpoints) to the cell owning it (lazily built)
    edge_to_cell: Option<HashMap<(PointId, PointId), CellId>>,
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

impl<'a> PostProc<'a> {
    /// Allocates a new instance
    pub fn new(mesh: &'a Mesh, base: &'a FemBase, config: &'a Config) -> Self {
        PostProc {
            mesh,
            base,
            config,
            all_pads: HashMap::new(),
            edge_to_cell: None,
        }
    }

    /// Assembles the global mass matrix M = ∫ Nᵀ N dΩ
    pub fn mass_matrix(&mut self) -> Result<CooMatrix, StrError> {
        let ndof = self.base.dofs.size();
        let mut nnz = 0;
        for cell in &self.mesh.cells {
            let n = self.base.n_local_eq(cell)?;
            nnz += n * n;
        }
        let mut mm = CooMatrix::new(ndof, ndof, nnz, Sym::No)?;
        let thickness = self.config.thickness;
        for cell in &self.mesh.cells {
            let neq = self.base.n_local_eq(cell)?;
            let info = self.base.emap.get(cell)?;
            let mut local_to_global = vec![0; neq];
            for m in 0..cell.points.len() {
                for (dof, local) in &info.dofs[m] {
                    local_to_global[*local] = self.base.dofs.eq(cell.points[m], *dof)?;
                }
            }
            let ngauss = self.base.amap.ngauss(cell.attribute)?;
            let gauss = Gauss::new_or_sized(cell.kind, ngauss)?;
            let mut pad = Scratchpad::new(self.mesh.ndim, cell.kind)?;
            self.mesh.set_pad(&mut pad, &cell.points);
            let mut local = Matrix::new(neq, neq);
            let mut args = integ::CommonArgs::new(&mut pad, &gauss);
            args.alpha = thickness;
            integ::mat_01_nsn(&mut local, &mut args, |_, _, _| Ok(1.0))?;
            for l in 0..neq {
                for ll in 0..neq {
                    mm.put(local_to_global[l], local_to_global[ll], local.get(l, ll))?;
                }
            }
        }
        Ok(mm)
    }

    /// Computes the mass-weighted L2 norm of the error against a reference field
    ///
    /// The error is `e = u - u_exact` evaluated at the nodes, and the norm is
    /// `sqrt(eᵀ M e)` with the mass matrix of the same basis.
    pub fn error_l2<F>(&mut self, state: &FemState, exact: F) -> Result<f64, StrError>
    where
        F: Fn(f64, f64) -> f64,
    {
        let ndof = self.base.dofs.size();
        let mut ee = Vector::new(ndof);
        for point in &self.mesh.points {
            let eq = self.base.dofs.eq(point.id, Dof::Phi)?;
            ee[eq] = state.uu[eq] - exact(point.coords[0], point.coords[1]);
        }
        let mm = self.mass_matrix()?;
        let mut me = Vector::new(ndof);
        mm.mat_vec_mul(&mut me, 1.0, &ee)?;
        Ok(f64::sqrt(vec_inner(&ee, &me)))
    }

    /// Computes the discrete energy uᵀ·K·u (the conductance)
    ///
    /// K is the unreduced stiffness matrix, i.e., without the prescribed
    /// equations eliminated.
    pub fn energy(&mut self, state: &FemState) -> Result<f64, StrError> {
        let ndof = self.base.dofs.size();
        let mut elements = Elements::new(self.mesh, self.base, self.config)?;
        let mut nnz = 0;
        for cell in &self.mesh.cells {
            let n = self.base.n_local_eq(cell)?;
            nnz += n * n;
        }
        let mut kk = CooMatrix::new(ndof, ndof, nnz, Sym::No)?;
        let ignore = vec![false; ndof];
        elements.assemble_kke(&mut kk, state, &ignore)?;
        let mut kv = Vector::new(ndof);
        kk.mat_vec_mul(&mut kv, 1.0, &state.uu)?;
        Ok(vec_inner(&state.uu, &kv))
    }

    /// Computes the gradient of φ at a reference coordinate of a cell
    pub fn gradient(&mut self, cell_id: CellId, state: &FemState, iota: &[f64]) -> Result<(f64, f64), StrError> {
        let cell = &self.mesh.cells[cell_id];
        let pad = self.all_pads.entry(cell_id).or_insert(self.mesh.get_pad(cell_id));
        pad.calc_gradient(iota)?;
        let mut gx = 0.0;
        let mut gy = 0.0;
        for m in 0..cell.points.len() {
            let eq = self.base.dofs.eq(cell.points[m], Dof::Phi)?;
            gx += pad.gradient.get(m, 0) * state.uu[eq];
            gy += pad.gradient.get(m, 1) * state.uu[eq];
        }
        Ok((gx, gy))
    }

    /// Computes the outward flux ∫ (k · grad φ) · n dΓ through a group of boundary edges
    ///
    /// The gradient is evaluated at the center of the cell owning each edge
    /// and the integral uses the midpoint rule over the (straight) edge, so
    /// the result carries the discretization error of the gradient; it is a
    /// diagnostic quantity. The outward normal convention makes the fluxes
    /// of a source-free solution sum to approximately zero.
    pub fn port_flux(&mut self, edges: &[Edge], state: &FemState) -> Result<f64, StrError> {
        let mut total = 0.0;
        for edge in edges {
            total += self.edge_flux(edge, state)?;
        }
        Ok(total)
    }

    /// Computes the outward flux through a single boundary edge
    fn edge_flux(&mut self, edge: &Edge, state: &FemState) -> Result<f64, StrError> {
        // cell owning this edge
        if self.edge_to_cell.is_none() {
            self.edge_to_cell = Some(self.map_edges_to_cells());
        }
        let cell_id = match self.edge_to_cell.as_ref().unwrap().get(&edge_key(edge)) {
            Some(id) => *id,
            None => return Err("cannot find the cell owning the boundary edge"),
        };
        let cell = &self.mesh.cells[cell_id];

        // conductivity
        let Elem::Potential(param) = self.base.amap.get(cell)?;
        let (kx, ky) = (param.kx, param.ky);

        // gradient at the center of the reference domain
        let iota = match cell.kind.class() {
            GeoClass::Tri => [1.0 / 3.0, 1.0 / 3.0],
            GeoClass::Qua => [0.0, 0.0],
            _ => return Err("edge flux is only available for Tri and Qua cells"),
        };
        let (gx, gy) = self.gradient(cell_id, state, &iota)?;
        let (wx, wy) = (kx * gx, ky * gy);

        // unit normal and length of the (straight) edge
        let aa = &self.mesh.points[edge.points[0]].coords;
        let bb = &self.mesh.points[edge.points[1]].coords;
        let (tx, ty) = (bb[0] - aa[0], bb[1] - aa[1]);
        let length = f64::sqrt(tx * tx + ty * ty);
        let (mut nx, mut ny) = (ty / length, -tx / length);

        // orient the normal away from the cell center
        let cell = &self.mesh.cells[cell_id];
        let nnode = cell.points.len();
        let (mut cx, mut cy) = (0.0, 0.0);
        for m in 0..nnode {
            cx += self.mesh.points[cell.points[m]].coords[0];
            cy += self.mesh.points[cell.points[m]].coords[1];
        }
        cx /= nnode as f64;
        cy /= nnode as f64;
        let (mx, my) = ((aa[0] + bb[0]) / 2.0 - cx, (aa[1] + bb[1]) / 2.0 - cy);
        if nx * mx + ny * my < 0.0 {
            nx = -nx;
            ny = -ny;
        }

        Ok((wx * nx + wy * ny) * length * self.config.thickness)
    }

    /// Builds the map from boundary edges (sorted endpoints) to cells
    fn map_edges_to_cells(&self) -> HashMap<(PointId, PointId), CellId> {
        // map points to cells
        let mut point_to_cells: HashMap<PointId, Vec<CellId>> = HashMap::new();
        for cell in &self.mesh.cells {
            for point_id in &cell.points {
                point_to_cells.entry(*point_id).or_insert(Vec::new()).push(cell.id);
            }
        }
        // a boundary edge belongs to exactly one cell: the one sharing both endpoints
        let mut map = HashMap::new();
        for cell in &self.mesh.cells {
            let corners = &cell.points;
            for i in 0..corners.len() {
                for j in (i + 1)..corners.len() {
                    let (a, b) = (corners[i], corners[j]);
                    let shared = point_to_cells
                        .get(&a)
                        .unwrap()
                        .iter()
                        .filter(|id| point_to_cells.get(&b).unwrap().contains(id))
                        .count();
                    if shared == 1 {
                        let key = if a < b { (a, b) } else { (b, a) };
                        map.insert(key, cell.id);
                    }
                }
            }
        }
        map
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::PostProc;
    use crate::base::{Config, Dof, Elem, Essential, Natural, ParamPotential, SampleMeshes};
    use crate::fem::{FemBase, FemState, SolverSteady};
    use gemlab::mesh::Edge;
    use gemlab::shapes::GeoKind;
    use russell_lab::approx_eq;

    #[test]
    fn mass_matrix_and_error_l2_work() {
        //  3------4------5
        //  |      |      |    area = 2, unit thickness
        //  | [0]  | [1]  |
        //  0------1------2
        let mesh = SampleMeshes::strip_two_qua4();
        let p1 = ParamPotential::sample();
        let base = FemBase::new(&mesh, [(1, Elem::Potential(p1))]).unwrap();
        let config = Config::new(&mesh);
        let mut post = PostProc::new(&mesh, &base, &config);

        // the entries of M sum to the domain area
        let mm = post.mass_matrix().unwrap();
        let dense = mm.as_dense();
        let mut total = 0.0;
        for i in 0..6 {
            for j in 0..6 {
                total += dense.get(i, j);
            }
        }
        approx_eq(total, 2.0, 1e-13);

        // the L2 norm of the constant error field e = 1 is sqrt(area)
        let state = FemState::new(&mesh, &base, &config).unwrap();
        let err = post.error_l2(&state, |_, _| 1.0).unwrap();
        approx_eq(err, f64::sqrt(2.0), 1e-13);

        // the error of the exact nodal field is zero
        let mut state = FemState::new(&mesh, &base, &config).unwrap();
        for point in &mesh.points {
            state.uu[point.id] = 2.0 * point.coords[0] + 3.0 * point.coords[1];
        }
        let err = post.error_l2(&state, |x, y| 2.0 * x + 3.0 * y).unwrap();
        approx_eq(err, 0.0, 1e-14);
    }

    #[test]
    fn energy_works() {
        // φ = x over [0,2]×[0,1] with k = 1: energy = ∫ |grad φ|² = area
        let mesh = SampleMeshes::strip_two_qua4();
        let p1 = ParamPotential::sample();
        let base = FemBase::new(&mesh, [(1, Elem::Potential(p1))]).unwrap();
        let config = Config::new(&mesh);
        let mut post = PostProc::new(&mesh, &base, &config);
        let mut state = FemState::new(&mesh, &base, &config).unwrap();
        for point in &mesh.points {
            state.uu[point.id] = point.coords[0];
        }
        let energy = post.energy(&state).unwrap();
        approx_eq(energy, 2.0, 1e-13);
    }

    #[test]
    fn port_flux_works() {
        //  3------4------5    φ = 0 at x = 0, φ = 2 at x = 2
        //  |      |      |    w = grad φ = (1, 0)
        //  | [0]  | [1]  |    flux(left) = -1, flux(right) = +1
        //  0------1------2    flux(bottom) = flux(top) = 0
        let mesh = SampleMeshes::strip_two_qua4();
        let p1 = ParamPotential::sample();
        let base = FemBase::new(&mesh, [(1, Elem::Potential(p1))]).unwrap();
        let config = Config::new(&mesh);

        let mut essential = Essential::new();
        essential
            .points(&[0, 3], Dof::Phi, 0.0)
            .points(&[2, 5], Dof::Phi, 2.0);
        let natural = Natural::new();
        let mut state = FemState::new(&mesh, &base, &config).unwrap();
        let mut solver = SolverSteady::new(&mesh, &base, &config, &essential, &natural).unwrap();
        solver.solve(&mut state).unwrap();

        let left = vec![Edge {
            kind: GeoKind::Lin2,
            points: vec![0, 3],
        }];
        let right = vec![Edge {
            kind: GeoKind::Lin2,
            points: vec![2, 5],
        }];
        let bottom = vec![
            Edge {
                kind: GeoKind::Lin2,
                points: vec![0, 1],
            },
            Edge {
                kind: GeoKind::Lin2,
                points: vec![1, 2],
            },
        ];
        let mut post = PostProc::new(&mesh, &base, &config);
        approx_eq(post.port_flux(&left, &state).unwrap(), -1.0, 1e-13);
        approx_eq(post.port_flux(&right, &state).unwrap(), 1.0, 1e-13);
        approx_eq(post.port_flux(&bottom, &state).unwrap(), 0.0, 1e-13);
    }
}
