use super::{BcConcentratedArray, BcDistributedArray, BcPrescribedArray};
use super::{Elements, FemBase, FemState, LinearSystem};
use crate::base::{Config, Essential, Natural};
use crate::StrError;
use gemlab::mesh::Mesh;
use russell_lab::vec_add;

/// Implements the solver for steady (linear) simulations
///
/// The solution follows the reduced-system (condensation) scheme: the
/// prescribed values are written into {U} first, the assembly skips the
/// prescribed equations while the boundary contributions go to the residual,
/// ones are put on the prescribed diagonal entries of K, and a single linear
/// solve yields the free unknowns:
///
/// ```text
/// K · (-ΔU) = R      with R = F_int(U) - F_ext
/// U ← U - (-ΔU)      (free equations only)
/// ```
pub struct SolverSteady<'a> {
    /// Holds configuration parameters
    config: &'a Config,

    /// Holds a collection of concentrated sources
    pub bc_concentrated: BcConcentratedArray,

    /// Holds a collection of boundary integration data
    pub bc_distributed: BcDistributedArray<'a>,

    /// Holds a collection of prescribed (primary) values
    pub bc_prescribed: BcPrescribedArray<'a>,

    /// Holds a collection of elements
    pub elements: Elements<'a>,

    /// Holds variables to solve the global linear system
    pub linear_system: LinearSystem<'a>,

    /// Array flagging the prescribed equations (the reduced system skips them)
    ignore: Vec<bool>,

    /// Unknown (free) equation numbers
    unknown: Vec<usize>,
}

impl<'a> SolverSteady<'a> {
    /// Allocates a new instance
    pub fn new(
        mesh: &'a Mesh,
        base: &'a FemBase,
        config: &'a Config,
        essential: &Essential,
        natural: &Natural,
    ) -> Result<Self, StrError> {
        config.checked()?;
        let bc_concentrated = BcConcentratedArray::new(base, natural)?;
        let bc_distributed = BcDistributedArray::new(mesh, base, config, natural)?;
        let bc_prescribed = BcPrescribedArray::new(mesh, base, essential)?;
        let elements = Elements::new(mesh, base, config)?;
        let linear_system = LinearSystem::new(base, config, &bc_prescribed, &elements, &bc_distributed)?;

        // array to ignore prescribed equations when building the reduced system
        let ignore = bc_prescribed.flags.clone();

        // collect the unknown equations
        let unknown: Vec<_> = (0..linear_system.neq_total).filter(|&eq| !ignore[eq]).collect();

        Ok(SolverSteady {
            config,
            bc_concentrated,
            bc_distributed,
            bc_prescribed,
            elements,
            linear_system,
            ignore,
            unknown,
        })
    }

    /// Solves the associated system of partial differential equations
    pub fn solve(&mut self, state: &mut FemState) -> Result<(), StrError> {
        // accessors
        let ignore = &self.ignore;
        let ff_int = &mut self.linear_system.ff_int;
        let ff_ext = &mut self.linear_system.ff_ext;
        let rr = &mut self.linear_system.rr;
        let kk = &mut self.linear_system.kk;
        let mdu = &mut self.linear_system.mdu;

        // set prescribed values
        self.bc_prescribed.apply(&mut state.uu);

        // calculate F_int with the boundary values in place; the reduced
        // residual thus carries the prescribed contributions (condensation)
        ff_int.fill(0.0);
        self.elements.assemble_f_int(ff_int, state, ignore)?;
        self.bc_distributed.assemble_f_int(ff_int, state, ignore)?;

        // calculate F_ext
        ff_ext.fill(0.0);
        self.elements.assemble_f_ext(ff_ext, ignore)?;
        self.bc_distributed.assemble_f_ext(ff_ext, ignore)?;
        self.bc_concentrated.add_to_ff_ext(ff_ext);

        // calculate the residual vector
        vec_add(rr, 1.0, ff_int, -1.0, ff_ext)?;

        // assemble the reduced matrix K
        kk.reset()?;
        let kk_coo = kk.get_coo_mut()?;
        self.elements.assemble_kke(kk_coo, state, ignore)?;
        self.bc_distributed.assemble_kke(kk_coo, state, ignore)?;

        // augment K (put ones on the diagonal of the prescribed equations)
        for eq in &self.bc_prescribed.equations {
            kk_coo.put(*eq, *eq, 1.0)?;
        }

        // factorize and solve the linear system
        self.linear_system
            .solver
            .actual
            .factorize(kk, Some(self.config.lin_sol_params))?;
        self.linear_system
            .solver
            .actual
            .solve(mdu, kk, rr, self.config.verbose_lin_sys_solve)?;

        // update U (the residual at the prescribed equations is zero)
        for i in &self.unknown {
            state.uu[*i] -= mdu[*i];
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SolverSteady;
    use crate::base::{Config, Dof, Elem, Essential, Natural, ParamPotential, SampleMeshes};
    use crate::fem::{FemBase, FemState};
    use russell_lab::vec_approx_eq;

    #[test]
    fn new_captures_errors() {
        let mesh = SampleMeshes::strip_two_qua4();
        let p1 = ParamPotential::sample();
        let base = FemBase::new(&mesh, [(1, Elem::Potential(p1))]).unwrap();
        let natural = Natural::new();

        // error due to config.validate
        let mut config = Config::new(&mesh);
        config.set_thickness(-1.0);
        let essential = Essential::new();
        assert_eq!(
            SolverSteady::new(&mesh, &base, &config, &essential, &natural).err(),
            Some("cannot allocate simulation because config.validate() failed")
        );
        let config = Config::new(&mesh);

        // error due to prescribed values
        let mut essential = Essential::new();
        essential.points(&[123], Dof::Phi, 0.0);
        assert_eq!(
            SolverSteady::new(&mesh, &base, &config, &essential, &natural).err(),
            Some("cannot find equation number because PointId is out-of-bounds")
        );
    }

    #[test]
    fn solve_works() {
        //  3------4------5      φ = 0 at x = 0
        //  |      |      |      φ = 2 at x = 2
        //  | [0]  | [1]  |      exact: φ = x
        //  0------1------2
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

        vec_approx_eq(state.uu.as_data(), &[0.0, 1.0, 2.0, 0.0, 1.0, 2.0], 1e-14);
    }
}
