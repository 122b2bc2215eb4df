use gemlab::prelude::*;
use plotpy::{Curve, Plot, SlopeIcon};
use potsim::prelude::*;
use potsim::StrError;
use std::time::Instant;

const NAME: &str = "quarter_annulus_convergence";
const OUT_DIR: &str = "/tmp/potsim";

// Runs the quarter-annulus problem on a sequence of refined meshes and
// records the L2 error and the conductance; the error is plotted against
// the number of DOFs in log-log scale.

const RIN: f64 = 1.0; // inner radius
const ROUT: f64 = 2.0; // outer radius

fn main() -> Result<(), StrError> {
    let sizes = &[(2, 4), (4, 8), (8, 16), (16, 32), (32, 64)];
    let n = sizes.len();
    let mut results = ConvergenceResults::new(n);
    results.name = String::from("qua8");
    let ana = QuarterAnnulusPotential::new(RIN, ROUT)?;

    for (idx, (nr, na)) in sizes.iter().enumerate() {
        // mesh and features
        let mesh = Structured::quarter_ring_2d(RIN, ROUT, *nr, *na, GeoKind::Qua8, true)?;
        let features = Features::new(&mesh, false);
        let bottom = features.search_edges(At::Y(0.0), any_x)?;
        let left = features.search_edges(At::X(0.0), any_x)?;

        // parameters and base
        let p1 = ParamPotential {
            kx: 1.0,
            ky: 1.0,
            source: None,
            ngauss: None,
        };
        let base = FemBase::new(&mesh, [(1, Elem::Potential(p1))])?;

        // boundary conditions
        let mut essential = Essential::new();
        essential.edges(&left, Dof::Phi, 1.0).edges(&bottom, Dof::Phi, 0.0);
        let natural = Natural::new();

        // solve
        let config = Config::new(&mesh);
        let mut state = FemState::new(&mesh, &base, &config)?;
        let mut solver = SolverSteady::new(&mesh, &base, &config, &essential, &natural)?;
        let sw = Instant::now();
        solver.solve(&mut state)?;
        let elapsed = sw.elapsed().as_nanos();

        // results
        let mut post = PostProc::new(&mesh, &base, &config);
        let error = post.error_l2(&state, |x, y| ana.phi(x, y))?;
        let energy = post.energy(&state)?;
        results.time[idx] = elapsed;
        results.ndof[idx] = base.dofs.size();
        results.error[idx] = error;
        results.energy[idx] = energy;
        println!(
            "ndof = {:6}, err = {:.2e}, conductance = {:.6} (exact = {:.6})",
            base.dofs.size(),
            error,
            energy,
            ana.conductance()
        );
    }

    // save the results
    results.write(&format!("{}/{}.json", OUT_DIR, NAME))?;

    // plot the convergence curve
    let x: Vec<_> = results.ndof.iter().map(|n| *n as f64).collect();
    let mut curve = Curve::new();
    curve.set_label("qua8").set_marker_style("o");
    curve.draw(&x, &results.error);
    let mut icon = SlopeIcon::new();
    icon.set_length(0.235);
    icon.draw(-1.5, 1e3, 1e-4);
    let mut plot = Plot::new();
    plot.set_log_x(true)
        .set_log_y(true)
        .add(&curve)
        .add(&icon)
        .grid_and_labels("NDOF", "ERROR");
    plot.save(&format!("{}/{}.svg", OUT_DIR, NAME))?;

    Ok(())
}
