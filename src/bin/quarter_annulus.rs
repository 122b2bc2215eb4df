use gemlab::prelude::*;
use plotpy::{Curve, Plot};
use potsim::prelude::*;
use potsim::StrError;

const NAME: &str = "quarter_annulus";
const OUT_DIR: &str = "/tmp/potsim";

// Solves the Laplace equation on a quarter annulus with mixed boundary
// conditions: two isopotential ports (positive and ground) and the rest
// insulated. The exact solution is φ = 2 θ / π and the conductance (for a
// unit potential difference and unit conductivity) is 2 ln 2 / π.

const RIN: f64 = 1.0; // inner radius
const ROUT: f64 = 2.0; // outer radius
const NDIV_R: usize = 10; // number of divisions along r
const NDIV_A: usize = 20; // number of divisions along θ

fn main() -> Result<(), StrError> {
    // mesh
    let mesh = Structured::quarter_ring_2d(RIN, ROUT, NDIV_R, NDIV_A, GeoKind::Qua8, true)?;

    // features
    let features = Features::new(&mesh, false);
    let bottom = features.search_edges(At::Y(0.0), any_x)?;
    let left = features.search_edges(At::X(0.0), any_x)?;
    let inner_circle = features.search_edges(At::Circle(0.0, 0.0, RIN), any_x)?;
    let outer_circle = features.search_edges(At::Circle(0.0, 0.0, ROUT), any_x)?;

    // named ports (the arcs are kept insulated; they are tagged only for the flux report)
    let mut ports = Ports::new();
    ports.tag("ground", &bottom)?;
    ports.tag("positive", &left)?;
    ports.tag("inner", &inner_circle)?;
    ports.tag("outer", &outer_circle)?;
    println!("{}", ports);

    // parameters and base
    let p1 = ParamPotential {
        kx: 1.0,
        ky: 1.0,
        source: None,
        ngauss: None,
    };
    let base = FemBase::new(&mesh, [(1, Elem::Potential(p1))])?;

    // essential boundary conditions
    let mut essential = Essential::new();
    essential.edges(ports.get("positive")?, Dof::Phi, 1.0);
    essential.edges(ports.get("ground")?, Dof::Phi, 0.0);

    // natural boundary conditions (none: the arcs are insulated by omission)
    let natural = Natural::new();

    // configuration and state
    let config = Config::new(&mesh);
    let mut state = FemState::new(&mesh, &base, &config)?;

    // solve
    let mut solver = SolverSteady::new(&mesh, &base, &config, &essential, &natural)?;
    solver.solve(&mut state)?;

    // output files
    let mut file_io = FileIo::new();
    file_io.activate(&mesh, &base, NAME, Some(OUT_DIR))?;
    file_io.write_state(&state)?;
    file_io.write_self()?;

    // compare with the analytical solution
    let ana = QuarterAnnulusPotential::new(RIN, ROUT)?;
    let mut post = PostProc::new(&mesh, &base, &config);
    let error = post.error_l2(&state, |x, y| ana.phi(x, y))?;
    let conductance = post.energy(&state)?;
    println!("L2 error = {:.3e}", error);
    println!(
        "conductance = {:.4} (exact = 2 ln 2 / pi = {:.4})",
        conductance,
        ana.conductance()
    );

    // per-port flux accounting (outward normal convention)
    let mut total = 0.0;
    for name in ports.names() {
        let flux = post.port_flux(ports.get(name)?, &state)?;
        total += flux;
        println!("flux out through {:9} = {:8.4}", name, flux);
    }
    println!("total flux out           = {:8.1e}", total);

    // plot the potential along the mid-radius arc against the analytical curve
    let r_mid = f64::sqrt(RIN * ROUT);
    let mut theta_num = Vec::new();
    let mut phi_num = Vec::new();
    for point in &mesh.points {
        let (x, y) = (point.coords[0], point.coords[1]);
        let r = f64::sqrt(x * x + y * y);
        if f64::abs(r - r_mid) < 0.05 * (ROUT - RIN) {
            let eq = base.dofs.eq(point.id, Dof::Phi)?;
            theta_num.push(f64::atan2(y, x));
            phi_num.push(state.uu[eq]);
        }
    }
    let n_ana = 201;
    let mut theta_ana = vec![0.0; n_ana];
    let mut phi_ana = vec![0.0; n_ana];
    for i in 0..n_ana {
        let theta = (i as f64) * std::f64::consts::PI / 2.0 / ((n_ana - 1) as f64);
        theta_ana[i] = theta;
        phi_ana[i] = 2.0 * theta / std::f64::consts::PI;
    }
    let mut curve_num = Curve::new();
    curve_num
        .set_label("numerical")
        .set_line_style("None")
        .set_marker_style("o");
    curve_num.draw(&theta_num, &phi_num);
    let mut curve_ana = Curve::new();
    curve_ana.set_label("analytical: 2 θ / π");
    curve_ana.draw(&theta_ana, &phi_ana);
    let mut plot = Plot::new();
    plot.add(&curve_ana)
        .add(&curve_num)
        .grid_and_labels("θ", "φ")
        .legend();
    plot.save(&format!("{}/{}_profile.svg", OUT_DIR, NAME))?;

    Ok(())
}
