extern crate nyx_halo as halo;
extern crate pretty_env_logger as pel;

use halo::cosmic::MassRatio;
use halo::tools::{l2_residual, solve_equilibrium, L2Solver, LagrangeError};
use rstest::*;

#[test]
fn sun_earth_l2_distance() {
    let _ = pel::try_init();

    let gamma = solve_equilibrium(3.003e-6).unwrap();
    // L2 sits about 1.5 million km past the Earth, i.e. one hundredth of an AU
    assert!(
        (gamma - 0.01).abs() / 0.01 < 1e-2,
        "L2 should be ~0.01 from the Earth, got {gamma}"
    );
    let expected = 0.010_036_582_752_100;
    assert!(
        (gamma - expected).abs() / expected < 1e-4,
        "got {gamma} instead of {expected}"
    );
}

#[test]
fn sun_earth_l2_from_masses() {
    let mu = crate::sun_earth();
    let sol = L2Solver::default().solve(mu).unwrap();
    assert!((sol.distance - 0.010_036_029_228_385).abs() < 1e-12, "{sol}");
    assert!(sol.position(mu) > 1.0);
    assert!(sol.iterations <= 5);
}

#[rstest]
#[case(1e-9)]
#[case(1e-7)]
#[case(3.003e-6)]
#[case(1e-4)]
#[case(0.01215)]
#[case(0.1)]
fn l2_residual_is_small(#[case] mu: f64) {
    let gamma = solve_equilibrium(mu).unwrap();
    assert!(gamma > 0.0);
    assert!(
        l2_residual(mu, gamma).abs() < 1e-10,
        "residual too large for μ = {mu:e}"
    );
}

#[rstest]
#[case(1e-12)]
#[case(1e-9)]
#[case(1e-7)]
#[case(1e-6)]
fn hill_sphere_limit(#[case] mu: f64) {
    let gamma = solve_equilibrium(mu).unwrap();
    let hill = (mu / 3.0).powf(1.0 / 3.0);
    assert!(
        (gamma - hill).abs() / hill < 0.03,
        "μ = {mu:e}: L2 at {gamma} but Hill radius is {hill}"
    );
    // L2 is always slightly further out than the Hill radius
    assert!(gamma >= hill);
}

#[test]
fn l2_is_monotonic_in_mass_ratio() {
    let mut prev = 0.0;
    for mu in [1e-8, 1e-6, 1e-4, 1e-2, 0.1, 0.3] {
        let gamma = solve_equilibrium(mu).unwrap();
        assert!(gamma > prev, "γ({mu}) = {gamma} <= {prev}");
        prev = gamma;
    }
}

#[test]
fn starved_solver_keeps_last_iterate() {
    let solver = L2Solver::builder().max_iterations(1).build();
    let mu = MassRatio::new(0.3).unwrap();
    match solver.solve(mu) {
        Err(LagrangeError::MaxIterReached {
            iterations,
            last_iterate,
            residual,
        }) => {
            assert_eq!(iterations, 1);
            assert!(last_iterate.is_finite());
            assert!(residual.abs() >= solver.tolerance);
        }
        other => panic!("one iteration should not be enough, got {other:?}"),
    }
    // The default solver does converge
    assert!(L2Solver::default().solve(mu).is_ok());
}

#[test]
fn invalid_mass_ratio() {
    assert!(matches!(
        solve_equilibrium(0.0),
        Err(LagrangeError::InvalidMassRatio { .. })
    ));
    assert!(matches!(
        solve_equilibrium(1.5),
        Err(LagrangeError::InvalidMassRatio { .. })
    ));
}
