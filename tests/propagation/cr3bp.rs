extern crate nyx_halo as halo;
extern crate pretty_env_logger as pel;

use halo::cosmic::{Cr3bpState, MassRatio};
use halo::dynamics::{Cr3bpDynamics, DynamicsError};
use halo::md::{integrate_trajectory, Traj};
use halo::propagators::*;
use halo::{HaloError, State};
use rstest::*;

use super::{at_l2, JWST_OFFSET_X, JWST_VY};
use crate::{earth_moon, sun_earth};

#[fixture]
fn jwst_start() -> Cr3bpState {
    let mut state = at_l2(sun_earth());
    state.x += JWST_OFFSET_X;
    state.vy = JWST_VY;
    state
}

#[rstest]
fn samples_per_duration(jwst_start: Cr3bpState) {
    let mu = sun_earth().value();
    let (xs, ys) = integrate_trajectory(mu, jwst_start.to_vector().into(), 1.0, 0.1).unwrap();
    assert_eq!(xs.len(), 10);
    assert_eq!(ys.len(), 10);
    // The first sample is the initial state itself
    assert_eq!((xs[0], ys[0]), jwst_start.position());

    let (xs, ys) = integrate_trajectory(mu, jwst_start.to_vector().into(), 3.2, 0.015).unwrap();
    assert_eq!(xs.len(), 213);
    assert_eq!(ys.len(), 213);
}

#[rstest]
fn shorter_than_one_step(jwst_start: Cr3bpState) {
    let (xs, ys) = integrate_trajectory(
        sun_earth().value(),
        jwst_start.to_vector().into(),
        0.05,
        0.1,
    )
    .unwrap();
    assert!(xs.is_empty());
    assert!(ys.is_empty());
}

#[rstest]
fn invalid_step_or_duration(jwst_start: Cr3bpState) {
    let mu = sun_earth().value();
    let init: [f64; 4] = jwst_start.to_vector().into();
    for dt in [0.0, -0.1] {
        assert_eq!(
            integrate_trajectory(mu, init, 1.0, dt),
            Err(HaloError::Propagation {
                source: PropagationError::InvalidStep { step: dt }
            })
        );
    }
    assert!(matches!(
        integrate_trajectory(mu, init, 1.0, f64::NAN),
        Err(HaloError::Propagation {
            source: PropagationError::InvalidStep { .. }
        })
    ));
    for duration in [0.0, -1.0] {
        assert_eq!(
            integrate_trajectory(mu, init, duration, 0.1),
            Err(HaloError::Propagation {
                source: PropagationError::InvalidDuration { duration }
            })
        );
    }
}

#[rstest]
fn vanishing_step(jwst_start: Cr3bpState) {
    // Valid on its own but would require far too many steps
    assert_eq!(
        integrate_trajectory(
            sun_earth().value(),
            jwst_start.to_vector().into(),
            1.0,
            1e-300
        ),
        Err(HaloError::Propagation {
            source: PropagationError::TooManySteps {
                duration: 1.0,
                step: 1e-300
            }
        })
    );
    assert!(matches!(
        integrate_trajectory(sun_earth().value(), jwst_start.to_vector().into(), 1e300, 1e-10),
        Err(HaloError::Propagation {
            source: PropagationError::TooManySteps { .. }
        })
    ));
}

#[rstest]
fn deterministic(jwst_start: Cr3bpState) {
    let _ = pel::try_init();
    let mu = sun_earth().value();
    let first = integrate_trajectory(mu, jwst_start.to_vector().into(), 3.2, 0.015).unwrap();
    let second = integrate_trajectory(mu, jwst_start.to_vector().into(), 3.2, 0.015).unwrap();
    // Bit for bit identical
    assert_eq!(first, second);
}

#[rstest]
#[case(earth_moon(), 1e-10)]
#[case(sun_earth(), 1e-9)]
fn stationary_at_l2(#[case] mu: MassRatio, #[case] tolerance: f64) {
    let start = at_l2(mu);
    let prop = Propagator::rk4(Cr3bpDynamics::new(mu), 0.01);
    let traj = Traj::propagate(&prop, start, 1.0).unwrap();
    assert_eq!(traj.len(), 100);
    for (i, (x, y)) in traj.iter().enumerate() {
        assert!(
            (x - start.x).abs() < tolerance && y.abs() < tolerance,
            "drifted away from L2 at sample #{i}: ({x}, {y}) vs ({}, 0)",
            start.x
        );
    }
}

#[rstest]
#[case(0.01)]
#[case(0.001)]
fn jacobi_constant_is_conserved(jwst_start: Cr3bpState, #[case] step: f64) {
    let mu = sun_earth();
    let prop = Propagator::rk4(Cr3bpDynamics::new(mu), step);
    let states = prop.with(jwst_start).for_duration_with_states(1.0).unwrap();

    let c0 = jwst_start.jacobi_constant(mu.value());
    let max_drift = states
        .iter()
        .map(|state| (state.jacobi_constant(mu.value()) - c0).abs())
        .fold(0.0, f64::max);
    assert!(max_drift < 1e-10, "Jacobi constant drifted by {max_drift:e}");
}

#[test]
fn rk4_outperforms_rk2() {
    let mu = earth_moon();
    let mut start = at_l2(mu);
    start.x -= 0.01;
    start.vy = 0.05;
    let c0 = start.jacobi_constant(mu.value());

    let drift = |prop: Propagator<Cr3bpDynamics>| {
        let end = prop.with(start).for_duration(1.0).unwrap();
        (end.jacobi_constant(mu.value()) - c0).abs()
    };

    let rk4_drift = drift(Propagator::new::<RK4Fixed>(
        Cr3bpDynamics::new(mu),
        PropOpts::with_fixed_step(0.01),
    ));
    let rk2_drift = drift(Propagator::new::<RK2Fixed>(
        Cr3bpDynamics::new(mu),
        PropOpts::with_fixed_step(0.01),
    ));
    assert!(rk4_drift < 1e-10, "RK4 drift {rk4_drift:e}");
    assert!(rk2_drift > rk4_drift, "RK2 {rk2_drift:e} vs RK4 {rk4_drift:e}");
}

#[rstest]
fn samples_are_taken_before_each_step(jwst_start: Cr3bpState) {
    let mu = sun_earth();
    let prop = Propagator::rk4(Cr3bpDynamics::new(mu), 0.015);

    let mut instance = prop.with(jwst_start);
    let states = instance.for_duration_with_states(0.15).unwrap();
    assert_eq!(states.len(), 10);
    assert_eq!(states[0], jwst_start);
    assert_eq!(instance.latest_details().steps, 10);
    // The end state is one step past the last sample and isn't part of the samples
    assert!((instance.state.elapsed() - 10.0 * 0.015).abs() < 1e-12);
    assert!((states[9].elapsed() - 9.0 * 0.015).abs() < 1e-12);

    let traj = Traj::propagate(&prop, jwst_start, 0.15).unwrap();
    for (state, (x, y)) in states.iter().zip(traj.iter()) {
        assert_eq!(state.position(), (x, y));
    }
}

#[test]
fn breakdown_on_primary() {
    let mu = MassRatio::new(0.25).unwrap();
    let (x, y) = mu.secondary_position();
    match integrate_trajectory(mu.value(), [x, y, 0.0, 0.0], 1.0, 0.1) {
        Err(HaloError::Propagation {
            source:
                PropagationError::Dynamics {
                    step,
                    source: DynamicsError::NonFiniteDerivative { r2, .. },
                },
        }) => {
            assert_eq!(step, 0);
            assert_eq!(r2, 0.0);
        }
        other => panic!("expected a numerical breakdown, got {other:?}"),
    }
}

#[test]
fn breakdown_mid_run() {
    // Such a large step makes the RK4 unstable: the state grows by orders of magnitude at each
    // step until it overflows.
    let mu = MassRatio::new(0.25).unwrap();
    let step = 10.0;
    let start = [2.0, 0.0, 0.0, 0.0];

    let failed_at = match integrate_trajectory(mu.value(), start, 200.0 * step, step) {
        Err(HaloError::Propagation {
            source:
                PropagationError::Dynamics {
                    step: failed,
                    source: DynamicsError::NonFiniteDerivative { .. },
                },
        }) => failed,
        other => panic!("expected a numerical breakdown, got {other:?}"),
    };
    assert!(failed_at > 100 && failed_at < 200, "failed at step {failed_at}");

    // Stopping right before the failing step succeeds with one sample per step taken
    let (xs, ys) =
        integrate_trajectory(mu.value(), start, failed_at as f64 * step, step).unwrap();
    assert_eq!(xs.len(), failed_at);
    assert_eq!(ys.len(), failed_at);
    assert!(xs.iter().chain(ys.iter()).all(|v| v.is_finite()));

    // One more step reports the same failure
    assert!(matches!(
        integrate_trajectory(mu.value(), start, (failed_at + 1) as f64 * step, step),
        Err(HaloError::Propagation {
            source: PropagationError::Dynamics { step: again, .. }
        }) if again == failed_at
    ));
}
