extern crate nyx_halo as halo;
extern crate pretty_env_logger as pel;

use approx::assert_abs_diff_eq;
use halo::cosmic::{Cr3bpState, MassRatio};
use halo::dynamics::Cr3bpDynamics;
use halo::md::{sweep, Traj};
use halo::propagators::{PropagationError, Propagator};

use super::{at_l2, JWST_OFFSET_X};
use crate::sun_earth;

#[test]
fn sweep_matches_sequential_runs() {
    let _ = pel::try_init();

    let mu = sun_earth();
    let l2 = at_l2(mu);
    let starts = (0..8)
        .map(|i| Cr3bpState::new(l2.x + JWST_OFFSET_X, 0.0, 0.0, 0.010 + 0.0005 * i as f64))
        .collect::<Vec<_>>();

    let results = sweep(mu, &starts, 1.0, 0.01);
    assert_eq!(results.len(), starts.len());

    let prop = Propagator::rk4(Cr3bpDynamics::new(mu), 0.01);
    for (start, result) in starts.iter().zip(results) {
        let traj = result.unwrap();
        let expected = Traj::propagate(&prop, *start, 1.0).unwrap();
        assert_eq!(traj, expected);
        assert_abs_diff_eq!(traj.xs[0], start.x, epsilon = 0.0);
    }
}

#[test]
fn failed_run_is_isolated() {
    let mu = MassRatio::new(0.25).unwrap();
    let (x2, _) = mu.secondary_position();
    let starts = [
        Cr3bpState::new(1.2, 0.0, 0.0, 0.1),
        Cr3bpState::new(x2, 0.0, 0.0, 0.0),
        Cr3bpState::new(1.3, 0.0, 0.0, 0.1),
    ];

    let results = sweep(mu, &starts, 0.5, 0.01);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().len(), 50);
    assert!(matches!(
        results[1],
        Err(PropagationError::Dynamics { step: 0, .. })
    ));
    let last = results[2].as_ref().unwrap();
    assert_eq!(last.len(), 50);
    assert_abs_diff_eq!(last.xs[0], 1.3);
}
