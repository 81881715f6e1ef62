mod common;

use common::*;
use pf_core::{Real, Tolerances, nearly_equal};
use pf_models::{ConduitTarget, DiffusiveKeys, ModelError, diffusive_leg, ordinary_diffusion};
use pf_phase::Phase;

fn tol() -> Tolerances {
    Tolerances {
        abs: 1e-15,
        rel: 1e-12,
    }
}

#[test]
fn unit_density_is_area_over_length() {
    let network = single(false);
    let geo = uniform_geometry(&network, [2.0, 1.0, 2.0], [1.0, 2.0, 1.0]);
    let mut phase = Phase::new("air", network.clone());
    phase.set_uniform("pore.diffusivity", 2e-5).unwrap();

    let keys = DiffusiveKeys {
        molar_density: None,
        ..DiffusiveKeys::default()
    };
    let target = ConduitTarget::new(&phase, &geo).unwrap();
    let g = ordinary_diffusion(&target, &keys).unwrap();

    let expected = expected_series([
        diffusive_leg(2.0, 1.0, 2e-5),
        diffusive_leg(1.0, 2.0, 2e-5),
        diffusive_leg(2.0, 1.0, 2e-5),
    ]);
    assert!(nearly_equal(g[0], expected, tol()));
}

#[test]
fn molar_density_scales_each_leg() {
    let network = single(false);
    let geo = uniform_geometry(&network, [1.0; 3], [1.0; 3]);
    let mut phase = Phase::new("air", network.clone());
    phase.set("pore.diffusivity", vec![1.0, 2.0]).unwrap();
    phase.set_uniform("throat.diffusivity", 4.0).unwrap();
    phase.set("pore.molar_density", vec![10.0, 20.0]).unwrap();

    let target = ConduitTarget::new(&phase, &geo).unwrap();
    let g = ordinary_diffusion(&target, &DiffusiveKeys::default()).unwrap();

    // Throat density interpolates to 15
    let expected: Real = expected_series([10.0 * 1.0, 15.0 * 4.0, 20.0 * 2.0]);
    assert!(nearly_equal(g[0], expected, tol()));
}

#[test]
fn missing_density_fails_when_requested() {
    let network = single(false);
    let geo = uniform_geometry(&network, [1.0; 3], [1.0; 3]);
    let mut phase = Phase::new("air", network.clone());
    phase.set_uniform("pore.diffusivity", 1.0).unwrap();

    let target = ConduitTarget::new(&phase, &geo).unwrap();
    let err = ordinary_diffusion(&target, &DiffusiveKeys::default()).unwrap_err();
    assert_eq!(
        err,
        ModelError::MissingProperty {
            key: "throat.molar_density".into()
        }
    );
}

#[test]
fn zero_length_leg_does_not_poison_result() {
    let network = single(false);
    let geo = uniform_geometry(&network, [0.0, 1.0, 1.0], [0.0, 1.0, 1.0]);
    let mut phase = Phase::new("air", network.clone());
    phase.set_uniform("pore.diffusivity", 1.0).unwrap();

    let keys = DiffusiveKeys {
        molar_density: None,
        ..DiffusiveKeys::default()
    };
    let target = ConduitTarget::new(&phase, &geo).unwrap();
    let g = ordinary_diffusion(&target, &keys).unwrap();
    assert!(nearly_equal(g[0], 0.5, tol()));
}
