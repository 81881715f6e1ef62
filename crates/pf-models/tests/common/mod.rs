//! Shared fixtures for pf-models integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use pf_core::Real;
use pf_network::{Network, NetworkBuilder};
use pf_phase::{Geometry, Phase};

pub const AREA: &str = "throat.equivalent_area";
pub const LENGTH: &str = "throat.conduit_lengths";

/// Linear chain of `n` throats: P0 - P1 - ... - Pn.
pub fn chain(n: usize) -> Arc<Network> {
    let mut builder = NetworkBuilder::new();
    let pores: Vec<_> = (0..=n).map(|i| builder.add_pore(format!("P{i}"))).collect();
    for (i, w) in pores.windows(2).enumerate() {
        builder.add_throat(format!("T{i}"), w[0], w[1]);
    }
    Arc::new(builder.build().unwrap())
}

/// A single conduit between two pores, optionally with reversed endpoints.
pub fn single(reversed: bool) -> Arc<Network> {
    let mut builder = NetworkBuilder::new();
    let a = builder.add_pore("A");
    let b = builder.add_pore("B");
    if reversed {
        builder.add_throat("T", b, a);
    } else {
        builder.add_throat("T", a, b);
    }
    Arc::new(builder.build().unwrap())
}

/// Geometry with the same legs on every throat.
pub fn uniform_geometry(network: &Arc<Network>, areas: [Real; 3], lengths: [Real; 3]) -> Geometry {
    let n = network.num_throats();
    let mut geo = Geometry::spanning("geo", network.clone());
    geo.set_legs(AREA, areas.map(|a| vec![a; n])).unwrap();
    geo.set_legs(LENGTH, lengths.map(|l| vec![l; n])).unwrap();
    geo
}

/// Phase with uniform viscosity at both granularities.
pub fn water(network: &Arc<Network>, mu: Real) -> Phase {
    let mut phase = Phase::new("water", network.clone());
    phase.set_uniform("pore.viscosity", mu).unwrap();
    phase.set_uniform("throat.viscosity", mu).unwrap();
    phase
}

/// Three legs combined in series, written out longhand.
pub fn expected_series(g: [Real; 3]) -> Real {
    1.0 / (1.0 / g[0] + 1.0 / g[1] + 1.0 / g[2])
}
