//! Conduit geometry for a subset of throats.

use std::sync::Arc;

use pf_core::Real;
use pf_network::{Network, ThroatSubset};

use crate::error::{PhaseError, PhaseResult};
use crate::key::{Domain, PropKey};
use crate::store::PropertyStore;

/// One of the three series legs of a conduit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leg {
    /// Half of the first endpoint pore.
    Pore1,
    /// The full throat.
    Throat,
    /// Half of the second endpoint pore.
    Pore2,
}

impl Leg {
    pub const ALL: [Leg; 3] = [Leg::Pore1, Leg::Throat, Leg::Pore2];

    /// Key suffix, e.g. `throat.conduit_lengths.pore1`.
    pub fn suffix(self) -> &'static str {
        match self {
            Leg::Pore1 => "pore1",
            Leg::Throat => "throat",
            Leg::Pore2 => "pore2",
        }
    }
}

/// Geometric fields for the throats a geometry object owns.
///
/// Throat fields are aligned with `throats()` (local ordering); pore fields
/// have one value per network pore.
#[derive(Debug, Clone)]
pub struct Geometry {
    name: String,
    network: Arc<Network>,
    throats: ThroatSubset,
    store: PropertyStore,
}

impl Geometry {
    pub fn new(name: impl Into<String>, network: Arc<Network>, throats: ThroatSubset) -> Self {
        Self {
            name: name.into(),
            network,
            throats,
            store: PropertyStore::new(),
        }
    }

    /// Geometry covering every throat of the network.
    pub fn spanning(name: impl Into<String>, network: Arc<Network>) -> Self {
        let throats = ThroatSubset::all(&network);
        Self::new(name, network, throats)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn network(&self) -> &Arc<Network> {
        &self.network
    }

    pub fn throats(&self) -> &ThroatSubset {
        &self.throats
    }

    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    pub fn set(&mut self, key: &str, values: Vec<Real>) -> PhaseResult<()> {
        let expected = match PropKey::parse(key)?.domain {
            Domain::Pore => self.network.num_pores(),
            Domain::Throat => self.throats.len(),
        };
        if values.len() != expected {
            return Err(PhaseError::ShapeMismatch {
                key: key.into(),
                expected,
                actual: values.len(),
            });
        }
        self.store.insert(key, values)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&[Real]> {
        self.store.get(key)
    }

    /// Store the three leg fields under `stem.pore1`, `stem.throat`, `stem.pore2`.
    pub fn set_legs(&mut self, stem: &str, legs: [Vec<Real>; 3]) -> PhaseResult<()> {
        for (leg, values) in Leg::ALL.into_iter().zip(legs) {
            self.set(&leg_key(stem, leg), values)?;
        }
        Ok(())
    }

    /// One leg field of a stem, if present.
    pub fn leg(&self, stem: &str, leg: Leg) -> Option<&[Real]> {
        self.store.get(&leg_key(stem, leg))
    }
}

/// Full key of a leg field.
pub fn leg_key(stem: &str, leg: Leg) -> String {
    format!("{stem}.{}", leg.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::ThroatId;
    use pf_network::NetworkBuilder;

    fn chain() -> Arc<Network> {
        let mut builder = NetworkBuilder::new();
        let p: Vec<_> = (0..4).map(|i| builder.add_pore(format!("P{i}"))).collect();
        for w in p.windows(2) {
            builder.add_throat("T", w[0], w[1]);
        }
        Arc::new(builder.build().unwrap())
    }

    #[test]
    fn legs_round_trip() {
        let mut geo = Geometry::spanning("geo", chain());
        geo.set_legs(
            "throat.conduit_lengths",
            [vec![1.0; 3], vec![2.0; 3], vec![3.0; 3]],
        )
        .unwrap();

        assert_eq!(
            geo.leg("throat.conduit_lengths", Leg::Throat),
            Some(&[2.0, 2.0, 2.0][..])
        );
        assert_eq!(
            geo.get("throat.conduit_lengths.pore2"),
            Some(&[3.0, 3.0, 3.0][..])
        );
        assert!(geo.leg("throat.equivalent_area", Leg::Pore1).is_none());
    }

    #[test]
    fn throat_fields_follow_subset_length() {
        let network = chain();
        let subset = ThroatSubset::from_ids(&network, [ThroatId::from_index(2)]).unwrap();
        let mut geo = Geometry::new("geo", network, subset);

        assert!(geo.set("throat.diameter", vec![1.0]).is_ok());
        assert!(geo.set("throat.diameter", vec![1.0, 2.0]).is_err());
        assert!(geo.set("pore.diameter", vec![1.0; 4]).is_ok());
    }
}
