//! Hagen-Poiseuille hydraulic conductance.

use pf_core::Real;

use crate::conduit::{ConduitLegs, conduit_conductance, resolve_required};
use crate::error::ModelResult;
use crate::law::{Dimensionality, poiseuille_leg};
use crate::model::ConduitModel;
use crate::target::ConduitTarget;

/// Property keys read by `hagen_poiseuille`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HydraulicKeys {
    pub pore_viscosity: String,
    pub throat_viscosity: String,
    /// Stem of the `.pore1`/`.throat`/`.pore2` equivalent-area fields.
    pub throat_equivalent_area: String,
    /// Stem of the `.pore1`/`.throat`/`.pore2` conduit-length fields.
    pub throat_conduit_lengths: String,
}

impl Default for HydraulicKeys {
    fn default() -> Self {
        Self {
            pore_viscosity: "pore.viscosity".into(),
            throat_viscosity: "throat.viscosity".into(),
            throat_equivalent_area: "throat.equivalent_area".into(),
            throat_conduit_lengths: "throat.conduit_lengths".into(),
        }
    }
}

/// Hydraulic conductance of every conduit of `target`.
///
/// Viscosity is resolved separately for throats and pores; each falls back
/// to interpolating the other when it isn't stored. Each leg uses the
/// viscosity of its own domain.
pub fn hagen_poiseuille(
    target: &ConduitTarget<'_>,
    keys: &HydraulicKeys,
    dim: Dimensionality,
) -> ModelResult<Vec<Real>> {
    let legs = ConduitLegs::fetch(
        target,
        &keys.throat_equivalent_area,
        &keys.throat_conduit_lengths,
    )?;

    let phase = target.phase();
    let mu_throat = resolve_required(phase, &keys.throat_viscosity, &keys.pore_viscosity)?;
    let mu_pore = resolve_required(phase, &keys.pore_viscosity, &keys.throat_viscosity)?;

    conduit_conductance(target, &legs, &mu_pore, &mu_throat, |area, length, mu| {
        poiseuille_leg(area, length, mu, dim)
    })
}

/// Registry-ready Hagen-Poiseuille model.
#[derive(Debug, Clone, Default)]
pub struct HagenPoiseuille {
    pub keys: HydraulicKeys,
    pub dimensionality: Dimensionality,
}

impl HagenPoiseuille {
    /// Conventional output key.
    pub const PROPNAME: &'static str = "throat.hydraulic_conductance";

    pub fn new(dimensionality: Dimensionality) -> Self {
        Self {
            keys: HydraulicKeys::default(),
            dimensionality,
        }
    }

    pub fn with_keys(mut self, keys: HydraulicKeys) -> Self {
        self.keys = keys;
        self
    }
}

impl ConduitModel for HagenPoiseuille {
    fn name(&self) -> &str {
        "hagen_poiseuille"
    }

    fn compute(&self, target: &ConduitTarget<'_>) -> ModelResult<Vec<Real>> {
        hagen_poiseuille(target, &self.keys, self.dimensionality)
    }
}
