//! Ordinary (Fickian) diffusive conductance.

use pf_core::Real;

use crate::conduit::{ConduitLegs, conduit_conductance, resolve_required};
use crate::error::ModelResult;
use crate::law::diffusive_leg;
use crate::model::ConduitModel;
use crate::target::ConduitTarget;

/// Property keys read by `ordinary_diffusion`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffusiveKeys {
    pub pore_diffusivity: String,
    pub throat_diffusivity: String,
    /// `(pore, throat)` molar density keys; `None` uses unit density.
    pub molar_density: Option<(String, String)>,
    pub throat_equivalent_area: String,
    pub throat_conduit_lengths: String,
}

impl Default for DiffusiveKeys {
    fn default() -> Self {
        Self {
            pore_diffusivity: "pore.diffusivity".into(),
            throat_diffusivity: "throat.diffusivity".into(),
            molar_density: Some(("pore.molar_density".into(), "throat.molar_density".into())),
            throat_equivalent_area: "throat.equivalent_area".into(),
            throat_conduit_lengths: "throat.conduit_lengths".into(),
        }
    }
}

/// Diffusive conductance `c·D·A/L` per leg, combined in series.
pub fn ordinary_diffusion(
    target: &ConduitTarget<'_>,
    keys: &DiffusiveKeys,
) -> ModelResult<Vec<Real>> {
    let legs = ConduitLegs::fetch(
        target,
        &keys.throat_equivalent_area,
        &keys.throat_conduit_lengths,
    )?;

    let phase = target.phase();
    let d_throat = resolve_required(phase, &keys.throat_diffusivity, &keys.pore_diffusivity)?;
    let d_pore = resolve_required(phase, &keys.pore_diffusivity, &keys.throat_diffusivity)?;

    let (pore_coeff, throat_coeff): (Vec<Real>, Vec<Real>) = match &keys.molar_density {
        Some((pore_key, throat_key)) => {
            let c_throat = resolve_required(phase, throat_key, pore_key)?;
            let c_pore = resolve_required(phase, pore_key, throat_key)?;
            (product(&c_pore, &d_pore), product(&c_throat, &d_throat))
        }
        None => (d_pore.into_owned(), d_throat.into_owned()),
    };

    conduit_conductance(target, &legs, &pore_coeff, &throat_coeff, diffusive_leg)
}

fn product(a: &[Real], b: &[Real]) -> Vec<Real> {
    a.iter().zip(b).map(|(x, y)| x * y).collect()
}

/// Registry-ready ordinary diffusion model.
#[derive(Debug, Clone, Default)]
pub struct OrdinaryDiffusion {
    pub keys: DiffusiveKeys,
}

impl OrdinaryDiffusion {
    /// Conventional output key.
    pub const PROPNAME: &'static str = "throat.diffusive_conductance";

    pub fn new(keys: DiffusiveKeys) -> Self {
        Self { keys }
    }
}

impl ConduitModel for OrdinaryDiffusion {
    fn name(&self) -> &str {
        "ordinary_diffusion"
    }

    fn compute(&self, target: &ConduitTarget<'_>) -> ModelResult<Vec<Real>> {
        ordinary_diffusion(target, &self.keys)
    }
}
