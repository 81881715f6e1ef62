//! The object a model is evaluated for.

use std::sync::Arc;

use pf_network::{Network, ThroatSubset};
use pf_phase::{Geometry, Phase};

use crate::error::{ModelError, ModelResult};

/// Explicit handles to everything a conduit model reads.
///
/// The throat subset fixes the length and order of every model output.
#[derive(Debug, Clone, Copy)]
pub struct ConduitTarget<'a> {
    network: &'a Network,
    phase: &'a Phase,
    geometry: &'a Geometry,
    throats: &'a ThroatSubset,
}

impl<'a> ConduitTarget<'a> {
    /// Target covering the throats the geometry owns.
    pub fn new(phase: &'a Phase, geometry: &'a Geometry) -> ModelResult<Self> {
        Self::with_throats(phase, geometry, geometry.throats())
    }

    /// Target for an explicit throat subset.
    ///
    /// `throats` fixes the order of model outputs. Every throat in it must
    /// belong to the geometry's subset; this is checked at evaluation time.
    pub fn with_throats(
        phase: &'a Phase,
        geometry: &'a Geometry,
        throats: &'a ThroatSubset,
    ) -> ModelResult<Self> {
        if !Arc::ptr_eq(phase.network(), geometry.network()) {
            return Err(ModelError::NetworkMismatch {
                phase: phase.name().into(),
                geometry: geometry.name().into(),
            });
        }
        Ok(Self {
            network: phase.network(),
            phase,
            geometry,
            throats,
        })
    }

    pub fn network(&self) -> &'a Network {
        self.network
    }

    pub fn phase(&self) -> &'a Phase {
        self.phase
    }

    pub fn geometry(&self) -> &'a Geometry {
        self.geometry
    }

    pub fn throats(&self) -> &'a ThroatSubset {
        self.throats
    }
}
