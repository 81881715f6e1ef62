//! Named models and their stored results.
//!
//! The registry owns models keyed by the throat property they produce,
//! decides when each one is recomputed, and keeps the latest arrays.

use pf_core::Real;
use pf_phase::{Domain, PhaseError, PropKey, PropertyStore};
use tracing::{debug, info};

use crate::error::{ModelError, ModelResult};
use crate::model::ConduitModel;
use crate::target::ConduitTarget;

/// When a registered model is recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegenMode {
    /// On registration and on every `regenerate_models`.
    #[default]
    Normal,
    /// Not on registration; on every `regenerate_models`.
    Deferred,
    /// Once, at the first opportunity; the result is then reused.
    Constant,
    /// Only when named in `regenerate_named`.
    Explicit,
}

struct ModelEntry {
    propname: String,
    model: Box<dyn ConduitModel>,
    mode: RegenMode,
    computed: bool,
}

/// Models plus the throat arrays they produced.
#[derive(Default)]
pub struct ModelRegistry {
    /// Registration order is evaluation order.
    entries: Vec<ModelEntry>,
    results: PropertyStore,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `model` under `propname` (a `throat.*` key), replacing any
    /// model already stored there. Computes immediately unless deferred.
    pub fn add_model(
        &mut self,
        propname: &str,
        model: Box<dyn ConduitModel>,
        mode: RegenMode,
        target: &ConduitTarget<'_>,
    ) -> ModelResult<()> {
        let key = PropKey::parse(propname)?;
        if key.domain != Domain::Throat {
            return Err(PhaseError::BadKey {
                key: propname.into(),
            }
            .into());
        }

        self.remove_model(propname);
        self.entries.push(ModelEntry {
            propname: propname.into(),
            model,
            mode,
            computed: false,
        });
        debug!(propname, ?mode, "model registered");

        if mode != RegenMode::Deferred {
            let idx = self.entries.len() - 1;
            self.run(idx, target)?;
        }
        Ok(())
    }

    /// Drop a model and its stored result.
    pub fn remove_model(&mut self, propname: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.propname != propname);
        self.results.remove(propname);
        self.entries.len() != before
    }

    /// Recompute every model whose mode calls for it, in registration order.
    ///
    /// Returns the propnames that were recomputed.
    pub fn regenerate_models(&mut self, target: &ConduitTarget<'_>) -> ModelResult<Vec<String>> {
        let mut regenerated = Vec::new();
        for idx in 0..self.entries.len() {
            let entry = &self.entries[idx];
            let due = match entry.mode {
                RegenMode::Normal | RegenMode::Deferred => true,
                RegenMode::Constant => !entry.computed,
                RegenMode::Explicit => false,
            };
            if due {
                self.run(idx, target)?;
                regenerated.push(self.entries[idx].propname.clone());
            }
        }
        info!(count = regenerated.len(), "models regenerated");
        Ok(regenerated)
    }

    /// Recompute the named models regardless of their mode.
    pub fn regenerate_named(
        &mut self,
        propnames: &[&str],
        target: &ConduitTarget<'_>,
    ) -> ModelResult<()> {
        for &propname in propnames {
            let idx = self
                .entries
                .iter()
                .position(|e| e.propname == propname)
                .ok_or_else(|| ModelError::UnknownModel {
                    propname: propname.into(),
                })?;
            self.run(idx, target)?;
        }
        Ok(())
    }

    /// Latest stored result of a model.
    pub fn get(&self, propname: &str) -> Option<&[Real]> {
        self.results.get(propname)
    }

    /// Registered propnames with their modes, in registration order.
    pub fn models(&self) -> impl Iterator<Item = (&str, RegenMode)> {
        self.entries.iter().map(|e| (e.propname.as_str(), e.mode))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn run(&mut self, idx: usize, target: &ConduitTarget<'_>) -> ModelResult<()> {
        let entry = &mut self.entries[idx];
        let values = entry.model.compute(target)?;
        debug!(
            propname = %entry.propname,
            model = entry.model.name(),
            n = values.len(),
            "model computed"
        );
        self.results.insert(&entry.propname, values)?;
        entry.computed = true;
        Ok(())
    }
}
