//! Network-wide material properties.

use std::sync::Arc;

use pf_core::Real;
use pf_network::Network;

use crate::error::{PhaseError, PhaseResult};
use crate::interpolate;
use crate::key::{Domain, PropKey};
use crate::resolve::Resolution;
use crate::store::PropertyStore;

/// A fluid phase: material properties for every pore and throat of a network.
///
/// Pore fields have one value per network pore, throat fields one value per
/// network throat (global indexing).
#[derive(Debug, Clone)]
pub struct Phase {
    name: String,
    network: Arc<Network>,
    store: PropertyStore,
}

impl Phase {
    pub fn new(name: impl Into<String>, network: Arc<Network>) -> Self {
        Self {
            name: name.into(),
            network,
            store: PropertyStore::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn network(&self) -> &Arc<Network> {
        &self.network
    }

    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    /// Number of values a field in `domain` must hold.
    pub fn count(&self, domain: Domain) -> usize {
        match domain {
            Domain::Pore => self.network.num_pores(),
            Domain::Throat => self.network.num_throats(),
        }
    }

    /// Store a field after checking its length against the network.
    pub fn set(&mut self, key: &str, values: Vec<Real>) -> PhaseResult<()> {
        let parsed = PropKey::parse(key)?;
        self.check_len(key, parsed.domain, values.len())?;
        self.store.insert(key, values)?;
        Ok(())
    }

    /// Store a field holding the same value everywhere in its domain.
    pub fn set_uniform(&mut self, key: &str, value: Real) -> PhaseResult<()> {
        let parsed = PropKey::parse(key)?;
        let n = self.count(parsed.domain);
        self.set(key, vec![value; n])
    }

    pub fn get(&self, key: &str) -> Option<&[Real]> {
        self.store.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<Real>> {
        self.store.remove(key)
    }

    /// Interpolate a stored field onto the other domain.
    pub fn interpolate(&self, key: &str) -> PhaseResult<Vec<Real>> {
        let parsed = PropKey::parse(key)?;
        let values = self
            .store
            .get(key)
            .ok_or_else(|| PhaseError::NotFound { key: key.into() })?;
        interpolate::interpolate(&self.network, parsed.domain, values, key)
    }

    /// Resolve `key`, falling back to interpolating `fallback` from the other
    /// domain when `key` is not stored.
    pub fn resolve(&self, key: &str, fallback: &str) -> PhaseResult<Resolution<'_>> {
        let parsed = PropKey::parse(key)?;
        let parsed_fallback = PropKey::parse(fallback)?;
        if parsed_fallback.domain == parsed.domain {
            return Err(PhaseError::SameDomainFallback {
                key: key.into(),
                fallback: fallback.into(),
            });
        }

        if let Some(values) = self.store.get(key) {
            self.check_len(key, parsed.domain, values.len())?;
            return Ok(Resolution::Native(values));
        }
        if self.store.contains(fallback) {
            return Ok(Resolution::Interpolated(self.interpolate(fallback)?));
        }
        Ok(Resolution::Absent)
    }

    /// Resolve `key`, falling back to the same name in the other domain.
    pub fn resolve_counterpart(&self, key: &str) -> PhaseResult<Resolution<'_>> {
        let fallback = PropKey::parse(key)?.counterpart().to_string();
        self.resolve(key, &fallback)
    }

    fn check_len(&self, key: &str, domain: Domain, actual: usize) -> PhaseResult<()> {
        let expected = self.count(domain);
        if actual != expected {
            return Err(PhaseError::ShapeMismatch {
                key: key.into(),
                expected,
                actual,
            });
        }
        Ok(())
    }
}
