//! Core trait for conduit models.

use pf_core::Real;

use crate::error::ModelResult;
use crate::target::ConduitTarget;

/// A model producing one value per throat of its target.
///
/// Models are pure functions of the target's network, phase and geometry,
/// suitable for parallel evaluation and registry-driven regeneration.
pub trait ConduitModel: Send + Sync {
    /// Model name for debugging and identification.
    fn name(&self) -> &str;

    /// Compute the model for every throat of `target`, in the target's
    /// throat order.
    fn compute(&self, target: &ConduitTarget<'_>) -> ModelResult<Vec<Real>>;
}
