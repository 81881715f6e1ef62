//! pf-models: conduit transport models for pore networks.
//!
//! Every throat is treated as a conduit of three legs in series (half of
//! pore 1, the throat, half of pore 2). Models gather per-leg geometry and
//! per-domain phase properties, apply a closed-form law per leg, and combine
//! the legs into one conductance per throat:
//! - Hagen-Poiseuille hydraulic conductance (cylindrical or slot legs)
//! - Ordinary diffusive conductance
//!
//! All models implement `ConduitModel` and are pure functions of their
//! target, suitable for registration in a `ModelRegistry`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pf_models::{ConduitTarget, Dimensionality, HydraulicKeys, hagen_poiseuille};
//! use pf_network::NetworkBuilder;
//! use pf_phase::{Geometry, Phase};
//!
//! let mut builder = NetworkBuilder::new();
//! let p1 = builder.add_pore("P1");
//! let p2 = builder.add_pore("P2");
//! builder.add_throat("T1", p1, p2);
//! let network = Arc::new(builder.build().unwrap());
//!
//! let mut geo = Geometry::spanning("geo", network.clone());
//! geo.set_legs("throat.equivalent_area", [vec![2.0], vec![1.0], vec![2.0]]).unwrap();
//! geo.set_legs("throat.conduit_lengths", [vec![1.0], vec![1.0], vec![1.0]]).unwrap();
//!
//! let mut water = Phase::new("water", network);
//! water.set_uniform("pore.viscosity", 1.0).unwrap();
//!
//! let target = ConduitTarget::new(&water, &geo).unwrap();
//! let g = hagen_poiseuille(&target, &HydraulicKeys::default(), Dimensionality::ThreeD).unwrap();
//! assert!((g[0] - 0.026526).abs() < 1e-6);
//! ```

pub mod conduit;
pub mod diffusive;
pub mod error;
pub mod hydraulic;
pub mod law;
pub mod model;
pub mod registry;
pub mod target;

// Re-exports
pub use conduit::{ConduitLegs, conduit_conductance, resolve_required, series};
pub use diffusive::{DiffusiveKeys, OrdinaryDiffusion, ordinary_diffusion};
pub use error::{ModelError, ModelResult};
pub use hydraulic::{HagenPoiseuille, HydraulicKeys, hagen_poiseuille};
pub use law::{Dimensionality, diffusive_leg, poiseuille_leg, poiseuille_leg_si};
pub use model::ConduitModel;
pub use registry::{ModelRegistry, RegenMode};
pub use target::ConduitTarget;
