//! pf-phase: named property storage for pores and throats.
//!
//! Provides:
//! - `PropKey`/`Domain`: open, string-keyed property names (`"pore.viscosity"`)
//! - `PropertyStore`: named scalar fields
//! - `Phase`: network-wide material properties with cross-domain interpolation
//!   and the two-level `resolve` protocol (native, then interpolated)
//! - `Geometry`: per-leg conduit geometry for a subset of throats
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pf_network::NetworkBuilder;
//! use pf_phase::{Phase, Resolution};
//!
//! let mut builder = NetworkBuilder::new();
//! let p1 = builder.add_pore("P1");
//! let p2 = builder.add_pore("P2");
//! builder.add_throat("T1", p1, p2);
//! let network = Arc::new(builder.build().unwrap());
//!
//! let mut water = Phase::new("water", network);
//! water.set("pore.viscosity", vec![1.0, 3.0]).unwrap();
//!
//! let mu_t = water.resolve("throat.viscosity", "pore.viscosity").unwrap();
//! assert!(matches!(mu_t, Resolution::Interpolated(_)));
//! assert_eq!(mu_t.values(), Some(&[2.0][..]));
//! ```

pub mod error;
pub mod geometry;
pub mod interpolate;
pub mod key;
pub mod phase;
pub mod resolve;
pub mod store;

pub use error::{PhaseError, PhaseResult};
pub use geometry::{Geometry, Leg, leg_key};
pub use key::{Domain, PropKey};
pub use phase::Phase;
pub use resolve::Resolution;
pub use store::PropertyStore;
