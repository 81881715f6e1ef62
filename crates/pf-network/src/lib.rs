//! pf-network: pore network topology for poreflow.
//!
//! Provides:
//! - Core topology data structures (Pore, Throat, Network)
//! - Incremental network builder with validation
//! - Throat subsets mapping a caller's local ordering to global throats
//!
//! # Example
//!
//! ```
//! use pf_network::{NetworkBuilder, ThroatSubset};
//!
//! let mut builder = NetworkBuilder::new();
//! let p1 = builder.add_pore("left");
//! let p2 = builder.add_pore("right");
//! let t1 = builder.add_throat("t0", p1, p2);
//! let network = builder.build().unwrap();
//!
//! assert_eq!(network.num_pores(), 2);
//! assert_eq!(network.num_throats(), 1);
//!
//! let subset = ThroatSubset::all(&network);
//! assert_eq!(network.conns(&subset).unwrap(), vec![[p1, p2]]);
//! assert_eq!(subset.global(0), t1);
//! ```

pub mod builder;
pub mod error;
pub mod network;
pub mod subset;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::NetworkBuilder;
pub use error::{NetworkError, NetworkResult};
pub use network::{Network, Pore, Throat};
pub use subset::ThroatSubset;
