//! Network-specific error types.

use pf_core::{PfError, PoreId, ThroatId};
use thiserror::Error;

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Network construction and lookup errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// A throat refers to a pore that doesn't exist.
    #[error("Throat {throat} refers to non-existent pore {pore}")]
    InvalidPoreRef { throat: ThroatId, pore: PoreId },

    /// A throat connects a pore to itself.
    #[error("Throat {throat} connects pore {pore} to itself")]
    SelfLoop { throat: ThroatId, pore: PoreId },

    /// Stored IDs are not contiguous with their positions.
    #[error("{what} at position {position} carries id {id}")]
    IdMismatch {
        what: &'static str,
        position: usize,
        id: u32,
    },

    /// Adjacency is inconsistent (throat listed at a pore it doesn't touch).
    #[error("Throat {throat} in pore {pore}'s adjacency list but doesn't touch that pore")]
    InconsistentAdjacency { throat: ThroatId, pore: PoreId },

    /// A throat id is not part of the network.
    #[error("Throat {throat} not found in network")]
    UnknownThroat { throat: ThroatId },

    /// A subset lists the same throat more than once.
    #[error("Throat {throat} listed more than once in subset")]
    DuplicateThroat { throat: ThroatId },
}

impl From<NetworkError> for PfError {
    fn from(err: NetworkError) -> Self {
        PfError::Invariant {
            what: err.to_string(),
        }
    }
}
