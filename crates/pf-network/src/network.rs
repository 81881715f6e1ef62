//! Core topology data structures.

use pf_core::{PoreId, ThroatId};

use crate::error::{NetworkError, NetworkResult};
use crate::subset::ThroatSubset;

/// A pore: a void space and node of the network.
///
/// Pores hold no material data; phase and geometry stores key their
/// pore-granular fields by the pore's index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pore {
    pub id: PoreId,
    pub name: String,
}

/// A throat: the constriction joining exactly two pores.
///
/// The endpoint order `[pore1, pore2]` fixes which half-pore legs of the
/// conduit are labelled `pore1` and `pore2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Throat {
    pub id: ThroatId,
    pub name: String,
    pub pores: [PoreId; 2],
}

impl Throat {
    /// First endpoint pore.
    pub fn pore1(&self) -> PoreId {
        self.pores[0]
    }

    /// Second endpoint pore.
    pub fn pore2(&self) -> PoreId {
        self.pores[1]
    }
}

/// The network: a validated, immutable collection of pores and throats.
///
/// The network stores:
/// - All pores and throats in vectors (indexed by their IDs).
/// - Compact adjacency: for each pore, which throats are incident.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) pores: Vec<Pore>,
    pub(crate) throats: Vec<Throat>,

    /// Offsets for pore->throat adjacency: pore i's throats are in
    /// pore_throats[pore_throat_offsets[i]..pore_throat_offsets[i+1]].
    pub(crate) pore_throat_offsets: Vec<usize>,

    /// Flat list of throat IDs incident to pores (sorted by pore then throat).
    pub(crate) pore_throats: Vec<ThroatId>,
}

impl Network {
    /// Return all pores.
    pub fn pores(&self) -> &[Pore] {
        &self.pores
    }

    /// Return all throats.
    pub fn throats(&self) -> &[Throat] {
        &self.throats
    }

    pub fn num_pores(&self) -> usize {
        self.pores.len()
    }

    pub fn num_throats(&self) -> usize {
        self.throats.len()
    }

    /// Get a pore by ID (returns None if ID out of bounds).
    pub fn pore(&self, id: PoreId) -> Option<&Pore> {
        self.pores.get(id.idx())
    }

    /// Get a throat by ID (returns None if ID out of bounds).
    pub fn throat(&self, id: ThroatId) -> Option<&Throat> {
        self.throats.get(id.idx())
    }

    /// Throats incident to a given pore.
    pub fn pore_throats(&self, pore: PoreId) -> &[ThroatId] {
        let idx = pore.idx();
        if idx >= self.pores.len() {
            return &[];
        }
        let start = self.pore_throat_offsets[idx];
        let end = self.pore_throat_offsets[idx + 1];
        &self.pore_throats[start..end]
    }

    /// Number of throats incident to a pore.
    pub fn coordination(&self, pore: PoreId) -> usize {
        self.pore_throats(pore).len()
    }

    /// Endpoint pair of a single throat.
    pub fn throat_conns(&self, throat: ThroatId) -> NetworkResult<[PoreId; 2]> {
        self.throat(throat)
            .map(|t| t.pores)
            .ok_or(NetworkError::UnknownThroat { throat })
    }

    /// Endpoint pairs for a subset of throats, in the subset's local order.
    pub fn conns(&self, subset: &ThroatSubset) -> NetworkResult<Vec<[PoreId; 2]>> {
        subset
            .iter()
            .map(|throat| self.throat_conns(throat))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::Id;

    #[test]
    fn throat_accessors() {
        let throat = Throat {
            id: Id::from_index(0),
            name: "T".into(),
            pores: [Id::from_index(4), Id::from_index(2)],
        };
        assert_eq!(throat.pore1().index(), 4);
        assert_eq!(throat.pore2().index(), 2);
    }
}
