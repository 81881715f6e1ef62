//! Incremental network builder.

use pf_core::{PoreId, ThroatId};

use crate::error::NetworkResult;
use crate::network::{Network, Pore, Throat};
use crate::validate;

/// Builder for constructing a network incrementally.
///
/// Use `add_pore` and `add_throat` to build up the topology,
/// then call `build()` to validate and freeze it into an immutable `Network`.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    pores: Vec<Pore>,
    throats: Vec<Throat>,
    next_pore_id: u32,
    next_throat_id: u32,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pore and return its ID.
    pub fn add_pore(&mut self, name: impl Into<String>) -> PoreId {
        let id = PoreId::from_index(self.next_pore_id);
        self.next_pore_id += 1;
        self.pores.push(Pore {
            id,
            name: name.into(),
        });
        id
    }

    /// Add a throat joining `pore1` to `pore2` and return its ID.
    ///
    /// References are checked in `build()`.
    pub fn add_throat(
        &mut self,
        name: impl Into<String>,
        pore1: PoreId,
        pore2: PoreId,
    ) -> ThroatId {
        let id = ThroatId::from_index(self.next_throat_id);
        self.next_throat_id += 1;
        self.throats.push(Throat {
            id,
            name: name.into(),
            pores: [pore1, pore2],
        });
        id
    }

    /// Number of pores added so far.
    pub fn pore_count(&self) -> usize {
        self.pores.len()
    }

    /// Build and validate the network, returning an immutable `Network`.
    pub fn build(self) -> NetworkResult<Network> {
        validate::validate_structure(&self.pores, &self.throats)?;

        let (pore_throat_offsets, pore_throats) =
            Self::build_adjacency(&self.pores, &self.throats);

        validate::validate_adjacency(
            &self.pores,
            &self.throats,
            &pore_throat_offsets,
            &pore_throats,
        )?;

        Ok(Network {
            pores: self.pores,
            throats: self.throats,
            pore_throat_offsets,
            pore_throats,
        })
    }

    /// Build compact adjacency lists: for each pore, collect its incident throats.
    fn build_adjacency(pores: &[Pore], throats: &[Throat]) -> (Vec<usize>, Vec<ThroatId>) {
        // Count then fill; throats are visited in id order so each list is sorted.
        let mut counts = vec![0_usize; pores.len()];
        for throat in throats {
            for pore in throat.pores {
                counts[pore.idx()] += 1;
            }
        }

        let mut offsets = Vec::with_capacity(pores.len() + 1);
        offsets.push(0);
        for count in &counts {
            let last = offsets[offsets.len() - 1];
            offsets.push(last + count);
        }

        let mut cursor = offsets[..pores.len()].to_vec();
        let mut flat = vec![ThroatId::from_index(0); offsets[pores.len()]];
        for throat in throats {
            for pore in throat.pores {
                flat[cursor[pore.idx()]] = throat.id;
                cursor[pore.idx()] += 1;
            }
        }

        (offsets, flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = NetworkBuilder::new();
        let p1 = builder.add_pore("P1");
        let p2 = builder.add_pore("P2");
        let t1 = builder.add_throat("T1", p1, p2);

        assert_eq!(p1.index(), 0);
        assert_eq!(p2.index(), 1);
        assert_eq!(t1.index(), 0);
        assert_eq!(builder.pore_count(), 2);
        assert_eq!(builder.throats.len(), 1);
    }

    #[test]
    fn builder_build_simple() {
        let mut builder = NetworkBuilder::new();
        let p1 = builder.add_pore("P1");
        let p2 = builder.add_pore("P2");
        let p3 = builder.add_pore("P3");
        let t1 = builder.add_throat("T1", p1, p2);
        let t2 = builder.add_throat("T2", p2, p3);

        let network = builder.build().unwrap();
        assert_eq!(network.num_pores(), 3);
        assert_eq!(network.num_throats(), 2);

        assert_eq!(network.pore_throats(p1), &[t1]);
        assert_eq!(network.pore_throats(p2), &[t1, t2]);
        assert_eq!(network.pore_throats(p3), &[t2]);
    }

    #[test]
    fn isolated_pore_has_no_throats() {
        let mut builder = NetworkBuilder::new();
        let p1 = builder.add_pore("P1");
        let p2 = builder.add_pore("P2");
        let lonely = builder.add_pore("P3");
        builder.add_throat("T1", p1, p2);

        let network = builder.build().unwrap();
        assert!(network.pore_throats(lonely).is_empty());
        assert_eq!(network.coordination(lonely), 0);
    }
}
