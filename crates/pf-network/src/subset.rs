//! Throat subsets: a caller's local throat ordering mapped onto the network.
//!
//! Models are evaluated for the throats a physics object owns. The subset
//! preserves the caller's order (local index `i` ↔ global throat) and offers
//! O(1) lookups in both directions.

use pf_core::ThroatId;

use crate::error::{NetworkError, NetworkResult};
use crate::network::Network;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThroatSubset {
    /// Local position -> global throat.
    global: Vec<ThroatId>,

    /// Reverse lookup: global throat index -> local position.
    /// Sized to the network's throat count; None if not in the subset.
    local: Vec<Option<usize>>,
}

impl ThroatSubset {
    /// Every throat of the network, in global order.
    pub fn all(network: &Network) -> Self {
        let global: Vec<ThroatId> = network.throats().iter().map(|t| t.id).collect();
        let local = (0..global.len()).map(Some).collect();
        Self { global, local }
    }

    /// A subset in the given order.
    ///
    /// Fails if a throat is not part of the network or is listed twice.
    pub fn from_ids(
        network: &Network,
        ids: impl IntoIterator<Item = ThroatId>,
    ) -> NetworkResult<Self> {
        let mut global = Vec::new();
        let mut local = vec![None; network.num_throats()];

        for throat in ids {
            let slot = local
                .get_mut(throat.idx())
                .ok_or(NetworkError::UnknownThroat { throat })?;
            if slot.is_some() {
                return Err(NetworkError::DuplicateThroat { throat });
            }
            *slot = Some(global.len());
            global.push(throat);
        }

        Ok(Self { global, local })
    }

    /// Number of throats in the subset.
    pub fn len(&self) -> usize {
        self.global.len()
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty()
    }

    /// Global throat at a local position (panics if out of bounds).
    pub fn global(&self, local: usize) -> ThroatId {
        self.global[local]
    }

    /// Local position of a global throat, if it belongs to the subset.
    pub fn local(&self, throat: ThroatId) -> Option<usize> {
        self.local.get(throat.idx()).copied().flatten()
    }

    /// Global throats in local order.
    pub fn ids(&self) -> &[ThroatId] {
        &self.global
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = ThroatId> + '_ {
        self.global.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::NetworkBuilder;

    fn chain(n: usize) -> Network {
        let mut builder = NetworkBuilder::new();
        let pores: Vec<_> = (0..=n).map(|i| builder.add_pore(format!("P{i}"))).collect();
        for w in pores.windows(2) {
            builder.add_throat("T", w[0], w[1]);
        }
        builder.build().unwrap()
    }

    #[test]
    fn all_is_identity() {
        let network = chain(3);
        let subset = ThroatSubset::all(&network);
        assert_eq!(subset.len(), 3);
        for (i, throat) in subset.iter().enumerate() {
            assert_eq!(throat.idx(), i);
            assert_eq!(subset.local(throat), Some(i));
        }
    }

    #[test]
    fn from_ids_preserves_order() {
        let network = chain(4);
        let ids = [ThroatId::from_index(3), ThroatId::from_index(1)];
        let subset = ThroatSubset::from_ids(&network, ids).unwrap();

        assert_eq!(subset.ids(), &ids);
        assert_eq!(subset.local(ThroatId::from_index(3)), Some(0));
        assert_eq!(subset.local(ThroatId::from_index(1)), Some(1));
        assert_eq!(subset.local(ThroatId::from_index(0)), None);
    }

    #[test]
    fn from_ids_rejects_unknown_and_duplicates() {
        let network = chain(2);
        let unknown = ThroatSubset::from_ids(&network, [ThroatId::from_index(7)]);
        assert!(matches!(
            unknown.unwrap_err(),
            NetworkError::UnknownThroat { .. }
        ));

        let dup = ThroatSubset::from_ids(
            &network,
            [ThroatId::from_index(0), ThroatId::from_index(0)],
        );
        assert!(matches!(
            dup.unwrap_err(),
            NetworkError::DuplicateThroat { .. }
        ));
    }
}
