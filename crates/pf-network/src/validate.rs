//! Network validation logic.

use pf_core::ThroatId;

use crate::error::{NetworkError, NetworkResult};
use crate::network::{Pore, Throat};

/// Validate the structure: ids are contiguous and every throat joins two
/// distinct, existing pores.
pub(crate) fn validate_structure(pores: &[Pore], throats: &[Throat]) -> NetworkResult<()> {
    for (position, pore) in pores.iter().enumerate() {
        if pore.id.idx() != position {
            return Err(NetworkError::IdMismatch {
                what: "pore",
                position,
                id: pore.id.index(),
            });
        }
    }

    for (position, throat) in throats.iter().enumerate() {
        if throat.id.idx() != position {
            return Err(NetworkError::IdMismatch {
                what: "throat",
                position,
                id: throat.id.index(),
            });
        }

        for pore in throat.pores {
            if pore.idx() >= pores.len() {
                return Err(NetworkError::InvalidPoreRef {
                    throat: throat.id,
                    pore,
                });
            }
        }

        if throat.pore1() == throat.pore2() {
            return Err(NetworkError::SelfLoop {
                throat: throat.id,
                pore: throat.pore1(),
            });
        }
    }

    Ok(())
}

/// Validate adjacency lists for consistency.
pub(crate) fn validate_adjacency(
    pores: &[Pore],
    throats: &[Throat],
    pore_throat_offsets: &[usize],
    pore_throats: &[ThroatId],
) -> NetworkResult<()> {
    if pore_throat_offsets.len() != pores.len() + 1 {
        return Err(NetworkError::IdMismatch {
            what: "pore adjacency offsets",
            position: pore_throat_offsets.len(),
            id: pores.len() as u32,
        });
    }

    for pore in pores {
        let start = pore_throat_offsets[pore.id.idx()];
        let end = pore_throat_offsets[pore.id.idx() + 1];

        for &throat_id in &pore_throats[start..end] {
            let touches = throats
                .get(throat_id.idx())
                .is_some_and(|t| t.pores.contains(&pore.id));
            if !touches {
                return Err(NetworkError::InconsistentAdjacency {
                    throat: throat_id,
                    pore: pore.id,
                });
            }
        }
    }

    // Each throat appears exactly twice: once per endpoint
    let mut seen = vec![0_u8; throats.len()];
    for &throat_id in pore_throats {
        seen[throat_id.idx()] += 1;
    }
    if let Some(throat) = throats.iter().find(|t| seen[t.id.idx()] != 2) {
        return Err(NetworkError::InconsistentAdjacency {
            throat: throat.id,
            pore: throat.pore1(),
        });
    }

    Ok(())
}
