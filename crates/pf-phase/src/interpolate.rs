//! Cross-domain interpolation.
//!
//! - pore -> throat: mean of the two endpoint pores.
//! - throat -> pore: mean of all incident throats; isolated pores get NaN.

use pf_core::{Real, mean};
use pf_network::Network;

use crate::error::{PhaseError, PhaseResult};
use crate::key::Domain;

/// Interpolate a field defined at `from` onto the other domain.
///
/// `key` is only used in error messages.
pub fn interpolate(
    network: &Network,
    from: Domain,
    values: &[Real],
    key: &str,
) -> PhaseResult<Vec<Real>> {
    let expected = match from {
        Domain::Pore => network.num_pores(),
        Domain::Throat => network.num_throats(),
    };
    if values.len() != expected {
        return Err(PhaseError::ShapeMismatch {
            key: key.into(),
            expected,
            actual: values.len(),
        });
    }

    Ok(match from {
        Domain::Pore => pore_to_throat(network, values),
        Domain::Throat => throat_to_pore(network, values),
    })
}

fn pore_to_throat(network: &Network, pore_values: &[Real]) -> Vec<Real> {
    network
        .throats()
        .iter()
        .map(|t| 0.5 * (pore_values[t.pore1().idx()] + pore_values[t.pore2().idx()]))
        .collect()
}

fn throat_to_pore(network: &Network, throat_values: &[Real]) -> Vec<Real> {
    network
        .pores()
        .iter()
        .map(|p| {
            mean(
                network
                    .pore_throats(p.id)
                    .iter()
                    .map(|t| throat_values[t.idx()]),
            )
        })
        .collect()
}
