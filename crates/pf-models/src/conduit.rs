//! Conduit conductance engine shared by every transport model.
//!
//! Gathers the three legs of each requested throat, applies a per-leg law,
//! replaces indeterminate (0/0) legs by infinite conductance and combines the
//! legs in series. Output order follows the target's throat subset.

use std::borrow::Cow;

use pf_core::{Real, nan_to_inf};
use pf_phase::{Leg, Phase, leg_key};
use rayon::prelude::*;
use tracing::debug;

use crate::error::{ModelError, ModelResult};
use crate::target::ConduitTarget;

/// Conduit count from which legs are evaluated on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Per-leg geometry, indexed `[pore1, throat, pore2]`, aligned with the
/// geometry's own throat subset.
#[derive(Debug, Clone, Copy)]
pub struct ConduitLegs<'a> {
    pub areas: [&'a [Real]; 3],
    pub lengths: [&'a [Real]; 3],
}

impl<'a> ConduitLegs<'a> {
    /// Borrow `<area_stem>.{pore1,throat,pore2}` and
    /// `<length_stem>.{pore1,throat,pore2}` from the target's geometry.
    pub fn fetch(
        target: &ConduitTarget<'a>,
        area_stem: &str,
        length_stem: &str,
    ) -> ModelResult<Self> {
        let geometry = target.geometry();
        let field = move |stem: &str, leg: Leg| -> ModelResult<&'a [Real]> {
            geometry
                .leg(stem, leg)
                .ok_or_else(|| ModelError::MissingProperty {
                    key: leg_key(stem, leg),
                })
        };

        let legs = Self {
            areas: [
                field(area_stem, Leg::Pore1)?,
                field(area_stem, Leg::Throat)?,
                field(area_stem, Leg::Pore2)?,
            ],
            lengths: [
                field(length_stem, Leg::Pore1)?,
                field(length_stem, Leg::Throat)?,
                field(length_stem, Leg::Pore2)?,
            ],
        };
        legs.check_len(geometry.throats().len())?;
        Ok(legs)
    }

    fn check_len(&self, expected: usize) -> ModelResult<()> {
        for (k, leg) in Leg::ALL.into_iter().enumerate() {
            check_len(&format!("area of leg {}", leg.suffix()), expected, self.areas[k].len())?;
            check_len(&format!("length of leg {}", leg.suffix()), expected, self.lengths[k].len())?;
        }
        Ok(())
    }
}

/// Resolve a phase property (native, else interpolated from `fallback`),
/// failing with `MissingProperty` when neither exists.
pub fn resolve_required<'p>(
    phase: &'p Phase,
    key: &str,
    fallback: &str,
) -> ModelResult<Cow<'p, [Real]>> {
    let resolution = phase.resolve(key, fallback)?;
    debug!(phase = phase.name(), key, kind = resolution.kind(), "property resolved");
    resolution
        .into_values()
        .ok_or_else(|| ModelError::MissingProperty { key: key.into() })
}

/// Three conductances in series.
///
/// Pore legs are summed first, so the result is exactly symmetric in the
/// two pore legs.
#[inline]
pub fn series(g: [Real; 3]) -> Real {
    let [g1, gt, g2] = g;
    1.0 / ((1.0 / g1 + 1.0 / g2) + 1.0 / gt)
}

/// Evaluate `law(area, length, coefficient)` on every leg and combine.
///
/// `pore_coeff` holds one value per network pore and `throat_coeff` one per
/// network throat; pore legs read the coefficient of their endpoint pore,
/// the throat leg that of the throat. Leg geometry is read from the
/// geometry row of each requested throat, so the target subset may order or
/// select throats differently from the geometry.
pub fn conduit_conductance<F>(
    target: &ConduitTarget<'_>,
    legs: &ConduitLegs<'_>,
    pore_coeff: &[Real],
    throat_coeff: &[Real],
    law: F,
) -> ModelResult<Vec<Real>>
where
    F: Fn(Real, Real, Real) -> Real + Sync,
{
    let network = target.network();
    let throats = target.throats();
    check_len("pore coefficient", network.num_pores(), pore_coeff.len())?;
    check_len("throat coefficient", network.num_throats(), throat_coeff.len())?;
    let geometry = target.geometry();
    legs.check_len(geometry.throats().len())?;

    let conns = network.conns(throats)?;
    let ids = throats.ids();
    let rows = ids
        .iter()
        .map(|&throat| {
            geometry
                .throats()
                .local(throat)
                .ok_or_else(|| ModelError::UncoveredThroat {
                    throat,
                    geometry: geometry.name().into(),
                })
        })
        .collect::<ModelResult<Vec<usize>>>()?;

    let eval = |i: usize| -> Real {
        let [p1, p2] = conns[i];
        let coeff = [
            pore_coeff[p1.idx()],
            throat_coeff[ids[i].idx()],
            pore_coeff[p2.idx()],
        ];
        let row = rows[i];
        let g: [Real; 3] = std::array::from_fn(|k| {
            nan_to_inf(law(legs.areas[k][row], legs.lengths[k][row], coeff[k]))
        });
        series(g)
    };

    let n = ids.len();
    let parallel = n >= PARALLEL_THRESHOLD;
    let out: Vec<Real> = if parallel {
        (0..n).into_par_iter().map(eval).collect()
    } else {
        (0..n).map(eval).collect()
    };

    debug!(conduits = n, parallel, "conduit conductance evaluated");
    Ok(out)
}

fn check_len(what: &str, expected: usize, actual: usize) -> ModelResult<()> {
    if expected != actual {
        return Err(ModelError::ShapeMismatch {
            what: what.into(),
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_of_equal_legs() {
        assert!((series([3.0, 3.0, 3.0]) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn infinite_leg_adds_no_resistance() {
        let g = series([Real::INFINITY, 2.0, 2.0]);
        assert!((g - 1.0).abs() < 1e-15);
    }

    #[test]
    fn all_legs_vanished_is_infinite() {
        assert_eq!(series([Real::INFINITY; 3]), Real::INFINITY);
    }

    #[test]
    fn zero_leg_blocks_flow() {
        assert_eq!(series([0.0, 1.0, 1.0]), 0.0);
    }

    #[test]
    fn series_is_symmetric_in_pores() {
        let a = series([0.1, 0.7, 13.0]);
        let b = series([13.0, 0.7, 0.1]);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
