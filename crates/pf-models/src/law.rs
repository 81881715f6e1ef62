//! Closed-form per-leg transport laws.

use core::fmt;
use core::str::FromStr;
use std::f64::consts::PI;

use pf_core::Real;
use pf_core::units::{Area, DynVisc, Length};

/// Shape assumed for every conduit leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dimensionality {
    /// Slot-shaped legs: `A³ / (12·π·μ·L)`.
    TwoD,
    /// Cylindrical legs: `A² / (8·π·μ·L)`.
    #[default]
    ThreeD,
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimensionality::TwoD => f.write_str("2d"),
            Dimensionality::ThreeD => f.write_str("3d"),
        }
    }
}

impl FromStr for Dimensionality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "2d" | "2" => Ok(Dimensionality::TwoD),
            "3d" | "3" => Ok(Dimensionality::ThreeD),
            other => Err(format!("unknown dimensionality '{other}' (expected 2d or 3d)")),
        }
    }
}

/// Hydraulic conductance of one leg.
///
/// Returns NaN for a leg with zero area and zero length; callers normalize it.
#[inline]
pub fn poiseuille_leg(area: Real, length: Real, viscosity: Real, dim: Dimensionality) -> Real {
    match dim {
        Dimensionality::ThreeD => area.powi(2) / (8.0 * PI * viscosity * length),
        Dimensionality::TwoD => area.powi(3) / (12.0 * PI * viscosity * length),
    }
}

/// `poiseuille_leg` for SI quantities, in m³/(Pa·s) for cylindrical legs.
pub fn poiseuille_leg_si(area: Area, length: Length, viscosity: DynVisc, dim: Dimensionality) -> Real {
    poiseuille_leg(area.value, length.value, viscosity.value, dim)
}

/// Diffusive conductance of one leg: `c·D·A / L`.
#[inline]
pub fn diffusive_leg(area: Real, length: Real, coefficient: Real) -> Real {
    coefficient * area / length
}
