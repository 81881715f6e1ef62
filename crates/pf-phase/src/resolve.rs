//! Two-level property resolution: native value, then interpolated value.

use std::borrow::Cow;

use pf_core::Real;

/// Outcome of a property request.
///
/// `NATIVE -> (if absent) INTERPOLATED -> (if absent) Absent`. Callers decide
/// whether `Absent` is an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    /// Field stored at the requested granularity.
    Native(&'a [Real]),
    /// Field derived from the other granularity.
    Interpolated(Vec<Real>),
    /// Neither the field nor its fallback exists.
    Absent,
}

impl<'a> Resolution<'a> {
    pub fn values(&self) -> Option<&[Real]> {
        match self {
            Resolution::Native(values) => Some(*values),
            Resolution::Interpolated(values) => Some(values.as_slice()),
            Resolution::Absent => None,
        }
    }

    /// Take the values, borrowing native fields and owning interpolated ones.
    pub fn into_values(self) -> Option<Cow<'a, [Real]>> {
        match self {
            Resolution::Native(values) => Some(Cow::Borrowed(values)),
            Resolution::Interpolated(values) => Some(Cow::Owned(values)),
            Resolution::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Resolution::Absent)
    }

    /// Short tag for log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Resolution::Native(_) => "native",
            Resolution::Interpolated(_) => "interpolated",
            Resolution::Absent => "absent",
        }
    }
}
