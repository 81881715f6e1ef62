//! Property keys.
//!
//! Keys stay open strings so new physical quantities need no code changes.
//! The prefix before the first `.` selects the domain; the rest is the name
//! (which may itself contain dots, e.g. `throat.equivalent_area.pore1`).

use core::fmt;

use crate::error::{PhaseError, PhaseResult};

/// Granularity a field is defined at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Pore,
    Throat,
}

impl Domain {
    pub fn prefix(self) -> &'static str {
        match self {
            Domain::Pore => "pore",
            Domain::Throat => "throat",
        }
    }

    /// The opposite granularity.
    pub fn other(self) -> Domain {
        match self {
            Domain::Pore => Domain::Throat,
            Domain::Throat => Domain::Pore,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A parsed `domain.name` property key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropKey {
    pub domain: Domain,
    pub name: String,
}

impl PropKey {
    pub fn new(domain: Domain, name: impl Into<String>) -> Self {
        Self {
            domain,
            name: name.into(),
        }
    }

    pub fn parse(key: &str) -> PhaseResult<Self> {
        let bad = || PhaseError::BadKey { key: key.into() };
        let (prefix, name) = key.split_once('.').ok_or_else(bad)?;
        if name.is_empty() {
            return Err(bad());
        }
        let domain = match prefix {
            "pore" => Domain::Pore,
            "throat" => Domain::Throat,
            _ => return Err(bad()),
        };
        Ok(Self::new(domain, name))
    }

    /// Same quantity at the other granularity.
    pub fn counterpart(&self) -> PropKey {
        PropKey::new(self.domain.other(), self.name.clone())
    }
}

impl fmt::Display for PropKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.domain, self.name)
    }
}
