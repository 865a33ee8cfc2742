//! Call-time checks for optional capabilities.
//!
//! Table derivation and chart rendering live behind cargo features so a
//! slim build can still fetch raw records. Operations that need them call
//! [`require`] first and fail with a distinct error when compiled out.

use std::fmt;

use crate::error::{Result, StatsError};


/// Optional capability gated by a cargo feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Tables,
    Chart,
}


impl Capability {
    /// Cargo feature providing this capability.
    pub fn feature(self) -> &'static str {
        match self {
            Capability::Tables => "tables",
            Capability::Chart => "chart",
        }
    }

    /// Whether this build includes the capability.
    pub fn is_available(self) -> bool {
        match self {
            Capability::Tables => cfg!(feature = "tables"),
            Capability::Chart => cfg!(feature = "chart"),
        }
    }
}


impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Tables => write!(f, "Tabular data"),
            Capability::Chart => write!(f, "Chart rendering"),
        }
    }
}


/// Fail with [`StatsError::MissingCapability`] unless `capability` is built in.
pub fn require(capability: Capability) -> Result<()> {
    if capability.is_available() {
        Ok(())
    } else {
        Err(StatsError::MissingCapability(capability))
    }
}
