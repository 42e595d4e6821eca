// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the name-bearing enums: cipher algorithms and
//! modes of operation. Their cipher properties (block sizes, key sizes,
//! IV handling) live in the registry module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CipherError;

/// Supported cipher algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[serde(rename = "rijndael-128")]
    Rijndael128,
    Des,
    Tripledes,
    Blowfish,
    Arcfour,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Rijndael128,
        Algorithm::Des,
        Algorithm::Tripledes,
        Algorithm::Blowfish,
        Algorithm::Arcfour,
    ];

    /// Canonical lowercase name, as accepted by `Registry::open`
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Rijndael128 => "rijndael-128",
            Algorithm::Des => "des",
            Algorithm::Tripledes => "tripledes",
            Algorithm::Blowfish => "blowfish",
            Algorithm::Arcfour => "arcfour",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| CipherError::Open(format!("unknown algorithm name '{s}'")))
    }
}

/// Supported modes of operation
///
/// `Cfb` is the 8-bit feedback variant; `Ncfb` and `Nofb` feed back a
/// whole cipher block at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Cbc,
    Cfb,
    Ctr,
    Ecb,
    Ncfb,
    Nofb,
    Stream,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Cbc,
        Mode::Cfb,
        Mode::Ctr,
        Mode::Ecb,
        Mode::Ncfb,
        Mode::Nofb,
        Mode::Stream,
    ];

    /// Canonical lowercase name, as accepted by `Registry::open`
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Cbc => "cbc",
            Mode::Cfb => "cfb",
            Mode::Ctr => "ctr",
            Mode::Ecb => "ecb",
            Mode::Ncfb => "ncfb",
            Mode::Nofb => "nofb",
            Mode::Stream => "stream",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| CipherError::Open(format!("unknown mode name '{s}'")))
    }
}
