// src/registry.rs
//! Cipher descriptors and name-based handle construction
//!
//! The registry is an explicit factory object: callers create one (or use
//! `Registry::default()`) instead of relying on process-wide state. It
//! owns the algorithm/mode tables and the compatibility rules between
//! them; `CipherHandle` values can only be produced through it.

use log::debug;

use crate::config;
use crate::enums::{Algorithm, Mode};
use crate::error::{CipherError, Result};
use crate::handle::CipherHandle;

impl Algorithm {
    /// Block ciphers transform fixed-size blocks; stream ciphers byte streams
    pub fn is_block(&self) -> bool {
        !matches!(self, Algorithm::Arcfour)
    }

    /// Cipher block size in bytes; 1 for stream algorithms
    pub fn block_size(&self) -> usize {
        match self {
            Algorithm::Rijndael128 => 16,
            Algorithm::Des | Algorithm::Tripledes | Algorithm::Blowfish => 8,
            Algorithm::Arcfour => 1,
        }
    }

    /// Primary (largest) key size in bytes
    pub fn key_size(&self) -> usize {
        match self {
            Algorithm::Rijndael128 => 32,
            Algorithm::Des => 8,
            Algorithm::Tripledes => 24,
            Algorithm::Blowfish => 56,
            Algorithm::Arcfour => 32,
        }
    }

    /// Key sizes the backend can instantiate, in ascending order
    ///
    /// An empty slice means the key length is unconstrained here and the
    /// backend decides. Blowfish takes any key of 4..=56 bytes, but only
    /// its nominal 56-byte size is advertised; shorter keys require
    /// turning key-size validation off on the handle.
    pub fn supported_key_sizes(&self) -> &'static [usize] {
        match self {
            Algorithm::Rijndael128 => &[16, 24, 32],
            Algorithm::Des => &[8],
            Algorithm::Tripledes => &[24],
            Algorithm::Blowfish => &[56],
            Algorithm::Arcfour => &[16, 32],
        }
    }
}

impl Mode {
    /// Whether this mode is meant for block algorithms
    pub fn is_block_algorithm_mode(&self) -> bool {
        !matches!(self, Mode::Stream)
    }

    /// Whether output is produced in whole blocks (as opposed to a
    /// keystream applied byte-by-byte)
    pub fn is_block_mode(&self) -> bool {
        matches!(self, Mode::Cbc | Mode::Ecb)
    }

    /// Whether the mode consumes an initialization vector
    pub fn has_iv(&self) -> bool {
        !matches!(self, Mode::Ecb | Mode::Stream)
    }
}

/// Factory for cipher handles
#[derive(Debug, Clone, Copy, Default)]
pub struct Registry;

impl Registry {
    pub fn new() -> Self {
        Registry
    }

    /// Names of every available algorithm, in registry order
    pub fn algorithms(&self) -> Vec<&'static str> {
        Algorithm::ALL.iter().map(|a| a.name()).collect()
    }

    /// Names of every available mode, in registry order
    pub fn modes(&self) -> Vec<&'static str> {
        Mode::ALL.iter().map(|m| m.name()).collect()
    }

    /// Open a cipher handle for an algorithm/mode pairing
    ///
    /// Fails with `CipherError::Open` if either name is unknown or the
    /// pairing is incompatible (a stream algorithm with a block mode, or
    /// a block algorithm with the stream mode).
    pub fn open(&self, algorithm: &str, mode: &str) -> Result<CipherHandle> {
        let algorithm: Algorithm = algorithm.parse()?;
        let mode: Mode = mode.parse()?;

        if algorithm.is_block() && !mode.is_block_algorithm_mode() {
            return Err(CipherError::Open(format!(
                "mode '{mode}' requires a stream algorithm, got '{algorithm}'"
            )));
        }
        if !algorithm.is_block() && mode.is_block_algorithm_mode() {
            return Err(CipherError::Open(format!(
                "algorithm '{algorithm}' does not support block-oriented mode '{mode}'"
            )));
        }

        let cfg = config::load();
        debug!("opened cipher {algorithm}/{mode}");

        Ok(CipherHandle::new(
            algorithm,
            mode,
            cfg.validation.check_key_size,
            cfg.validation.check_iv_size,
        ))
    }

    /// Open the algorithm/mode pairing named by the loaded config
    pub fn open_default(&self) -> Result<CipherHandle> {
        let cfg = config::load();
        self.open(&cfg.defaults.algorithm, &cfg.defaults.mode)
    }
}
