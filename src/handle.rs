// src/handle.rs
//! Cipher handle — lifecycle, key/IV binding and introspection
//!
//! A handle is produced by `Registry::open` and stays usable until
//! `close()`. Key and IV are bound with `set_key` and used by every
//! subsequent transform; each transform call re-initializes the
//! underlying primitive from the bound material, so calls are
//! independent of each other and no keystream carries across them.

use log::{debug, trace};
use rand::RngCore;
use zeroize::Zeroizing;

use crate::engine::{self, Direction};
use crate::enums::{Algorithm, Mode};
use crate::error::{CipherError, Result};

pub struct CipherHandle {
    algorithm: Algorithm,
    mode: Mode,
    key: Option<Zeroizing<Vec<u8>>>,
    iv: Option<Zeroizing<Vec<u8>>>,
    check_key_size: bool,
    check_iv_size: bool,
    open: bool,
}

impl CipherHandle {
    pub(crate) fn new(
        algorithm: Algorithm,
        mode: Mode,
        check_key_size: bool,
        check_iv_size: bool,
    ) -> Self {
        CipherHandle {
            algorithm,
            mode,
            key: None,
            iv: None,
            check_key_size,
            check_iv_size,
            open: true,
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.open {
            Ok(())
        } else {
            Err(CipherError::NotOpen)
        }
    }

    // ── lifecycle ────────────────────────────────────────────

    /// Release the handle and wipe any bound key material
    ///
    /// The closed state is terminal: every other operation fails with
    /// `NotOpen` afterwards, and a second `close` with `DoubleClose`.
    pub fn close(&mut self) -> Result<()> {
        if !self.open {
            return Err(CipherError::DoubleClose);
        }
        self.key = None;
        self.iv = None;
        self.open = false;
        debug!("closed cipher {}/{}", self.algorithm, self.mode);
        Ok(())
    }

    // ── key / IV binding ─────────────────────────────────────

    /// Bind a key (and optionally an IV) for subsequent transforms
    ///
    /// Key length is checked against `supported_key_sizes()` unless the
    /// key-size toggle is off. An IV, when given, must match `iv_size()`
    /// exactly unless the IV-size toggle is off. Omitting the IV for an
    /// IV-bearing mode is accepted; transforms then run with an all-zero
    /// IV, so callers wanting a real IV must pass one here.
    pub fn set_key(&mut self, key: &[u8], iv: Option<&[u8]>) -> Result<()> {
        self.ensure_open()?;

        if self.check_key_size {
            let accepted = self.algorithm.supported_key_sizes();
            let ok = if accepted.is_empty() {
                let primary = self.algorithm.key_size();
                primary == 0 || key.len() == primary
            } else {
                accepted.contains(&key.len())
            };
            if !ok {
                return Err(CipherError::InvalidKeySize {
                    got: key.len(),
                    accepted: if accepted.is_empty() {
                        vec![self.algorithm.key_size()]
                    } else {
                        accepted.to_vec()
                    },
                });
            }
        }

        match iv {
            Some(iv) => {
                let expected = self.iv_size_raw();
                if self.check_iv_size && iv.len() != expected {
                    return Err(CipherError::InvalidIvSize {
                        got: iv.len(),
                        expected,
                    });
                }
                self.iv = Some(Zeroizing::new(iv.to_vec()));
            }
            // no IV supplied: drop any previously bound one; transforms
            // fall back to the zero IV from here on
            None => self.iv = None,
        }

        self.key = Some(Zeroizing::new(key.to_vec()));
        debug!(
            "bound {}-byte key to {}/{} (iv: {})",
            key.len(),
            self.algorithm,
            self.mode,
            if self.iv.is_some() { "set" } else { "none" },
        );
        Ok(())
    }

    /// Enable or disable key-size validation in `set_key`
    pub fn validate_key_size(&mut self, enabled: bool) {
        self.check_key_size = enabled;
    }

    /// Enable or disable IV-size validation in `set_key`
    pub fn validate_iv_size(&mut self, enabled: bool) {
        self.check_iv_size = enabled;
    }

    /// Produce a random IV of exactly `iv_size()` bytes (empty for
    /// IV-less modes) from the thread CSPRNG
    pub fn generate_iv(&self) -> Result<Vec<u8>> {
        self.ensure_open()?;
        let mut iv = vec![0u8; self.iv_size_raw()];
        rand::rng().fill_bytes(&mut iv);
        trace!("generated iv {}", hex::encode(&iv));
        Ok(iv)
    }

    // ── transforms ───────────────────────────────────────────

    /// Encrypt a buffer, zero-padded up to the block boundary
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.transform(plaintext, Direction::Forward)
    }

    /// Decrypt a buffer, zero-padded up to the block boundary
    ///
    /// The output keeps the trailing padding zeros; the caller is
    /// responsible for tracking the true plaintext length.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.transform(ciphertext, Direction::Inverse)
    }

    fn transform(&self, input: &[u8], direction: Direction) -> Result<Vec<u8>> {
        self.ensure_open()?;

        let key: &[u8] = self.key.as_deref().map(|k| k.as_slice()).unwrap_or(&[]);
        let zero_iv;
        let iv: &[u8] = match &self.iv {
            Some(iv) => iv,
            None => {
                zero_iv = vec![0u8; self.iv_size_raw()];
                &zero_iv
            }
        };

        engine::transform(self.algorithm, self.mode, key, iv, input, direction)
    }

    // ── introspection ────────────────────────────────────────

    pub fn is_block_algorithm(&self) -> Result<bool> {
        self.ensure_open()?;
        Ok(self.algorithm.is_block())
    }

    pub fn is_block_mode(&self) -> Result<bool> {
        self.ensure_open()?;
        Ok(self.mode.is_block_mode())
    }

    pub fn is_block_algorithm_mode(&self) -> Result<bool> {
        self.ensure_open()?;
        Ok(self.mode.is_block_algorithm_mode())
    }

    /// Block size in bytes; 1 for stream algorithms
    pub fn block_size(&self) -> Result<usize> {
        self.ensure_open()?;
        Ok(self.algorithm.block_size())
    }

    /// Primary key size in bytes
    pub fn key_size(&self) -> Result<usize> {
        self.ensure_open()?;
        Ok(self.algorithm.key_size())
    }

    /// Key sizes accepted by `set_key` while validation is enabled
    pub fn supported_key_sizes(&self) -> Result<&'static [usize]> {
        self.ensure_open()?;
        Ok(self.algorithm.supported_key_sizes())
    }

    /// IV size in bytes; 0 when the mode takes no IV
    pub fn iv_size(&self) -> Result<usize> {
        self.ensure_open()?;
        Ok(self.iv_size_raw())
    }

    pub fn has_iv(&self) -> Result<bool> {
        self.ensure_open()?;
        Ok(self.mode.has_iv())
    }

    pub fn algorithm_name(&self) -> Result<&'static str> {
        self.ensure_open()?;
        Ok(self.algorithm.name())
    }

    pub fn mode_name(&self) -> Result<&'static str> {
        self.ensure_open()?;
        Ok(self.mode.name())
    }

    /// Run the algorithm's known-answer check through the backend
    pub fn self_test(&self) -> Result<bool> {
        self.ensure_open()?;
        Ok(engine::self_test(self.algorithm))
    }

    fn iv_size_raw(&self) -> usize {
        if self.mode.has_iv() {
            self.algorithm.block_size()
        } else {
            0
        }
    }
}
