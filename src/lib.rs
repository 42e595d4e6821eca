// src/lib.rs
//! mcrypt-rs — an mcrypt-style symmetric cipher facade over RustCrypto
//!
//! Features:
//! - Open ciphers by algorithm/mode name (`"rijndael-128"` + `"cbc"`, ...)
//! - Key and IV binding with per-handle size validation toggles
//! - Block-aligned zero-padding transforms (encrypt/decrypt)
//! - Introspection: block size, key sizes, IV size, classification, self-test
//!
//! No cipher is implemented here. Algorithms and modes are instantiated
//! from the RustCrypto `cipher` ecosystem; this crate owns the naming,
//! validation, buffer sizing and lifecycle around them.

pub mod config;
pub mod consts;
mod engine;
pub mod enums;
pub mod error;
pub mod handle;
pub mod registry;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use enums::{Algorithm, Mode};
pub use error::{CipherError, Result};
pub use handle::CipherHandle;
pub use registry::Registry;
