// src/engine/mod.rs
//! Transform engine — buffer sizing and per-call cipher bracketing
//!
//! Works exclusively on in-memory buffers. The engine owns the block
//! alignment arithmetic and the zero-padding copy; the actual cipher
//! invocation lives in the backend module.

mod backend;

use log::trace;

pub(crate) use backend::self_test;

use crate::enums::{Algorithm, Mode};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Inverse,
}

/// Run one transform over `input` with a fresh cipher state
///
/// Block algorithms get a zero-padded copy of the input, rounded up to
/// the block boundary; stream algorithms are transformed at their exact
/// length. On any backend failure the output buffer is discarded and
/// only the error is returned.
pub(crate) fn transform(
    algorithm: Algorithm,
    mode: Mode,
    key: &[u8],
    iv: &[u8],
    input: &[u8],
    direction: Direction,
) -> Result<Vec<u8>> {
    let target_len = padded_len(algorithm, input.len());

    let mut buf = vec![0u8; target_len];
    buf[..input.len()].copy_from_slice(input);

    backend::apply(algorithm, mode, key, iv, &mut buf, direction)?;

    trace!(
        "{direction:?} {algorithm}/{mode}: {} -> {} bytes",
        input.len(),
        buf.len(),
    );
    Ok(buf)
}

/// Input length rounded up to the algorithm's block boundary
fn padded_len(algorithm: Algorithm, len: usize) -> usize {
    if !algorithm.is_block() {
        return len;
    }
    // zero-length input must not reach the ceiling below: (len - 1)
    // would wrap and demand an absurd allocation
    if len == 0 {
        return 0;
    }
    let block_size = algorithm.block_size();
    ((len - 1) / block_size + 1) * block_size
}
