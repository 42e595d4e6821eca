// src/engine/backend.rs
//! RustCrypto dispatch — one fresh primitive instantiation per call
//!
//! Every entry point builds the cipher from the caller's key and IV,
//! runs it over the whole buffer and drops the schedule on return.
//! Buffers arriving for block algorithms are already block-aligned.

use cipher::block_padding::NoPadding;
use cipher::consts::{U16, U32};
use cipher::crypto_common::InnerInit;
use cipher::{
    AsyncStreamCipher, Block, BlockCipher, BlockDecryptMut, BlockEncryptMut, InnerIvInit, KeyInit,
    StreamCipher, StreamCipherCore,
};
use rc4::Rc4;

use super::Direction;
use crate::enums::{Algorithm, Mode};
use crate::error::CipherError;

/// Apply one transform in place
pub(crate) fn apply(
    algorithm: Algorithm,
    mode: Mode,
    key: &[u8],
    iv: &[u8],
    buf: &mut [u8],
    direction: Direction,
) -> Result<(), CipherError> {
    match algorithm {
        Algorithm::Rijndael128 => match key.len() {
            16 => block_cipher::<aes::Aes128>(mode, key, iv, buf, direction),
            24 => block_cipher::<aes::Aes192>(mode, key, iv, buf, direction),
            32 => block_cipher::<aes::Aes256>(mode, key, iv, buf, direction),
            n => Err(key_rejected(algorithm, n)),
        },
        Algorithm::Des => block_cipher::<des::Des>(mode, key, iv, buf, direction),
        Algorithm::Tripledes => block_cipher::<des::TdesEde3>(mode, key, iv, buf, direction),
        Algorithm::Blowfish => block_cipher::<blowfish::Blowfish>(mode, key, iv, buf, direction),
        Algorithm::Arcfour => match key.len() {
            16 => stream_cipher::<Rc4<U16>>(key, buf),
            32 => stream_cipher::<Rc4<U32>>(key, buf),
            n => Err(key_rejected(algorithm, n)),
        },
    }
}

fn block_cipher<C>(
    mode: Mode,
    key: &[u8],
    iv: &[u8],
    buf: &mut [u8],
    direction: Direction,
) -> Result<(), CipherError>
where
    C: BlockCipher + BlockEncryptMut + BlockDecryptMut + KeyInit,
    ctr::flavors::Ctr64BE: ctr::flavors::CtrFlavor<C::BlockSize>,
{
    let cipher =
        C::new_from_slice(key).map_err(|_| key_rejected_len(key.len()))?;
    let msg_len = buf.len();

    match mode {
        Mode::Cbc => match direction {
            Direction::Forward => {
                cbc::Encryptor::<C>::inner_iv_slice_init(cipher, iv)
                    .map_err(|_| iv_rejected(iv.len()))?
                    .encrypt_padded_mut::<NoPadding>(buf, msg_len)
                    .map_err(|_| misaligned())?;
            }
            Direction::Inverse => {
                cbc::Decryptor::<C>::inner_iv_slice_init(cipher, iv)
                    .map_err(|_| iv_rejected(iv.len()))?
                    .decrypt_padded_mut::<NoPadding>(buf)
                    .map_err(|_| misaligned())?;
            }
        },
        Mode::Ecb => match direction {
            Direction::Forward => {
                ecb::Encryptor::<C>::inner_init(cipher)
                    .encrypt_padded_mut::<NoPadding>(buf, msg_len)
                    .map_err(|_| misaligned())?;
            }
            Direction::Inverse => {
                ecb::Decryptor::<C>::inner_init(cipher)
                    .decrypt_padded_mut::<NoPadding>(buf)
                    .map_err(|_| misaligned())?;
            }
        },
        Mode::Cfb => match direction {
            Direction::Forward => cfb8::Encryptor::<C>::inner_iv_slice_init(cipher, iv)
                .map_err(|_| iv_rejected(iv.len()))?
                .encrypt(buf),
            Direction::Inverse => cfb8::Decryptor::<C>::inner_iv_slice_init(cipher, iv)
                .map_err(|_| iv_rejected(iv.len()))?
                .decrypt(buf),
        },
        Mode::Ncfb => match direction {
            Direction::Forward => cfb_mode::Encryptor::<C>::inner_iv_slice_init(cipher, iv)
                .map_err(|_| iv_rejected(iv.len()))?
                .encrypt(buf),
            Direction::Inverse => cfb_mode::Decryptor::<C>::inner_iv_slice_init(cipher, iv)
                .map_err(|_| iv_rejected(iv.len()))?
                .decrypt(buf),
        },
        // keystream modes encrypt and decrypt identically
        Mode::Nofb => {
            ofb::OfbCore::<C>::inner_iv_slice_init(cipher, iv)
                .map_err(|_| iv_rejected(iv.len()))?
                .try_apply_keystream_partial(buf.into())
                .map_err(|e| CipherError::Operation(e.to_string()))?;
        }
        Mode::Ctr => {
            ctr::CtrCore::<C, ctr::flavors::Ctr64BE>::inner_iv_slice_init(cipher, iv)
                .map_err(|_| iv_rejected(iv.len()))?
                .try_apply_keystream_partial(buf.into())
                .map_err(|e| CipherError::Operation(e.to_string()))?;
        }
        Mode::Stream => {
            return Err(CipherError::Operation(
                "stream mode requires a stream algorithm".into(),
            ));
        }
    }
    Ok(())
}

fn stream_cipher<C>(key: &[u8], buf: &mut [u8]) -> Result<(), CipherError>
where
    C: KeyInit + StreamCipher,
{
    let mut cipher =
        C::new_from_slice(key).map_err(|_| key_rejected_len(key.len()))?;
    cipher
        .try_apply_keystream(buf)
        .map_err(|e| CipherError::Operation(e.to_string()))?;
    Ok(())
}

fn key_rejected(algorithm: Algorithm, len: usize) -> CipherError {
    CipherError::Operation(format!("{algorithm} cannot be keyed with {len} bytes"))
}

fn key_rejected_len(len: usize) -> CipherError {
    CipherError::Operation(format!("key of {len} bytes rejected by the cipher"))
}

fn iv_rejected(len: usize) -> CipherError {
    CipherError::Operation(format!("iv of {len} bytes rejected by the cipher"))
}

fn misaligned() -> CipherError {
    CipherError::Operation("buffer length not aligned to the cipher block size".into())
}

// ── self test ────────────────────────────────────────────────

// FIPS-197 appendix C.1
const AES128_KAT_KEY: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
    0x0f,
];
const AES128_KAT_PT: [u8; 16] = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
    0xff,
];
const AES128_KAT_CT: [u8; 16] = [
    0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
    0x5a,
];

// the classic "Now is t" single-block vector
const DES_KAT_KEY: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];
const DES_KAT_PT: [u8; 8] = [0x4e, 0x6f, 0x77, 0x20, 0x69, 0x73, 0x20, 0x74];
const DES_KAT_CT: [u8; 8] = [0x3f, 0xa4, 0x0e, 0x8a, 0x98, 0x4d, 0x48, 0x15];

// first entry of Schneier's published vector set
const BLOWFISH_KAT_KEY: [u8; 8] = [0; 8];
const BLOWFISH_KAT_PT: [u8; 8] = [0; 8];
const BLOWFISH_KAT_CT: [u8; 8] = [0x4e, 0xf9, 0x97, 0x45, 0x61, 0x98, 0xdd, 0x78];

/// Known-answer check for the algorithm's primitive
///
/// Triple DES reuses the single-DES vector with the key repeated, which
/// degenerates EDE to one DES pass. Arcfour has no block to compare, so
/// it is checked for keystream involution instead.
pub(crate) fn self_test(algorithm: Algorithm) -> bool {
    match algorithm {
        Algorithm::Rijndael128 => {
            kat::<aes::Aes128>(&AES128_KAT_KEY, &AES128_KAT_PT, &AES128_KAT_CT)
        }
        Algorithm::Des => kat::<des::Des>(&DES_KAT_KEY, &DES_KAT_PT, &DES_KAT_CT),
        Algorithm::Tripledes => {
            let key: Vec<u8> = DES_KAT_KEY.repeat(3);
            kat::<des::TdesEde3>(&key, &DES_KAT_PT, &DES_KAT_CT)
        }
        Algorithm::Blowfish => {
            kat::<blowfish::Blowfish>(&BLOWFISH_KAT_KEY, &BLOWFISH_KAT_PT, &BLOWFISH_KAT_CT)
        }
        Algorithm::Arcfour => arcfour_self_test(),
    }
}

fn kat<C>(key: &[u8], plaintext: &[u8], expected: &[u8]) -> bool
where
    C: BlockEncryptMut + KeyInit,
{
    let Ok(mut cipher) = C::new_from_slice(key) else {
        return false;
    };
    let mut block = Block::<C>::default();
    block.copy_from_slice(plaintext);
    cipher.encrypt_block_mut(&mut block);
    block.as_slice() == expected
}

fn arcfour_self_test() -> bool {
    let key = [0x55u8; 16];
    let plaintext = *b"arcfour self test data";
    let mut buf = plaintext;

    let Ok(mut cipher) = Rc4::<U16>::new_from_slice(&key) else {
        return false;
    };
    cipher.apply_keystream(&mut buf);
    if buf == plaintext {
        return false;
    }

    let Ok(mut cipher) = Rc4::<U16>::new_from_slice(&key) else {
        return false;
    };
    cipher.apply_keystream(&mut buf);
    buf == plaintext
}
