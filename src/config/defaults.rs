// src/config/defaults.rs
use super::app::{Defaults, Validation};
use crate::consts::{DEFAULT_ALGORITHM, DEFAULT_MODE};

pub(super) fn default_defaults() -> Defaults {
    Defaults {
        algorithm: DEFAULT_ALGORITHM.to_string(),
        mode: DEFAULT_MODE.to_string(),
    }
}

pub(super) fn default_validation() -> Validation {
    Validation {
        check_key_size: true,
        check_iv_size: true,
    }
}
