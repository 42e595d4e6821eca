// src/config/app.rs
use std::sync::OnceLock;

use log::warn;
use serde::Deserialize;

use super::defaults::*;
use crate::consts::{CONFIG_ENV, CONFIG_FILE};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub defaults: Defaults,
    pub validation: Validation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Defaults {
    pub algorithm: String,
    pub mode: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Validation {
    pub check_key_size: bool,
    pub check_iv_size: bool,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let explicit = std::env::var(CONFIG_ENV).ok();
        let config_path = explicit.clone().unwrap_or_else(|| CONFIG_FILE.to_string());

        if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("failed to read config file");
            toml::from_str(&content).expect("invalid TOML in config file")
        } else {
            if explicit.is_some() {
                warn!("{config_path} not found, using built-in defaults");
            }
            Config {
                defaults: default_defaults(),
                validation: default_validation(),
            }
        }
    })
}
