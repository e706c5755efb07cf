//! # randstr Configuration
//!
//! Settings used by the CLI and by [`RandomStringGenerator::from_config`].
//!
//! ## Example
//!
//! ```yaml
//! generator:
//!   length: 32
//!   count: 1
//!   source: os
//!   prefix: rs_
//! ```
//!
//! Every value can be overridden with `RANDSTR_GENERATOR_` environment
//! variables (for example `RANDSTR_GENERATOR_LENGTH=64`).
//!
//! [`RandomStringGenerator::from_config`]: crate::RandomStringGenerator::from_config

use figment::{Figment, providers::Serialized};
use std::path::PathBuf;

use crate::entropy::EntropyKind;

mod config;

/// Application Configuration
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(skip)]
    path: PathBuf,

    /// Generator Configuration
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Generator Configuration
///
/// Settings are loaded from the `RANDSTR_GENERATOR_` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GeneratorConfig {
    /// Length of each generated string (default to 32)
    ///
    /// Env: `RANDSTR_GENERATOR_LENGTH`
    #[serde(default = "default_length")]
    pub length: usize,

    /// Number of strings to generate (default to 1)
    ///
    /// Env: `RANDSTR_GENERATOR_COUNT`
    #[serde(default = "default_count")]
    pub count: usize,

    /// Entropy source (`os` or `thread`)
    ///
    /// Env: `RANDSTR_GENERATOR_SOURCE`
    #[serde(default)]
    pub source: EntropyKind,

    /// Prefix added in front of every token
    ///
    /// Env: `RANDSTR_GENERATOR_PREFIX`
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_prefix"
    )]
    pub prefix: Option<String>,
}

/// Accept numbers and booleans as prefixes, env values are parsed by figment
fn deserialize_prefix<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Prefix {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    let prefix: Option<Prefix> = serde::Deserialize::deserialize(deserializer)?;
    Ok(prefix.map(|prefix| match prefix {
        Prefix::Text(text) => text,
        Prefix::Unsigned(value) => value.to_string(),
        Prefix::Signed(value) => value.to_string(),
        Prefix::Float(value) => value.to_string(),
        Prefix::Bool(value) => value.to_string(),
    }))
}

fn default_length() -> usize {
    32
}

fn default_count() -> usize {
    1
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
            count: default_count(),
            source: EntropyKind::default(),
            prefix: None,
        }
    }
}

impl GeneratorConfig {
    /// Get the Generator Configuration
    pub(crate) fn figment(base: &Self) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Serialized::defaults(base))
            .merge(figment::providers::Env::prefixed("RANDSTR_GENERATOR_"))
    }
}
