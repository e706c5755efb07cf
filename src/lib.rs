//! # randstr
//!
//! Random alphanumeric strings for tokens, secrets and identifiers.
//!
//! Every character is drawn uniformly from `A-Z`, `a-z` and `0-9` using a
//! cryptographically secure source of randomness.
//!
#![deny(missing_docs, unused_imports)]
#![deny(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod alphabet;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod length;
pub mod utils;

pub use entropy::{EntropyKind, EntropySource, OsEntropy, ThreadEntropy};
pub use error::RandStrError;
pub use generator::{RandomStringGenerator, generate};
pub use length::Length;
pub use utils::config::Config;

/// randstr Banner
pub const RANDSTR_BANNER: &str = r#"                    _     _
 _ __ __ _ _ __   __| |___| |_ _ __
| '__/ _` | '_ \ / _` / __| __| '__|
| | | (_| | | | | (_| \__ \ |_| |
|_|  \__,_|_| |_|\__,_|___/\__|_|"#;

/// randstr Version
pub const RANDSTR_VERSION: &str = env!("CARGO_PKG_VERSION");
