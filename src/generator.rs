//! # Random String Generator
//!
//! Characters are sampled from [`ALPHABET`] by rejection sampling over
//! random bytes: bytes at or above [`REJECTION_LIMIT`] are discarded so that
//! `byte % 62` stays uniform.
use log::{debug, trace};

use crate::alphabet::{ALPHABET, ALPHABET_LEN};
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::RandStrError;
use crate::utils::config::GeneratorConfig;

/// Largest multiple of the alphabet size that fits in a byte (62 * 4)
pub const REJECTION_LIMIT: u8 = (256 / ALPHABET_LEN * ALPHABET_LEN) as u8;

/// Upper bound on the bytes requested from the source per call
const MAX_BATCH: usize = 1024;

/// Generate a random alphanumeric string using the operating system CSPRNG
///
/// ```rust
/// let token = randstr::generate(32).unwrap();
/// assert_eq!(token.len(), 32);
///
/// assert_eq!(randstr::generate(0).unwrap(), "");
/// ```
pub fn generate(length: usize) -> Result<String, RandStrError> {
    RandomStringGenerator::new().generate(length)
}

/// Random String Generator
///
/// Holds the entropy source and an optional token prefix. Generators are
/// `Send + Sync` when their source is and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct RandomStringGenerator<S: EntropySource = OsEntropy> {
    source: S,
    prefix: Option<String>,
}

impl RandomStringGenerator<OsEntropy> {
    /// New generator backed by the operating system CSPRNG
    pub fn new() -> Self {
        Self::with_source(OsEntropy)
    }
}

impl RandomStringGenerator<Box<dyn EntropySource>> {
    /// Build a generator from the configuration
    pub fn from_config(config: &GeneratorConfig) -> Self {
        debug!("Using entropy source: {}", config.source);
        let generator = Self::with_source(config.source.source());
        match &config.prefix {
            Some(prefix) => generator.with_prefix(prefix.clone()),
            None => generator,
        }
    }
}

impl<S: EntropySource> RandomStringGenerator<S> {
    /// New generator with a custom entropy source
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            prefix: None,
        }
    }

    /// Set the prefix used by [`RandomStringGenerator::generate_token`]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Token prefix
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Generate a string of exactly `length` alphabet characters
    ///
    /// Errors from the entropy source are returned as-is.
    pub fn generate(&self, length: usize) -> Result<String, RandStrError> {
        let mut output = String::with_capacity(length);
        if length == 0 {
            return Ok(output);
        }
        trace!("Generating random string of length {}", length);

        let mut buffer = vec![0u8; length.min(MAX_BATCH)];
        while output.len() < length {
            let wanted = (length - output.len()).min(buffer.len());
            let chunk = &mut buffer[..wanted];
            self.source.fill(chunk)?;

            for byte in chunk.iter().copied() {
                if byte < REJECTION_LIMIT {
                    output.push(char::from(ALPHABET[usize::from(byte) % ALPHABET_LEN]));
                }
            }
        }

        Ok(output)
    }

    /// Generate `count` independent strings of `length` characters
    pub fn generate_many(&self, length: usize, count: usize) -> Result<Vec<String>, RandStrError> {
        debug!("Generating {} random strings of length {}", count, length);
        (0..count).map(|_| self.generate(length)).collect()
    }

    /// Generate a prefixed token
    ///
    /// The prefix is emitted verbatim and `length` counts only the random part.
    ///
    /// ```rust
    /// use randstr::RandomStringGenerator;
    ///
    /// let generator = RandomStringGenerator::new().with_prefix("rs_");
    /// let token = generator.generate_token(16).unwrap();
    ///
    /// assert!(token.starts_with("rs_"));
    /// assert_eq!(token.len(), 3 + 16);
    /// ```
    pub fn generate_token(&self, length: usize) -> Result<String, RandStrError> {
        let random = self.generate(length)?;
        Ok(match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, random),
            None => random,
        })
    }

    /// Generate `count` prefixed tokens
    ///
    /// Without a prefix this is the same as [`RandomStringGenerator::generate_many`].
    pub fn generate_many_tokens(
        &self,
        length: usize,
        count: usize,
    ) -> Result<Vec<String>, RandStrError> {
        debug!("Generating {} tokens of length {}", count, length);
        (0..count).map(|_| self.generate_token(length)).collect()
    }
}
