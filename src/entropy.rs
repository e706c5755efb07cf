//! # Entropy sources
//!
//! Only cryptographically secure sources are provided. A failing source is
//! reported to the caller and is never replaced by a weaker generator.
use std::fmt::Display;
use std::str::FromStr;

use rand::RngExt;

use crate::error::RandStrError;

/// A cryptographically secure source of random bytes
///
/// Implementations must be safe to share between threads.
pub trait EntropySource: Send + Sync {
    /// Fill the buffer with random bytes
    fn fill(&self, buf: &mut [u8]) -> Result<(), RandStrError>;
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn fill(&self, buf: &mut [u8]) -> Result<(), RandStrError> {
        (**self).fill(buf)
    }
}

/// Operating system CSPRNG (`getrandom`)
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), RandStrError> {
        getrandom::fill(buf).map_err(|error| {
            log::error!("Failed to read random bytes from the operating system: {}", error);
            RandStrError::Entropy(error.to_string())
        })
    }
}

/// Thread-local CSPRNG from `rand`, seeded by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadEntropy;

impl EntropySource for ThreadEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), RandStrError> {
        let mut rng = rand::rng();
        rng.fill(buf);
        Ok(())
    }
}

/// Entropy source selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EntropyKind {
    /// Operating system CSPRNG
    #[default]
    Os,
    /// Thread-local CSPRNG
    Thread,
}

impl EntropyKind {
    /// Create the entropy source for this kind
    pub fn source(&self) -> Box<dyn EntropySource> {
        match self {
            EntropyKind::Os => Box::new(OsEntropy),
            EntropyKind::Thread => Box::new(ThreadEntropy),
        }
    }
}

impl FromStr for EntropyKind {
    type Err = RandStrError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "os" | "system" => Ok(EntropyKind::Os),
            "thread" => Ok(EntropyKind::Thread),
            _ => Err(RandStrError::ConfigParseError(format!(
                "Unknown entropy source: {}",
                input
            ))),
        }
    }
}

impl TryFrom<String> for EntropyKind {
    type Error = RandStrError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<EntropyKind> for String {
    fn from(value: EntropyKind) -> Self {
        value.to_string()
    }
}

impl Display for EntropyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntropyKind::Os => write!(f, "os"),
            EntropyKind::Thread => write!(f, "thread"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_entropy() {
        let mut first = [0u8; 32];
        let mut second = [0u8; 32];
        OsEntropy.fill(&mut first).unwrap();
        OsEntropy.fill(&mut second).unwrap();

        assert_ne!(first, second);
        assert_ne!(first, [0u8; 32]);
    }

    #[test]
    fn test_thread_entropy() {
        let mut first = [0u8; 32];
        let mut second = [0u8; 32];
        ThreadEntropy.fill(&mut first).unwrap();
        ThreadEntropy.fill(&mut second).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_empty_buffer() {
        let mut buf: [u8; 0] = [];
        OsEntropy.fill(&mut buf).unwrap();
        ThreadEntropy.fill(&mut buf).unwrap();
    }

    #[test]
    fn test_entropy_kind_from_str() {
        assert_eq!(EntropyKind::from_str("os").unwrap(), EntropyKind::Os);
        assert_eq!(EntropyKind::from_str("System").unwrap(), EntropyKind::Os);
        assert_eq!(EntropyKind::from_str("THREAD").unwrap(), EntropyKind::Thread);
        assert!(EntropyKind::from_str("mt19937").is_err());
    }

    #[test]
    fn test_entropy_kind_display() {
        assert_eq!(EntropyKind::Os.to_string(), "os");
        assert_eq!(EntropyKind::Thread.to_string(), "thread");
        assert_eq!(EntropyKind::default(), EntropyKind::Os);
    }

    #[test]
    fn test_entropy_kind_serde_matches_from_str() {
        for (input, expected) in [
            ("os", EntropyKind::Os),
            ("System", EntropyKind::Os),
            ("Thread", EntropyKind::Thread),
            ("THREAD", EntropyKind::Thread),
        ] {
            let kind: EntropyKind = serde_yaml::from_str(input).unwrap();
            assert_eq!(kind, expected);
        }
        assert!(serde_yaml::from_str::<EntropyKind>("dice").is_err());
        assert_eq!(serde_yaml::to_string(&EntropyKind::Thread).unwrap().trim(), "thread");
    }

    #[test]
    fn test_entropy_kind_source() {
        for kind in [EntropyKind::Os, EntropyKind::Thread] {
            let source = kind.source();
            let mut buf = [0u8; 16];
            source.fill(&mut buf).unwrap();
        }
    }
}
