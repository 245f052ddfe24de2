use thiserror::Error;

/// The two ways Paimon can fail.
///
/// `Configuration` is fatal at startup. `Generation` is recovered by the
/// responder and turned into an in-persona fallback reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaimonError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("{0}")]
    Generation(String),
}

impl PaimonError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// The diagnostic text without the variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::Configuration(msg) | Self::Generation(msg) => msg,
        }
    }
}

impl From<reqwest::Error> for PaimonError {
    fn from(e: reqwest::Error) -> Self {
        Self::Generation(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PaimonError>;
