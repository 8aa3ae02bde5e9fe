//! Error types for engine construction and persistence.
//!
//! Gameplay never produces these: invalid requests and missing references
//! are reported through the match log. Errors only surface when a match is
//! being set up (bad config, unregistered effect keys, unknown cards) or
//! when a snapshot fails to encode or decode.

use thiserror::Error;

use crate::cards::CardId;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Invalid match configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },

    #[error("failed to parse match config")]
    Parse(#[source] serde_json::Error),
}

/// Problems found while validating effect dispatch against content.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("effect key `{0}` has no registered handler")]
    MissingHandler(String),

    #[error("legacy alias `{alias}` points at unregistered key `{key}`")]
    DanglingAlias { alias: String, key: String },

    #[error("card `{card}` carries unknown effect key `{key}`")]
    UnknownEffectKey { card: String, key: String },

    #[error("deck references card {0} which is not in the catalog")]
    UnknownCard(CardId),
}

/// Top-level error for engine setup and persistence.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("snapshot encoding failed")]
    Snapshot(#[from] serde_json::Error),
}
