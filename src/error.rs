use thiserror::Error;

/// Public error type for every fallible polytext operation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolytextError {
    #[error(
        "transliteration from '{source_script}' to '{target_script}' is not supported; supported pairs: {}",
        supported.join(", ")
    )]
    UnsupportedScriptPair {
        source_script: String,
        target_script: String,
        supported: Vec<String>,
    },

    #[error("unknown language code `{0}`")]
    UnknownLanguage(String),

    #[error("confidence {0} is outside [0.0, 1.0]")]
    InvalidConfidence(f64),

    #[error("unknown script name `{0}`")]
    UnknownScript(String),

    #[error("language registry error: {0}")]
    Registry(String),
}

pub type Result<T> = std::result::Result<T, PolytextError>;
