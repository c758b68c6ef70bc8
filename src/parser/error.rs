use thiserror::Error;

use crate::models::ProxyType;

/// Why a single share link could not be turned into a proxy.
///
/// These never escape the batch loop; each one only removes its own entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed {scheme} link: {reason}")]
    MalformedUri {
        scheme: ProxyType,
        reason: &'static str,
    },

    #[error("unrecognized link scheme")]
    UnrecognizedScheme,

    #[error("failed to decode {scheme} payload: {reason}")]
    DecodeFailure { scheme: ProxyType, reason: String },

    #[error("invalid {field} value: {value:?}")]
    CoercionFailure { field: &'static str, value: String },
}

impl ParseError {
    pub fn malformed(scheme: ProxyType, reason: &'static str) -> Self {
        ParseError::MalformedUri { scheme, reason }
    }

    pub fn decode(scheme: ProxyType, reason: impl Into<String>) -> Self {
        ParseError::DecodeFailure {
            scheme,
            reason: reason.into(),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
