//! Failure taxonomy for upstream calls.
//!
//! Every way a call to Gemini can fail is reduced to one of five [`ErrorKind`]s.
//! Each kind has a fixed HTTP status and a caller-facing message; the
//! [`UpstreamError::detail`] string is for logs and diagnostics.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Upstream answered 429
    ServiceOverloaded,
    /// Upstream rejected the credentials or the request shape (400, 401, 403)
    UpstreamMisconfigured,
    /// Any other non-2xx status
    UpstreamError,
    /// No response at all: connection failure or timeout
    UpstreamUnreachable,
    /// 2xx whose body does not contain the generated text
    UpstreamBadResponse,
}

/// Upstream statuses with a dedicated kind, checked in order. Anything else that
/// is not a success falls through to [`ErrorKind::UpstreamError`].
const STATUS_KINDS: &[(&[u16], ErrorKind)] = &[
    (&[429], ErrorKind::ServiceOverloaded),
    (&[400, 401, 403], ErrorKind::UpstreamMisconfigured),
];

impl ErrorKind {
    pub fn from_status(status: u16) -> Self {
        STATUS_KINDS
            .iter()
            .find(|(statuses, _)| statuses.contains(&status))
            .map(|(_, kind)| *kind)
            .unwrap_or(ErrorKind::UpstreamError)
    }

    /// Status code returned to our own caller.
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorKind::ServiceOverloaded => 503,
            ErrorKind::UpstreamMisconfigured => 500,
            ErrorKind::UpstreamError => 502,
            ErrorKind::UpstreamUnreachable => 504,
            ErrorKind::UpstreamBadResponse => 500,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            ErrorKind::ServiceOverloaded => {
                "Le service d'analyse IA est surchargé. Veuillez réessayer plus tard."
            }
            ErrorKind::UpstreamMisconfigured => {
                "Problème de configuration interne avec le service d'analyse IA."
            }
            ErrorKind::UpstreamError => "Le service d'analyse IA externe rencontre un problème.",
            ErrorKind::UpstreamUnreachable => {
                "Impossible de joindre le service d'analyse IA. Vérifiez votre connexion."
            }
            ErrorKind::UpstreamBadResponse => {
                "La réponse du service d'analyse IA est dans un format inattendu."
            }
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::ServiceOverloaded => "service overloaded",
            ErrorKind::UpstreamMisconfigured => "upstream misconfigured",
            ErrorKind::UpstreamError => "upstream error",
            ErrorKind::UpstreamUnreachable => "upstream unreachable",
            ErrorKind::UpstreamBadResponse => "upstream bad response",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
#[error("{kind}: {detail}")]
pub struct UpstreamError {
    kind: ErrorKind,
    detail: String,
}

impl UpstreamError {
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    /// Error for a non-success upstream status carrying `body` as detail.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::new(
            ErrorKind::from_status(status),
            format!("HTTP {}: {}", status, body),
        )
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}
