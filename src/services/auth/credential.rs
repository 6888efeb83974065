/*
 * Responsibility
 * - Types produced by credential resolution (Scheme / Credential / Reason / outcome)
 * - Credential is request-scoped: never serialized, never logged in full
 */
use std::fmt;

use thiserror::Error;

/// Supported authorization schemes, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scheme {
    /// `Authorization: Bearer <token>`
    BearerToken,
    /// `X-Daytona-Authorization: <token>`
    PlatformToken,
}

impl Scheme {
    /// All schemes, highest priority first.
    pub const PRIORITY: [Scheme; 2] = [Scheme::BearerToken, Scheme::PlatformToken];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::BearerToken => "bearer",
            Scheme::PlatformToken => "platform",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized credential extracted from one request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub scheme: Scheme,
    pub raw_value: String,
}

impl Credential {
    pub fn new(scheme: Scheme, raw_value: impl Into<String>) -> Self {
        Self {
            scheme,
            raw_value: raw_value.into(),
        }
    }
}

// Do not print the token.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("scheme", &self.scheme)
            .field("raw_value", &"<redacted>")
            .finish()
    }
}

/// Why a request's headers did not yield a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("no credential presented")]
    MissingCredential,
    #[error("authorization header is not of the form 'Bearer <token>'")]
    MalformedHeader,
    // Not produced while only two schemes exist.
    #[error("unsupported authorization scheme")]
    UnsupportedScheme,
}

impl Reason {
    /// Stable identifier for logs.
    pub fn code(&self) -> &'static str {
        match self {
            Reason::MissingCredential => "missing_credential",
            Reason::MalformedHeader => "malformed_header",
            Reason::UnsupportedScheme => "unsupported_scheme",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Resolved(Credential),
    Rejected(Reason),
}

impl ResolutionOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Converts into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<Credential, Reason> {
        match self {
            Self::Resolved(credential) => Ok(credential),
            Self::Rejected(reason) => Err(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_shows_raw_value() {
        let credential = Credential::new(Scheme::BearerToken, "abc123");
        let rendered = format!("{credential:?}");
        assert!(!rendered.contains("abc123"));
        assert!(rendered.contains("BearerToken"));
    }

    #[test]
    fn bearer_has_priority_over_platform() {
        assert!(Scheme::BearerToken < Scheme::PlatformToken);
        assert_eq!(Scheme::PRIORITY[0], Scheme::BearerToken);
    }

    #[test]
    fn outcome_into_result() {
        let ok = ResolutionOutcome::Resolved(Credential::new(Scheme::PlatformToken, "t"));
        assert_eq!(
            ok.into_result().map(|c| c.scheme),
            Ok(Scheme::PlatformToken)
        );

        let rejected = ResolutionOutcome::Rejected(Reason::MalformedHeader);
        assert!(!rejected.is_resolved());
        assert_eq!(rejected.into_result(), Err(Reason::MalformedHeader));
    }
}
