use std::collections::HashSet;
use std::fmt;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use super::credential::Credential;

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The credential is well-formed but not currently accepted.
    #[error("credential rejected")]
    Rejected,

    /// The validator could not reach a decision (treat as server error, not 401).
    #[error("validator backend failure: {0}")]
    Backend(String),
}

/// Confirms that a resolved credential is currently valid.
///
/// Implementations are shared across requests (`Arc<dyn CredentialValidator>` in `AppState`).
#[async_trait]
pub trait CredentialValidator: Send + Sync {
    async fn validate(&self, credential: &Credential) -> Result<(), ValidationError>;
}

type TokenDigest = [u8; 32];

fn digest(token: &str) -> TokenDigest {
    Sha256::digest(token.as_bytes()).into()
}

/// Accepts any credential whose raw value is one of a fixed set of tokens.
///
/// - Only SHA-256 digests are kept; plaintext tokens are dropped after construction.
/// - Scheme-agnostic: the platform header carries the same runner token as `Bearer`.
#[derive(Clone)]
pub struct StaticTokenValidator {
    accepted: HashSet<TokenDigest>,
}

impl StaticTokenValidator {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let accepted = tokens
            .into_iter()
            .map(|t| digest(t.as_ref()))
            .collect::<HashSet<_>>();

        Self { accepted }
    }

    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

impl fmt::Debug for StaticTokenValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenValidator")
            .field("accepted", &self.accepted.len())
            .finish()
    }
}

#[async_trait]
impl CredentialValidator for StaticTokenValidator {
    async fn validate(&self, credential: &Credential) -> Result<(), ValidationError> {
        if self.accepted.contains(&digest(&credential.raw_value)) {
            Ok(())
        } else {
            Err(ValidationError::Rejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::credential::Scheme;

    #[tokio::test]
    async fn accepts_configured_token_for_either_scheme() {
        let validator = StaticTokenValidator::new(["runner-secret"]);

        for scheme in Scheme::PRIORITY {
            let credential = Credential::new(scheme, "runner-secret");
            assert!(validator.validate(&credential).await.is_ok());
        }
    }

    #[tokio::test]
    async fn rejects_unknown_token() {
        let validator = StaticTokenValidator::new(["runner-secret"]);
        let credential = Credential::new(Scheme::BearerToken, "runner-secret-2");

        assert!(matches!(
            validator.validate(&credential).await,
            Err(ValidationError::Rejected)
        ));
    }

    #[tokio::test]
    async fn empty_validator_rejects_everything() {
        let validator = StaticTokenValidator::new(Vec::<String>::new());
        assert!(validator.is_empty());

        let credential = Credential::new(Scheme::PlatformToken, "");
        assert!(validator.validate(&credential).await.is_err());
    }

    #[test]
    fn duplicate_tokens_collapse() {
        let validator = StaticTokenValidator::new(["a", "b", "a"]);
        assert_eq!(validator.len(), 2);
    }

    #[test]
    fn debug_does_not_leak_tokens() {
        let validator = StaticTokenValidator::new(["runner-secret"]);
        assert!(!format!("{validator:?}").contains("runner-secret"));
    }
}
