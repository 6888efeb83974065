//! Credential resolution: picks one credential out of a request's headers.
//!
//! Priority is fixed, not derived from header map order:
//! 1. `Authorization: Bearer <token>`. Once this header is present it decides the outcome;
//!    a malformed value is rejected and the platform header is not consulted.
//! 2. `X-Daytona-Authorization: <token>`, used verbatim.
//!
//! Resolution is pure. Checking that the token is currently valid is the job of a
//! [`CredentialValidator`](super::validator::CredentialValidator).

use axum::http::{HeaderMap, HeaderValue};

use super::constants::{AUTHORIZATION_HEADER, BEARER_AUTH_SCHEME, DAYTONA_AUTHORIZATION_HEADER};
use super::credential::{Credential, Reason, ResolutionOutcome, Scheme};

/// Resolves the credential presented on a request.
///
/// Header lookup is case-insensitive. If a header repeats, its first value is used.
pub fn resolve(headers: &HeaderMap) -> ResolutionOutcome {
    if let Some(value) = headers.get(AUTHORIZATION_HEADER) {
        return match bearer_token(value) {
            Some(token) => ResolutionOutcome::Resolved(Credential::new(Scheme::BearerToken, token)),
            None => ResolutionOutcome::Rejected(Reason::MalformedHeader),
        };
    }

    match headers.get(DAYTONA_AUTHORIZATION_HEADER) {
        // empty == absent
        None => ResolutionOutcome::Rejected(Reason::MissingCredential),
        Some(value) if value.is_empty() => ResolutionOutcome::Rejected(Reason::MissingCredential),
        Some(value) => match value.to_str() {
            Ok(token) => {
                ResolutionOutcome::Resolved(Credential::new(Scheme::PlatformToken, token))
            }
            Err(_) => ResolutionOutcome::Rejected(Reason::MalformedHeader),
        },
    }
}

// `Bearer` + exactly one space + a non-empty token without whitespace.
fn bearer_token(value: &HeaderValue) -> Option<&str> {
    let token = value
        .to_str()
        .ok()?
        .strip_prefix(BEARER_AUTH_SCHEME)?
        .strip_prefix(' ')?;

    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderName;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    fn resolved(scheme: Scheme, raw: &str) -> ResolutionOutcome {
        ResolutionOutcome::Resolved(Credential::new(scheme, raw))
    }

    #[test]
    fn bearer_header_resolves_token_after_prefix() {
        let outcome = resolve(&headers(&[("Authorization", "Bearer abc123")]));
        assert_eq!(outcome, resolved(Scheme::BearerToken, "abc123"));
    }

    #[test]
    fn platform_header_resolves_raw_value() {
        let outcome = resolve(&headers(&[("X-Daytona-Authorization", "tok-456")]));
        assert_eq!(outcome, resolved(Scheme::PlatformToken, "tok-456"));
    }

    #[test]
    fn no_headers_is_missing_credential() {
        assert_eq!(
            resolve(&HeaderMap::new()),
            ResolutionOutcome::Rejected(Reason::MissingCredential)
        );
    }

    #[test]
    fn unrelated_headers_are_missing_credential() {
        let outcome = resolve(&headers(&[
            ("Content-Type", "application/json"),
            ("X-Request-Id", "req-1"),
        ]));
        assert_eq!(outcome, ResolutionOutcome::Rejected(Reason::MissingCredential));
    }

    #[test]
    fn bare_bearer_is_malformed() {
        let outcome = resolve(&headers(&[("Authorization", "Bearer")]));
        assert_eq!(outcome, ResolutionOutcome::Rejected(Reason::MalformedHeader));
    }

    #[test]
    fn other_shapes_are_malformed() {
        for value in [
            "Basic xyz",
            "bearer abc",
            "BEARER abc",
            "Bearerabc",
            "Bearer  abc",
            "Bearer a b",
            "Token abc",
            "abc",
            "",
        ] {
            let outcome = resolve(&headers(&[("Authorization", value)]));
            assert_eq!(
                outcome,
                ResolutionOutcome::Rejected(Reason::MalformedHeader),
                "value {value:?}"
            );
        }
    }

    #[test]
    fn bearer_wins_over_platform_header() {
        let outcome = resolve(&headers(&[
            ("X-Daytona-Authorization", "platform-tok"),
            ("Authorization", "Bearer bearer-tok"),
        ]));
        assert_eq!(outcome, resolved(Scheme::BearerToken, "bearer-tok"));
    }

    #[test]
    fn malformed_bearer_does_not_fall_back_to_platform_header() {
        for value in ["Bearer", "Basic xyz"] {
            let outcome = resolve(&headers(&[
                ("Authorization", value),
                ("X-Daytona-Authorization", "platform-tok"),
            ]));
            assert_eq!(outcome, ResolutionOutcome::Rejected(Reason::MalformedHeader));
        }
    }

    #[test]
    fn empty_platform_header_is_missing_credential() {
        let outcome = resolve(&headers(&[("X-Daytona-Authorization", "")]));
        assert_eq!(outcome, ResolutionOutcome::Rejected(Reason::MissingCredential));
    }

    #[test]
    fn header_names_are_case_insensitive() {
        let outcome = resolve(&headers(&[("AUTHORIZATION", "Bearer upper")]));
        assert_eq!(outcome, resolved(Scheme::BearerToken, "upper"));

        let outcome = resolve(&headers(&[("x-daytona-AUTHORIZATION", "mixed")]));
        assert_eq!(outcome, resolved(Scheme::PlatformToken, "mixed"));
    }

    #[test]
    fn non_visible_ascii_values_are_malformed() {
        let mut map = HeaderMap::new();
        map.insert(
            AUTHORIZATION_HEADER,
            HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
        );
        assert_eq!(resolve(&map), ResolutionOutcome::Rejected(Reason::MalformedHeader));

        let mut map = HeaderMap::new();
        map.insert(
            DAYTONA_AUTHORIZATION_HEADER,
            HeaderValue::from_bytes(b"tok\xfe").unwrap(),
        );
        assert_eq!(resolve(&map), ResolutionOutcome::Rejected(Reason::MalformedHeader));
    }

    #[test]
    fn first_value_wins_for_repeated_header() {
        let outcome = resolve(&headers(&[
            ("Authorization", "Bearer first"),
            ("Authorization", "Bearer second"),
        ]));
        assert_eq!(outcome, resolved(Scheme::BearerToken, "first"));
    }

    #[test]
    fn resolution_is_idempotent() {
        let map = headers(&[
            ("Authorization", "Bearer abc123"),
            ("X-Daytona-Authorization", "tok-456"),
        ]);
        assert_eq!(resolve(&map), resolve(&map));

        let empty = HeaderMap::new();
        assert_eq!(resolve(&empty), resolve(&empty));
    }
}
