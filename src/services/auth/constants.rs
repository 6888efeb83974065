//! Header names and scheme tokens recognized by the credential resolver.

use axum::http::HeaderName;

/// Scheme token that must open an `Authorization` header value.
pub const BEARER_AUTH_SCHEME: &str = "Bearer";

/// Standard authorization header.
pub const AUTHORIZATION_HEADER: HeaderName = axum::http::header::AUTHORIZATION;

/// Platform-specific fallback header; carries the raw token with no scheme prefix.
pub const DAYTONA_AUTHORIZATION_HEADER: HeaderName =
    HeaderName::from_static("x-daytona-authorization");
