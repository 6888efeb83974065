/*
 * Responsibility
 * - The "authenticated context" type handlers see
 * - The auth middleware resolves + validates and stores it in request extensions;
 *   handlers only ever receive this type
 *
 * Notes
 * - The raw credential never reaches handlers; only the scheme that carried it does
 */

use crate::services::auth::Scheme;

/// Context attached to an authenticated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthCtx {
    pub scheme: Scheme,
}

impl AuthCtx {
    pub fn new(scheme: Scheme) -> Self {
        Self { scheme }
    }
}
