/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 *   - validator: Arc<dyn CredentialValidator>
 * - Cheap to Clone (everything inside is Arc)
 */
use std::fmt;
use std::sync::Arc;

use crate::services::auth::CredentialValidator;

#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<dyn CredentialValidator>,
}

impl AppState {
    pub fn new(validator: Arc<dyn CredentialValidator>) -> Self {
        Self { validator }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
