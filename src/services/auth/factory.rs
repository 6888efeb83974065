/// Factory: build the credential validator from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{CredentialValidator, StaticTokenValidator};

pub fn build_validator(config: &Config) -> Arc<dyn CredentialValidator> {
    let validator = StaticTokenValidator::new(&config.api_tokens);
    tracing::info!(tokens = validator.len(), "static token validator ready");

    Arc::new(validator)
}
