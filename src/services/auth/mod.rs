pub mod constants;
pub mod credential;
pub mod factory;
pub mod resolver;
pub mod validator;

pub use credential::{Credential, Reason, ResolutionOutcome, Scheme};
pub use factory::build_validator;
pub use resolver::resolve;
pub use validator::{CredentialValidator, StaticTokenValidator, ValidationError};
