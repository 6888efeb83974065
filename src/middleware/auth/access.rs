//! Request authentication gate: resolve credential → validate → put `AuthCtx` in extensions.
//!
//! - Resolution picks exactly one credential (`Authorization: Bearer` before
//!   `X-Daytona-Authorization`) and never talks to the validator.
//! - Any `Rejected` outcome stops the request with 401 before handler dispatch.
//! - Validator backend failures are 500: the request could not be judged.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::{self, ValidationError};
use crate::state::AppState;

/// Put the auth gate in front of every route in `router`.
///
/// Example:
/// ```ignore
/// let protected = Router::new().route("/info", get(info));
/// let protected = middleware::auth::access::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 from_fn cannot take the State extractor, so pass state via from_fn_with_state.
    // route_layer: unmatched paths still 404 instead of 401.
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let credential = auth::resolve(req.headers()).into_result().map_err(|reason| {
        tracing::warn!(
            reason = reason.code(),
            method = %req.method(),
            path = %req.uri().path(),
            "request rejected: {reason}"
        );
        AppError::from(reason)
    })?;

    if let Err(err) = state.validator.validate(&credential).await {
        match &err {
            ValidationError::Rejected => {
                tracing::warn!(scheme = %credential.scheme, "credential rejected by validator");
            }
            ValidationError::Backend(detail) => {
                tracing::error!(scheme = %credential.scheme, error = %detail, "credential validator failure");
            }
        }
        return Err(err.into());
    }

    tracing::debug!(scheme = %credential.scheme, "request authenticated");

    // middleware → extractor handoff; the raw token stops here
    req.extensions_mut().insert(AuthCtx::new(credential.scheme));

    Ok(next.run(req).await)
}
