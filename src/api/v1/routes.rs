/*
 * Responsibility
 * - URL layout for v1
 * - Public routes (/health) vs routes behind the auth gate (/info, ...)
 */
use axum::{Router, routing::get};

use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{health::health, info::info};

pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/health", get(health));

    let protected = Router::new().route("/info", get(info));
    let protected = middleware::auth::access::apply(protected, state);

    public.merge(protected)
}
