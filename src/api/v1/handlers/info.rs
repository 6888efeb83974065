/*
 * Responsibility
 * - GET /info (authenticated)
 * - Reports runner identity and which scheme authenticated the caller
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::AuthCtxExtractor;

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub auth_scheme: &'static str,
}

pub async fn info(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<InfoResponse> {
    Json(InfoResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        auth_scheme: ctx.scheme.as_str(),
    })
}
