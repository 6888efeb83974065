/*
 * Responsibility
 * - Public surface of the middleware layer
 * - auth: credential gate for protected routes
 * - http: cross-cutting transport concerns
 */
pub mod auth;
pub mod http;
