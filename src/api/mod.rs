//! HTTP API: `/api/*` JSON routes, `/health`, and request middleware.

pub mod middleware;
pub mod services;
