//! HTTP API: handlers, middleware, DTOs and the OpenAPI document.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
mod doc;

pub use routes::create_router;
