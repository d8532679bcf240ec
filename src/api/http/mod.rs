// src/api/http/mod.rs

pub mod chat;
pub mod handlers;
pub mod router;

pub use router::{api_router, app_router};
