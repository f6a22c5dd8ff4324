//! HTTP interface.
//!
//! ## Endpoints
//! - POST /receipts/process - Submit a receipt, returns `{"id": ...}`
//! - GET /receipts/:id/points - Points awarded to a receipt, returns `{"points": ...}`

pub mod dto;
pub mod error;
pub mod routes;
pub mod server;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use server::{ServerConfig, create_app, run_server};
