//! REST API
//!
//! - `common`: error envelope and the validating JSON extractor
//! - `modules`: handlers, DTOs and middleware per resource
//! - `router`: route table and OpenAPI document

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc};
