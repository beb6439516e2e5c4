//! HTTP API interfaces
//!
//! - `common`: response envelope and JSON body extractor
//! - `modules`: auth endpoints and request-id middleware
//! - `router`: route table and middleware stack

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_api_router;
