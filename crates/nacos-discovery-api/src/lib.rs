//! Nacos Discovery API - record definitions
//!
//! This crate provides:
//! - The Nacos naming `Instance` record
//! - The backend-agnostic `ServiceInstance` record
//! - Reserved metadata keys shared by both representations

pub mod cloud;
pub mod model;
pub mod naming;

// Re-export commonly used types
pub use cloud::model::ServiceInstance;
pub use model::*;
pub use naming::model::Instance;
