//! Naming/Service discovery API models
//!
//! This module defines the instance record used by the Nacos naming service.

pub mod model;

pub use model::*;
