//! Discovery abstraction models
//!
//! This module defines the backend-agnostic service instance record.

pub mod model;

pub use model::*;
