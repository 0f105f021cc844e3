//! Nacos Discovery - instance conversion for discovery abstractions
//!
//! This crate provides:
//! - Conversion of Nacos naming instances into generic service instances,
//!   dropping instances that must not receive traffic
//! - Conversion of generic service instances back into Nacos instances for
//!   re-registration
//! - Error types for the reverse conversion

pub mod converter;
pub mod error;

pub use converter::{to_instance, to_service_instance, to_service_instances};
pub use error::{ConversionError, Result};

// Record re-exports
pub use nacos_discovery_api::{Instance, ServiceInstance};
