//! Common API constants
//!
//! Metadata keys carried on a generic service instance to keep the Nacos
//! specific attributes of the registered endpoint.

// Reserved keys, read back when re-registering an instance
pub const WEIGHT: &str = "nacos.weight";
pub const HEALTHY: &str = "nacos.healthy";

// Informational keys
pub const INSTANCE_ID: &str = "nacos.instanceId";
pub const CLUSTER: &str = "nacos.cluster";
pub const EPHEMERAL: &str = "nacos.ephemeral";

// Transport flag, set by the registering application
pub const SECURE: &str = "secure";

// Written for an instance without a cluster name
pub const NULL_CLUSTER: &str = "null";

pub const DEFAULT_WEIGHT: f64 = 1.0;
