//! Generic service instance model
//!
//! A registered endpoint as seen through a backend-agnostic discovery
//! abstraction. Backend specific attributes travel in `metadata`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Backend-agnostic service instance
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceInstance {
    /// Logical service identifier
    pub service_id: String,
    pub instance_id: String,
    pub host: String,
    pub port: i32,
    /// Whether the endpoint expects TLS
    pub secure: bool,
    pub metadata: HashMap<String, String>,
}

impl ServiceInstance {
    pub fn new(service_id: String, host: String, port: i32) -> Self {
        Self {
            service_id,
            host,
            port,
            ..Default::default()
        }
    }

    pub fn scheme(&self) -> &'static str {
        if self.secure { "https" } else { "http" }
    }

    /// URI of the endpoint, e.g. `http://10.0.0.1:8080`
    pub fn uri(&self) -> String {
        format!("{}://{}:{}", self.scheme(), self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_instance_default() {
        let instance = ServiceInstance::default();
        assert!(!instance.secure);
        assert!(instance.metadata.is_empty());
        assert_eq!(instance.port, 0);
    }

    #[test]
    fn test_scheme_and_uri() {
        let mut instance =
            ServiceInstance::new("order-service".to_string(), "10.0.0.1".to_string(), 8080);
        assert_eq!(instance.scheme(), "http");
        assert_eq!(instance.uri(), "http://10.0.0.1:8080");

        instance.secure = true;
        assert_eq!(instance.scheme(), "https");
        assert_eq!(instance.uri(), "https://10.0.0.1:8080");
    }

    #[test]
    fn test_service_instance_serialization() {
        let mut instance =
            ServiceInstance::new("order-service".to_string(), "10.0.0.1".to_string(), 8080);
        instance.instance_id = "abc123".to_string();
        instance
            .metadata
            .insert("nacos.weight".to_string(), "1.0".to_string());

        let json = serde_json::to_string(&instance).unwrap();
        assert!(json.contains("\"serviceId\":\"order-service\""));
        assert!(json.contains("\"instanceId\":\"abc123\""));

        let deserialized: ServiceInstance = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, instance);
    }
}
