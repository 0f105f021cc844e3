// Naming module API models for service discovery
// This file defines the instance record exchanged with the Nacos naming service

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::model::DEFAULT_WEIGHT;

// Service instance information
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Instance {
    pub instance_id: String,
    pub ip: String,
    pub port: i32,
    pub weight: f64,
    pub healthy: bool,
    pub enabled: bool,
    pub ephemeral: bool,
    /// Unset until the instance is assigned to a cluster
    pub cluster_name: Option<String>,
    pub service_name: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub metadata: HashMap<String, String>,
}

impl Default for Instance {
    fn default() -> Self {
        Self {
            instance_id: String::new(),
            ip: String::new(),
            port: 0,
            weight: DEFAULT_WEIGHT,
            healthy: true,
            enabled: true,
            ephemeral: true,
            cluster_name: None,
            service_name: None,
            metadata: HashMap::new(),
        }
    }
}

impl Instance {
    pub fn new(ip: String, port: i32) -> Self {
        Self {
            ip,
            port,
            ..Default::default()
        }
    }

    /// Whether the instance may receive traffic
    pub fn is_available(&self) -> bool {
        self.enabled && self.healthy
    }
}
