//! Nacos instance <-> generic service instance conversion
//!
//! The forward direction drops instances that must not receive traffic and
//! keeps the Nacos specific attributes as metadata. The reverse direction
//! only restores what re-registration needs: address, weight and health.

use std::collections::HashMap;
use std::num::ParseFloatError;

use nacos_discovery_api::{
    CLUSTER, EPHEMERAL, HEALTHY, INSTANCE_ID, Instance, NULL_CLUSTER, SECURE, ServiceInstance,
    WEIGHT,
};
use tracing::{debug, trace};

use crate::error::{ConversionError, Result};

/// Convert a Nacos instance into a generic service instance.
///
/// Returns `None` when there is no instance, or when it is disabled or
/// unhealthy. The service id is taken from `service_id`, never from the
/// instance.
pub fn to_service_instance(
    instance: Option<&Instance>,
    service_id: &str,
) -> Option<ServiceInstance> {
    let instance = instance?;
    if !instance.is_available() {
        trace!(
            "Skipping instance: service={}, instanceId={}, enabled={}, healthy={}",
            service_id, instance.instance_id, instance.enabled, instance.healthy
        );
        return None;
    }

    let metadata = build_metadata(instance);
    let secure = metadata.get(SECURE).is_some_and(|value| parse_bool(value));

    Some(ServiceInstance {
        service_id: service_id.to_string(),
        instance_id: instance.instance_id.clone(),
        host: instance.ip.clone(),
        port: instance.port,
        secure,
        metadata,
    })
}

/// Convert a registry host list, keeping only the instances that can serve.
pub fn to_service_instances(instances: &[Instance], service_id: &str) -> Vec<ServiceInstance> {
    let converted: Vec<ServiceInstance> = instances
        .iter()
        .filter_map(|instance| to_service_instance(Some(instance), service_id))
        .collect();

    debug!(
        "Converted instances: service={}, received={}, kept={}",
        service_id,
        instances.len(),
        converted.len()
    );

    converted
}

/// Convert a generic service instance back into a Nacos instance.
///
/// Requires `nacos.weight` in the metadata. A missing or non-`true`
/// `nacos.healthy` yields an unhealthy instance. Fields not carried by the
/// generic record keep the `Instance::new` defaults.
pub fn to_instance(service_instance: &ServiceInstance) -> Result<Instance> {
    let metadata = &service_instance.metadata;

    let raw_weight = metadata
        .get(WEIGHT)
        .ok_or_else(|| ConversionError::MissingMetadata(WEIGHT.to_string()))?;
    let weight = parse_weight(raw_weight).map_err(|source| ConversionError::InvalidWeight {
        value: raw_weight.clone(),
        source,
    })?;

    let mut instance = Instance::new(service_instance.host.clone(), service_instance.port);
    instance.weight = weight;
    instance.healthy = metadata.get(HEALTHY).is_some_and(|value| parse_bool(value));

    Ok(instance)
}

// Key application order is observable: each step overwrites the previous
// ones, and nacos.ephemeral is always written last.
fn build_metadata(instance: &Instance) -> HashMap<String, String> {
    let mut metadata = HashMap::with_capacity(instance.metadata.len() + 5);

    metadata.insert(INSTANCE_ID.to_string(), instance.instance_id.clone());
    metadata.insert(WEIGHT.to_string(), format_weight(instance.weight));
    metadata.insert(HEALTHY.to_string(), instance.healthy.to_string());
    metadata.insert(
        CLUSTER.to_string(),
        instance
            .cluster_name
            .clone()
            .unwrap_or_else(|| NULL_CLUSTER.to_string()),
    );

    metadata.extend(
        instance
            .metadata
            .iter()
            .map(|(key, value)| (key.clone(), value.clone())),
    );

    metadata.insert(EPHEMERAL.to_string(), instance.ephemeral.to_string());

    metadata
}

/// Parse a weight string, accepting the `d`/`f` type suffix Nacos clients
/// may print after a decimal literal.
fn parse_weight(raw: &str) -> std::result::Result<f64, ParseFloatError> {
    let value = raw.trim();
    let literal = match value.strip_suffix(['d', 'D', 'f', 'F']) {
        Some(stripped) if stripped.ends_with(|c: char| c.is_ascii_digit() || c == '.') => {
            stripped
        }
        _ => value,
    };
    literal.parse::<f64>()
}

/// Case-insensitive `"true"`; anything else is false
fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Render a weight the way Nacos clients print doubles: always with a
/// fraction digit, and in `E` notation outside `[1e-3, 1e7)`.
fn format_weight(weight: f64) -> String {
    if weight.is_nan() {
        return "NaN".to_string();
    }
    if weight.is_infinite() {
        return if weight > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = weight.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let plain = weight.to_string();
        return if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        };
    }

    let scientific = format!("{weight:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    if mantissa.contains('.') {
        format!("{mantissa}E{exponent}")
    } else {
        format!("{mantissa}.0E{exponent}")
    }
}
