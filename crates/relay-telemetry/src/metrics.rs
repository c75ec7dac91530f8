//! Prometheus metrics for Packet-Relay.
//!
//! All metrics follow the naming convention: `pr_<component>_<metric>_total`.

use lazy_static::lazy_static;
use prometheus::{CounterVec, Encoder, Opts, Registry, TextEncoder};

use crate::TelemetryError;

lazy_static! {
    /// Metrics registry for this process
    pub static ref REGISTRY: Registry = Registry::new();

    /// Packet verification verdicts
    pub static ref PACKET_VERIFICATIONS: CounterVec = CounterVec::new(
        Opts::new("pr_packet_verifications_total", "Packet verification verdicts"),
        &["outcome"]  // outcome: accepted/rejected
    ).expect("metric creation failed");

    /// Claim attempts through the gateway
    pub static ref CLAIMS: CounterVec = CounterVec::new(
        Opts::new("pr_claims_total", "Claim attempts by outcome"),
        &["outcome"]  // outcome: fulfilled/invalid_packet/not_your_packet/invalid_manager/manager_failed
    ).expect("metric creation failed");

    /// Administrator actions
    pub static ref ADMIN_ACTIONS: CounterVec = CounterVec::new(
        Opts::new("pr_admin_actions_total", "Administrator actions by kind"),
        &["action"]  // action: set_trusted/set_manager/transfer_admin/renounce_admin/denied
    ).expect("metric creation failed");
}

/// Register all metrics with the registry.
///
/// Registering twice reports `MetricsInit` for the duplicate collector.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(PACKET_VERIFICATIONS.clone()),
        Box::new(CLAIMS.clone()),
        Box::new(ADMIN_ACTIONS.clone()),
    ];

    for metric in metrics {
        REGISTRY
            .register(metric)
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    }

    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
