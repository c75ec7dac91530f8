//! # Telemetry Wiring
//!
//! Claims and admin calls through the full stack move the shared counters.
//! Counters are process-global and tests run in parallel, so assertions
//! compare against a snapshot and only ever expect growth.

#[cfg(test)]
mod tests {
    use pr_01_packet_verification::PacketVerificationApi;
    use pr_02_claim_gateway::ClaimGatewayApi;
    use relay_telemetry::{
        encode_metrics, init_telemetry, TelemetryConfig, ADMIN_ACTIONS, CLAIMS,
        PACKET_VERIFICATIONS,
    };
    use shared_types::Address;

    use crate::fixtures::{Deployment, ADMIN, MANAGER, USER};

    fn init() {
        // Another test may already own the global subscriber.
        let _ = init_telemetry(&TelemetryConfig::for_component("pr-tests"));
    }

    #[test]
    fn test_claim_counters_exported() {
        init();
        let mut deployment = Deployment::new();
        let fulfilled = CLAIMS.with_label_values(&["fulfilled"]).get();
        let rejected = CLAIMS.with_label_values(&["invalid_packet"]).get();

        let packet = deployment.packet(MANAGER, USER, 60);
        deployment.gateway.claim(USER, MANAGER, &packet).unwrap();
        let _ = deployment.gateway.claim(USER, USER, &packet);

        assert!(CLAIMS.with_label_values(&["fulfilled"]).get() > fulfilled);
        assert!(CLAIMS.with_label_values(&["invalid_packet"]).get() > rejected);

        let text = encode_metrics().unwrap();
        assert!(text.contains("pr_claims_total"));
        assert!(text.contains("pr_packet_verifications_total"));
        tracing::info!(component = "pr-tests", "metrics exported");
    }

    #[test]
    fn test_verification_verdicts_counted() {
        init();
        let deployment = Deployment::new();
        let accepted = PACKET_VERIFICATIONS.with_label_values(&["accepted"]).get();
        let rejected = PACKET_VERIFICATIONS.with_label_values(&["rejected"]).get();

        let packet = deployment.packet(MANAGER, USER, 60);
        assert!(deployment.gateway.verifier().verify(&MANAGER, &packet));
        assert!(!deployment.gateway.verifier().verify(&USER, &packet));

        assert!(PACKET_VERIFICATIONS.with_label_values(&["accepted"]).get() > accepted);
        assert!(PACKET_VERIFICATIONS.with_label_values(&["rejected"]).get() > rejected);
    }

    #[test]
    fn test_denied_admin_calls_counted() {
        init();
        let mut deployment = Deployment::new();
        let denied = ADMIN_ACTIONS.with_label_values(&["denied"]).get();
        let intruder = Address::repeat_byte(0x66);

        assert!(deployment.gateway.set_manager(intruder, MANAGER, false).is_err());
        assert!(deployment.gateway.set_trusted(intruder, intruder, true).is_err());

        assert!(ADMIN_ACTIONS.with_label_values(&["denied"]).get() >= denied + 2.0);
        assert!(deployment.gateway.set_manager(ADMIN, MANAGER, true).is_ok());
    }
}
