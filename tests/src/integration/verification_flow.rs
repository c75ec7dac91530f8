//! # Verification Flow
//!
//! Producer-side signing against a deployed verifier:
//!
//! 1. **Verdict**: accepted iff live, request-scoped, and trusted
//! 2. **Replay across requests**: a packet for A never verifies for B
//! 3. **Fork**: packets signed before a chain-id change stop verifying
//! 4. **Wire format**: 65-byte signatures from other tooling verify unchanged

#[cfg(test)]
mod tests {
    use pr_01_packet_verification::{
        hash_domain, recover_address, Eip712Domain, ExecutionEnvironment, Packet, PacketError,
        PacketSignature, PacketVerificationApi,
    };
    use shared_types::{Address, U256};

    use crate::fixtures::{random_signer, Deployment, ADMIN, CHAIN_ID, GATEWAY, MANAGER, USER};

    // =============================================================================
    // VERDICT
    // =============================================================================

    #[test]
    fn test_verdict_matches_rule_across_inputs() {
        let mut deployment = Deployment::new();
        let untrusted = random_signer();
        let now = deployment.now();

        let trusted_packet = deployment.packet(MANAGER, USER, 0);
        let untrusted_packet = untrusted
            .sign_packet(
                &deployment.gateway.verifier().domain_separator(),
                MANAGER,
                U256::from(now),
                USER,
            )
            .unwrap();

        let cases: Vec<(&Packet, Address, bool)> = vec![
            (&trusted_packet, MANAGER, true),
            (&trusted_packet, USER, false),
            (&untrusted_packet, MANAGER, false),
        ];
        for (packet, request, expected) in cases {
            assert_eq!(
                deployment.gateway.verifier().verify(&request, packet),
                expected,
                "request {request}"
            );
        }

        deployment
            .gateway
            .set_trusted(ADMIN, untrusted.address(), true)
            .unwrap();
        assert!(deployment
            .gateway
            .verifier()
            .verify(&MANAGER, &untrusted_packet));
    }

    #[test]
    fn test_expiry_boundary() {
        let deployment = Deployment::new();
        let packet = deployment.packet(MANAGER, USER, 0);
        let verifier = deployment.gateway.verifier();

        assert!(verifier.verify(&MANAGER, &packet));
        deployment.env.advance_time(1);
        assert!(!verifier.verify(&MANAGER, &packet));
        assert_eq!(
            verifier.require_valid_packet(&MANAGER, &packet),
            Err(PacketError::InvalidPacket)
        );
    }

    #[test]
    fn test_replay_across_requests() {
        let deployment = Deployment::new();
        let packet = deployment.packet(MANAGER, USER, 60);
        let verifier = deployment.gateway.verifier();

        assert!(verifier.verify(&MANAGER, &packet));
        for byte in [0x00, 0x01, 0x34, 0xff] {
            assert!(!verifier.verify(&Address::repeat_byte(byte), &packet));
        }
    }

    #[test]
    fn test_untrust_then_retrust() {
        let mut deployment = Deployment::new();
        let packet = deployment.packet(MANAGER, USER, 60);
        let signer = deployment.signer.address();

        deployment.gateway.set_trusted(ADMIN, signer, false).unwrap();
        assert!(!deployment.gateway.verifier().verify(&MANAGER, &packet));
        deployment.gateway.set_trusted(ADMIN, signer, true).unwrap();
        assert!(deployment.gateway.verifier().verify(&MANAGER, &packet));
    }

    // =============================================================================
    // DOMAIN SEPARATION
    // =============================================================================

    #[test]
    fn test_separator_follows_chain_id() {
        let deployment = Deployment::new();
        let verifier = deployment.gateway.verifier();
        let expected = hash_domain(&Eip712Domain {
            name: "PacketVerifier".to_string(),
            version: "1".to_string(),
            chain_id: U256::from(CHAIN_ID),
            verifying_contract: GATEWAY,
        });

        assert_eq!(verifier.domain_separator(), expected);
        assert_eq!(verifier.domain_separator(), expected);

        let old_packet = deployment.packet(MANAGER, USER, 60);
        deployment.env.set_chain_id(CHAIN_ID + 1);

        assert_ne!(verifier.domain_separator(), expected);
        assert_eq!(verifier.domain().chain_id, U256::from(CHAIN_ID + 1));
        assert!(!verifier.verify(&MANAGER, &old_packet));
        assert!(verifier.verify(&MANAGER, &deployment.packet(MANAGER, USER, 60)));
    }

    #[test]
    fn test_other_verifier_instance_rejects() {
        let deployment = Deployment::new();
        let other_domain = Eip712Domain {
            verifying_contract: Address::repeat_byte(0x01),
            ..deployment.gateway.verifier().domain()
        };
        let foreign = deployment
            .signer
            .sign_packet(
                &hash_domain(&other_domain),
                MANAGER,
                U256::from(deployment.now() + 60),
                USER,
            )
            .unwrap();

        assert!(!deployment.gateway.verifier().verify(&MANAGER, &foreign));
    }

    // =============================================================================
    // WIRE FORMAT
    // =============================================================================

    #[test]
    fn test_packed_signature_roundtrip_verifies() {
        let deployment = Deployment::new();
        let packet = deployment.packet(MANAGER, USER, 60);

        let wire = hex::encode(packet.signature.to_bytes());
        let decoded = PacketSignature::from_bytes(&hex::decode(wire).unwrap()).unwrap();
        let rebuilt = packet.contents().with_signature(decoded);

        assert!(deployment.gateway.verifier().verify(&MANAGER, &rebuilt));
    }

    #[test]
    fn test_digest_view_matches_signer() {
        let deployment = Deployment::new();
        let packet = deployment.packet(MANAGER, USER, 60);
        let digest = deployment.gateway.verifier().packet_digest(&packet);

        assert_eq!(
            recover_address(&digest, &packet.signature).unwrap(),
            deployment.signer.address()
        );
    }

    #[test]
    fn test_packet_json_roundtrip_verifies() {
        let deployment = Deployment::new();
        let packet = deployment.packet(MANAGER, USER, 60);

        let json = serde_json::to_string(&packet).unwrap();
        let back: Packet = serde_json::from_str(&json).unwrap();

        assert_eq!(back, packet);
        assert!(deployment.gateway.verifier().verify(&MANAGER, &back));
        assert!(deployment.env.block_timestamp() > 0);
    }
}
