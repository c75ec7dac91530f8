//! # Claim Flow
//!
//! Off-chain signer → user → gateway → manager, end to end.
//!
//! ```text
//! Signer ──sign(M, T+3600, U)──→ User ──claim(M, packet)──→ Gateway
//!                                                              │
//!                                   verify → receiver → manager authorized
//!                                                              │
//!                                                 Manager.claim(gateway, U)
//!                                                              │
//!                                                     Claimed { U, M }
//! ```

#[cfg(test)]
mod tests {
    use pr_01_packet_verification::{AccessError, PacketVerificationApi, VerifierEvent};
    use pr_02_claim_gateway::{ClaimError, ClaimGatewayApi, GatewayEvent, ManagerError};
    use shared_types::Address;

    use crate::fixtures::{random_signer, Deployment, ADMIN, MANAGER, USER};

    // =============================================================================
    // HAPPY PATH
    // =============================================================================

    #[test]
    fn test_signed_packet_claims_reward() {
        let mut deployment = Deployment::new();
        let packet = deployment.packet(MANAGER, USER, 3600);

        deployment.gateway.claim(USER, MANAGER, &packet).unwrap();

        assert!(deployment.reward().has_claimed(&USER));
        assert_eq!(deployment.reward().claimers(), &[USER]);
        assert_eq!(
            deployment.gateway.take_events(),
            vec![GatewayEvent::Claimed {
                receiver: USER,
                manager: MANAGER,
            }]
        );
    }

    #[test]
    fn test_resubmission_verifies_but_reward_refuses() {
        let mut deployment = Deployment::new();
        let packet = deployment.packet(MANAGER, USER, 3600);

        deployment.gateway.claim(USER, MANAGER, &packet).unwrap();
        deployment.gateway.take_events();

        assert!(deployment.gateway.verifier().verify(&MANAGER, &packet));
        assert_eq!(
            deployment.gateway.claim(USER, MANAGER, &packet),
            Err(ClaimError::Manager(ManagerError::AlreadyClaimed {
                claimer: USER
            }))
        );
        assert!(deployment.gateway.take_events().is_empty());
        assert_eq!(deployment.reward().claimers().len(), 1);
    }

    #[test]
    fn test_distinct_receivers_claim_independently() {
        let mut deployment = Deployment::new();
        let other = Address::repeat_byte(0x0d);

        let mine = deployment.packet(MANAGER, USER, 60);
        let theirs = deployment.packet(MANAGER, other, 60);

        deployment.gateway.claim(USER, MANAGER, &mine).unwrap();
        deployment.gateway.claim(other, MANAGER, &theirs).unwrap();

        assert_eq!(deployment.reward().claimers(), &[USER, other]);
    }

    // =============================================================================
    // REJECTIONS
    // =============================================================================

    #[test]
    fn test_stolen_packet_rejected() {
        let mut deployment = Deployment::new();
        let thief = Address::repeat_byte(0x66);
        let packet = deployment.packet(MANAGER, USER, 60);

        assert_eq!(
            deployment.gateway.claim(thief, MANAGER, &packet),
            Err(ClaimError::NotYourPacket {
                caller: thief,
                receiver: USER,
            })
        );
        assert!(!deployment.reward().has_claimed(&thief));
        assert!(!deployment.reward().has_claimed(&USER));
    }

    #[test]
    fn test_expired_packet_rejected() {
        let mut deployment = Deployment::new();
        let packet = deployment.packet(MANAGER, USER, 10);
        deployment.env.advance_time(11);

        assert_eq!(
            deployment.gateway.claim(USER, MANAGER, &packet),
            Err(ClaimError::InvalidPacket)
        );
        assert!(deployment.reward().claimers().is_empty());
    }

    #[test]
    fn test_untrusted_signer_rejected() {
        let mut deployment = Deployment::new();
        let rogue = random_signer();
        let packet = rogue
            .sign_packet(
                &deployment.gateway.verifier().domain_separator(),
                MANAGER,
                deployment.packet(MANAGER, USER, 60).deadline,
                USER,
            )
            .unwrap();

        assert_eq!(
            deployment.gateway.claim(USER, MANAGER, &packet),
            Err(ClaimError::InvalidPacket)
        );
    }

    #[test]
    fn test_revoked_manager_rejected() {
        let mut deployment = Deployment::new();
        let packet = deployment.packet(MANAGER, USER, 60);

        deployment.gateway.set_manager(ADMIN, MANAGER, false).unwrap();
        assert_eq!(
            deployment.gateway.claim(USER, MANAGER, &packet),
            Err(ClaimError::InvalidManager(MANAGER))
        );

        deployment.gateway.set_manager(ADMIN, MANAGER, true).unwrap();
        deployment.gateway.claim(USER, MANAGER, &packet).unwrap();
    }

    #[test]
    fn test_authorized_but_undeployed_manager() {
        let mut deployment = Deployment::new();
        let ghost = Address::repeat_byte(0x44);
        deployment.gateway.set_manager(ADMIN, ghost, true).unwrap();
        deployment.gateway.take_events();

        let packet = deployment.packet(ghost, USER, 60);
        assert_eq!(
            deployment.gateway.claim(USER, ghost, &packet),
            Err(ClaimError::ManagerNotDeployed(ghost))
        );
        assert!(deployment.gateway.take_events().is_empty());
    }

    // =============================================================================
    // ADMINISTRATION
    // =============================================================================

    #[test]
    fn test_admin_handover_moves_both_gates() {
        let mut deployment = Deployment::new();
        let successor = Address::repeat_byte(0x5e);

        deployment.gateway.transfer_admin(ADMIN, successor).unwrap();

        assert_eq!(
            deployment.gateway.set_manager(ADMIN, MANAGER, false),
            Err(ClaimError::Access(AccessError::NotAdmin { caller: ADMIN }))
        );
        assert!(deployment
            .gateway
            .set_trusted(ADMIN, Address::repeat_byte(1), true)
            .is_err());

        deployment
            .gateway
            .set_manager(successor, MANAGER, false)
            .unwrap();
        assert_eq!(
            deployment.gateway.take_events(),
            vec![
                GatewayEvent::Verifier(VerifierEvent::AdminChanged {
                    previous: ADMIN,
                    new: successor,
                }),
                GatewayEvent::ManagerSet {
                    manager: MANAGER,
                    authorized: false,
                },
            ]
        );
    }

    #[test]
    fn test_renounce_freezes_configuration_but_claims_continue() {
        let mut deployment = Deployment::new();
        deployment.gateway.renounce_admin(ADMIN).unwrap();

        assert_eq!(deployment.gateway.admin(), Address::ZERO);
        assert!(deployment.gateway.set_manager(ADMIN, MANAGER, false).is_err());
        assert!(deployment
            .gateway
            .set_manager(Address::ZERO, MANAGER, false)
            .is_err());
        assert!(deployment.gateway.transfer_admin(ADMIN, USER).is_err());

        let packet = deployment.packet(MANAGER, USER, 60);
        deployment.gateway.claim(USER, MANAGER, &packet).unwrap();
        assert!(deployment.gateway.is_manager(&MANAGER));
    }
}
