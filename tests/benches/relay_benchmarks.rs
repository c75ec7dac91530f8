//! # Packet-Relay Benchmarks
//!
//! | Path | Work per call |
//! |------|---------------|
//! | `packet_digest` | two struct hashes + one keccak |
//! | `recover_address` | one secp256k1 recovery |
//! | `verify` | digest + recovery + trust lookup |
//! | `claim` | verify + manager hook |

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use pr_01_packet_verification::{packet_digest, recover_address, PacketVerificationApi};
use pr_02_claim_gateway::ClaimGatewayApi;
use pr_tests::fixtures::{Deployment, MANAGER, USER};
use shared_types::Address;

// ============================================================================
// Verifier
// ============================================================================

fn bench_packet_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("pr-01-packet-verification");

    let deployment = Deployment::new();
    let verifier = deployment.gateway.verifier();
    let packet = deployment.packet(MANAGER, USER, 3600);
    let separator = verifier.domain_separator();
    let digest = packet_digest(&separator, &packet);

    group.bench_function("packet_digest", |b| {
        b.iter(|| black_box(packet_digest(black_box(&separator), black_box(&packet))))
    });

    group.bench_function("recover_address", |b| {
        b.iter(|| black_box(recover_address(black_box(&digest), &packet.signature).is_ok()))
    });

    group.bench_function("verify_accepted", |b| {
        b.iter(|| black_box(verifier.verify(&MANAGER, black_box(&packet))))
    });

    group.bench_function("verify_wrong_request", |b| {
        b.iter(|| black_box(verifier.verify(&USER, black_box(&packet))))
    });

    for size in [10usize, 100] {
        let packets: Vec<_> = (0..size)
            .map(|i| deployment.packet(MANAGER, Address::repeat_byte(i as u8), 3600))
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("verify_batch", size), &packets, |b, ps| {
            b.iter(|| {
                let accepted = ps.iter().filter(|p| verifier.verify(&MANAGER, p)).count();
                black_box(accepted)
            })
        });
    }

    group.finish();
}

// ============================================================================
// Gateway
// ============================================================================

fn bench_claim(c: &mut Criterion) {
    let mut group = c.benchmark_group("pr-02-claim-gateway");

    group.bench_function("claim_fulfilled", |b| {
        b.iter_batched(
            || {
                let deployment = Deployment::new();
                let packet = deployment.packet(MANAGER, USER, 3600);
                (deployment, packet)
            },
            |(mut deployment, packet)| {
                black_box(deployment.gateway.claim(USER, MANAGER, &packet).is_ok())
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_packet_verification, bench_claim);
criterion_main!(benches);
