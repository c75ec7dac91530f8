//! # Integration Flows

mod claim_flow;
mod telemetry;
mod verification_flow;
