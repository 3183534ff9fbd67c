//! Off-line signing for the solver relay.
//!
//! Builds, signs, and pre-flights settlement messages without touching the
//! chain: the digest comes from the same canonicalization crate the relay
//! uses, so a signature produced here is exactly what `settle` verifies.

pub mod signer;
pub mod types;

mod tests;
