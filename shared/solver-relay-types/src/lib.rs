//! Shared settlement-message canonicalization for the solver relay.
//!
//! The relay contract and off-line signers must agree bit-for-bit on the
//! digest a solver signs; both sides use this crate.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod message;

pub use message::{domain_separator, settlement_digest, settlement_struct_hash};
