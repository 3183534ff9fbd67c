//! Stylus settlement relay gated on solver signatures.
//!
//! A solver signs an EIP-712 settlement message off-line; anyone may submit
//! the signed message through [`SolverRelay::settle`], which verifies the
//! signature, checks the solver's authorization and replay nonce, and
//! forwards the settlement calldata to the settlement contract.

#![cfg_attr(not(any(test, feature = "export-abi")), no_std)]

extern crate alloc;

pub mod errors;
pub mod interfaces;
pub mod relay;
pub mod utils;

pub use relay::SolverRelay;
