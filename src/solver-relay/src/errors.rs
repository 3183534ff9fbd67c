//! Typed revert errors for the relay's external surface.

use alloc::vec::Vec;

use alloy_sol_types::{sol, SolError};

sol! {
    /// The recovered signer is not an authorized solver. A zero address means
    /// signature recovery itself failed.
    #[derive(Debug, PartialEq)]
    error Unauthorized(address solver);

    /// The submitted nonce is not the signer's next nonce.
    #[derive(Debug, PartialEq)]
    error InvalidNonce();

    /// The chain has moved past the settlement deadline.
    #[derive(Debug, PartialEq)]
    error Expired();

    #[derive(Debug, PartialEq)]
    error AlreadyInitialized();

    #[derive(Debug, PartialEq)]
    error NotInitialized();
}

/// Failure modes of the relay.
///
/// Each variant ABI-encodes to its own selector so off-line tooling can tell
/// "wrong signer", "stale or foreign message", and "expired" apart.
#[derive(Debug, PartialEq)]
pub enum SolverRelayError {
    Unauthorized(Unauthorized),
    InvalidNonce(InvalidNonce),
    Expired(Expired),
    AlreadyInitialized(AlreadyInitialized),
    NotInitialized(NotInitialized),
    /// Raw revert data from the settlement contract, bubbled unmodified.
    SettlementReverted(Vec<u8>),
}

impl From<SolverRelayError> for Vec<u8> {
    fn from(err: SolverRelayError) -> Vec<u8> {
        match err {
            SolverRelayError::Unauthorized(e) => e.abi_encode(),
            SolverRelayError::InvalidNonce(e) => e.abi_encode(),
            SolverRelayError::Expired(e) => e.abi_encode(),
            SolverRelayError::AlreadyInitialized(e) => e.abi_encode(),
            SolverRelayError::NotInitialized(e) => e.abi_encode(),
            SolverRelayError::SettlementReverted(data) => data,
        }
    }
}
