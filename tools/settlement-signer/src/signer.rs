use alloy_primitives::{Address, FixedBytes, U256};
use alloy_sol_types::{sol, SolCall};
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use sha3::{Digest, Keccak256};

use crate::types::SignedSettlement;

sol! {
    /// `SolverRelay.settle` ABI, for producing ready-to-submit calldata.
    function settle(bytes settlement, uint256 nonce, uint256 deadline, uint8 v, bytes32 r, bytes32 s);
}

/// Compute the digest the relay will verify for `(settlement, nonce, deadline)`
/// under the given deployment (must match `SolverRelay.settlement_message`).
pub fn relay_digest(
    chain_id: u64,
    relay: Address,
    settlement: &[u8],
    nonce: U256,
    deadline: U256,
) -> FixedBytes<32> {
    let separator = solver_relay_types::domain_separator(chain_id, relay);
    solver_relay_types::settlement_digest(separator, settlement, nonce, deadline)
}

/// Sign a settlement with the solver key, producing the `(v, r, s)` split the
/// relay ABI takes.
pub fn sign_settlement(
    signing_key: &SigningKey,
    chain_id: u64,
    relay: Address,
    settlement: Vec<u8>,
    nonce: U256,
    deadline: U256,
) -> Result<SignedSettlement, k256::ecdsa::Error> {
    let digest = relay_digest(chain_id, relay, &settlement, nonce, deadline);
    let (signature, recovery_id) = signing_key.sign_prehash_recoverable(digest.as_slice())?;
    let (r, s) = signature.split_bytes();

    Ok(SignedSettlement {
        settlement,
        nonce,
        deadline,
        // v in {27, 28}, as the ecrecover precompile expects.
        v: 27 + recovery_id.to_byte(),
        r: FixedBytes::from_slice(r.as_slice()),
        s: FixedBytes::from_slice(s.as_slice()),
        domain_chain_id: chain_id,
        domain_verifying_contract: relay,
    })
}

/// Ethereum address of a solver signing key.
pub fn signer_address(signing_key: &SigningKey) -> Address {
    address_of(&VerifyingKey::from(signing_key))
}

/// Recover the signer the relay will see for this signed settlement.
///
/// Mirrors the on-chain recovery path for pre-flight checks: `None` is the
/// relay's zero sentinel, which `settle` always rejects as unauthorized.
pub fn recover_signer(signed: &SignedSettlement) -> Option<Address> {
    if signed.v != 27 && signed.v != 28 {
        return None;
    }
    let recovery_id = RecoveryId::from_byte(signed.v - 27)?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(signed.r.as_slice());
    sig_bytes[32..].copy_from_slice(signed.s.as_slice());
    let signature = Signature::from_slice(&sig_bytes).ok()?;

    let digest = relay_digest(
        signed.domain_chain_id,
        signed.domain_verifying_contract,
        &signed.settlement,
        signed.nonce,
        signed.deadline,
    );
    let verifying_key =
        VerifyingKey::recover_from_prehash(digest.as_slice(), &signature, recovery_id).ok()?;
    Some(address_of(&verifying_key))
}

/// ABI-encode the `settle` call for direct submission to the relay.
pub fn settle_calldata(signed: &SignedSettlement) -> Vec<u8> {
    settleCall {
        settlement: signed.settlement.clone().into(),
        nonce: signed.nonce,
        deadline: signed.deadline,
        v: signed.v,
        r: signed.r,
        s: signed.s,
    }
    .abi_encode()
}

fn address_of(verifying_key: &VerifyingKey) -> Address {
    // keccak256 of the uncompressed public key, minus the 0x04 tag byte;
    // the address is the low 20 bytes.
    let point = verifying_key.to_encoded_point(false);
    let mut hasher = Keccak256::new();
    hasher.update(&point.as_bytes()[1..]);
    let hash = hasher.finalize();
    Address::from_slice(&hash[12..32])
}
