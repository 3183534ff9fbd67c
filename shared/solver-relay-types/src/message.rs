//! EIP-712 digest construction for the settlement message.
//!
//! Layout (all big-endian, 32-byte words):
//! - domain separator: `keccak256(domainTypeHash || chainId || verifyingContract)`
//! - struct hash: `keccak256(settlementTypeHash || keccak256(settlement) || nonce || deadline)`
//! - digest: `keccak256("\x19\x01" || domainSeparator || structHash)`
//!
//! The domain carries only the chain id and the relay address, so a message
//! signed for one relay instance is inert against any other.

use alloc::vec::Vec;

use alloy_primitives::{keccak256, Address, FixedBytes, U256};

/// Domain separator binding signatures to one chain + relay instance.
///
/// The relay computes this once at initialization and stores it; off-line
/// signers recompute it from public deployment parameters.
pub fn domain_separator(chain_id: u64, verifying_contract: Address) -> FixedBytes<32> {
    let domain_type_hash =
        keccak256(b"EIP712Domain(uint256 chainId,address verifyingContract)");

    let mut buf = Vec::with_capacity(32 * 3);
    buf.extend_from_slice(domain_type_hash.as_slice());
    buf.extend_from_slice(&U256::from(chain_id).to_be_bytes::<32>());
    let mut vc_padded = [0u8; 32];
    vc_padded[12..32].copy_from_slice(verifying_contract.as_slice());
    buf.extend_from_slice(&vc_padded);
    keccak256(buf)
}

/// EIP-712 struct hash of `Settlement(bytes settlement,uint256 nonce,uint256 deadline)`.
///
/// The settlement calldata is hashed first so the typed message stays
/// fixed-size and unambiguous.
pub fn settlement_struct_hash(
    settlement: &[u8],
    nonce: U256,
    deadline: U256,
) -> FixedBytes<32> {
    let settlement_type_hash =
        keccak256(b"Settlement(bytes settlement,uint256 nonce,uint256 deadline)");
    let settlement_hash = keccak256(settlement);

    let mut buf = Vec::with_capacity(32 * 4);
    buf.extend_from_slice(settlement_type_hash.as_slice());
    buf.extend_from_slice(settlement_hash.as_slice());
    buf.extend_from_slice(&nonce.to_be_bytes::<32>());
    buf.extend_from_slice(&deadline.to_be_bytes::<32>());
    keccak256(buf)
}

/// The digest a solver signs: `keccak256("\x19\x01" || domainSeparator || structHash)`.
pub fn settlement_digest(
    domain_separator: FixedBytes<32>,
    settlement: &[u8],
    nonce: U256,
    deadline: U256,
) -> FixedBytes<32> {
    let struct_hash = settlement_struct_hash(settlement, nonce, deadline);

    let mut buf = Vec::with_capacity(2 + 32 + 32);
    buf.extend_from_slice(b"\x19\x01");
    buf.extend_from_slice(domain_separator.as_slice());
    buf.extend_from_slice(struct_hash.as_slice());
    keccak256(buf)
}
