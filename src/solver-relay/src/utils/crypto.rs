//! Cryptographic helpers used by the relay.
//!
//! Purpose: map a settlement digest and a detached ECDSA signature back to the
//! solver address that produced it.

use stylus_sdk::{
    alloy_primitives::{Address, FixedBytes},
    call::RawCall,
};

/// Recover an EOA address from a 32-byte digest and a split `(v, r, s)`
/// ECDSA signature.
///
/// Notes:
/// - We use the EVM `ecrecover` precompile at address `0x01`.
/// - The precompile treats a `v` outside {27, 28} (or out-of-range `r`/`s`)
///   as incorrect input and recovers nothing; that surfaces here as
///   `Address::ZERO`, the "no identity" sentinel. Callers must treat the
///   sentinel as unauthorized, never as a wildcard signer.
pub fn ecrecover(
    digest: FixedBytes<32>,
    v: u8,
    r: FixedBytes<32>,
    s: FixedBytes<32>,
) -> Address {
    // Precompile address 0x01.
    let mut precompile = [0u8; 20];
    precompile[19] = 1;
    let to = Address::from_slice(&precompile);

    let mut input = [0u8; 128];
    input[0..32].copy_from_slice(digest.as_slice());
    // v as a 32-byte big-endian word.
    input[63] = v;
    input[64..96].copy_from_slice(r.as_slice());
    input[96..128].copy_from_slice(s.as_slice());

    let out = match unsafe { RawCall::new_static().gas(50_000).call(to, &input) } {
        Ok(out) => out,
        Err(_) => return Address::ZERO,
    };
    if out.len() < 32 {
        return Address::ZERO;
    }
    // The precompile returns a 32-byte word with the address in the low 20 bytes.
    Address::from_slice(&out[12..32])
}
