use alloy_primitives::{Address, FixedBytes, U256};

/// A settlement message plus the signature that authorizes it.
#[derive(Clone, Debug)]
pub struct SignedSettlement {
    /// Raw calldata forwarded to the settlement contract (empty for the
    /// fallback function).
    pub settlement: Vec<u8>,
    /// The solver's next relay nonce.
    pub nonce: U256,
    /// Last block number at which the settlement may execute.
    pub deadline: U256,

    /// ECDSA signature split the way the relay ABI takes it.
    pub v: u8,
    pub r: FixedBytes<32>,
    pub s: FixedBytes<32>,

    /// Domain separation parameters (chain + relay instance).
    pub domain_chain_id: u64,
    pub domain_verifying_contract: Address,
}
