//! Settlement relay contract: one-shot, signature-gated dispatch.
//!
//! Design notes:
//! - Solvers sign an EIP-712 `Settlement(bytes settlement,uint256 nonce,uint256 deadline)`
//!   message off-line; anyone may submit it through `settle`.
//! - The per-solver nonce map is owned exclusively by this contract. The nonce
//!   is consumed before the settlement call, so a reentrant resubmission of
//!   the same signature fails the nonce check.
//! - Authorization is queried from the authenticator on every submission; a
//!   solver revoked after signing is rejected at submission time.

use alloc::vec;
use alloc::vec::Vec;

use stylus_sdk::{
    alloy_primitives::{keccak256, Address, FixedBytes, U256},
    call::RawCall,
    prelude::*,
    stylus_core,
};

use alloy_sol_types::sol;

use crate::{
    errors::{
        AlreadyInitialized, Expired, InvalidNonce, NotInitialized, SolverRelayError, Unauthorized,
    },
    utils::crypto::ecrecover,
};

sol! {
    /// Emitted once per successfully relayed settlement.
    event SettlementRelayed(address indexed solver, uint256 nonce);
}

sol_storage! {
    /// Relay storage. A non-zero `domain_separator` marks the relay as
    /// initialized (a keccak output is never zero in practice).
    #[entrypoint]
    pub struct SolverRelay {
        /// Downstream settlement contract (zero in the cancel-only configuration).
        address settlement_contract;

        /// Authority oracle, discovered from the settlement contract.
        address solver_authenticator;

        /// EIP-712 domain separator, fixed at initialization.
        bytes32 domain_separator;

        /// Next expected nonce per solver.
        mapping(address => uint256) nonces;
    }
}

#[public]
impl SolverRelay {
    /// One-shot initializer binding the relay to a settlement contract and to
    /// this chain id + relay address.
    ///
    /// With a zero settlement address no authenticator is looked up and every
    /// `settle` fails authorization; `cancel_current_nonce` still works. The
    /// deployment tooling uses that configuration for gas measurements.
    pub fn initialize(&mut self, settlement: Address) -> Result<(), SolverRelayError> {
        if self._is_initialized() {
            return Err(SolverRelayError::AlreadyInitialized(AlreadyInitialized {}));
        }

        let authenticator = if settlement == Address::ZERO {
            Address::ZERO
        } else {
            self.fetch_authenticator(settlement)
        };

        let separator = solver_relay_types::domain_separator(
            self.vm().chain_id(),
            self.vm().contract_address(),
        );

        self.settlement_contract.set(settlement);
        self.solver_authenticator.set(authenticator);
        self.domain_separator.set(separator);
        Ok(())
    }

    /// Relay a signed settlement to the settlement contract.
    ///
    /// Fails with `Unauthorized` when the signature does not recover to a
    /// currently-authorized solver, `InvalidNonce` unless `nonce` is exactly
    /// the solver's next nonce, and `Expired` strictly after `deadline` (the
    /// deadline block itself is still valid). A settlement revert is bubbled
    /// verbatim and aborts the whole transaction, nonce advance included.
    pub fn settle(
        &mut self,
        settlement: Vec<u8>,
        nonce: U256,
        deadline: U256,
        v: u8,
        r: FixedBytes<32>,
        s: FixedBytes<32>,
    ) -> Result<(), SolverRelayError> {
        let separator = self.domain_separator.get();
        if separator == FixedBytes::ZERO {
            return Err(SolverRelayError::NotInitialized(NotInitialized {}));
        }

        let digest = solver_relay_types::settlement_digest(separator, &settlement, nonce, deadline);
        let solver = ecrecover(digest, v, r, s);

        // The zero sentinel (failed recovery) must never authorize.
        if solver == Address::ZERO || !self.is_solver(solver) {
            return Err(SolverRelayError::Unauthorized(Unauthorized { solver }));
        }

        let expected_nonce = self.nonces.get(solver);
        if nonce != expected_nonce {
            return Err(SolverRelayError::InvalidNonce(InvalidNonce {}));
        }

        // The deadline is the last block in which the settlement is valid.
        if U256::from(self.vm().block_number()) > deadline {
            return Err(SolverRelayError::Expired(Expired {}));
        }

        // Consume the nonce before the external call: a reentrant submission
        // of the same signature must already see the bumped value.
        self.nonces
            .insert(solver, expected_nonce.saturating_add(U256::from(1u64)));

        let target = self.settlement_contract.get();
        if let Err(revert_data) = unsafe { RawCall::new().call(target, &settlement) } {
            // A failed settlement must not consume the nonce. Returning the
            // error also reverts the transaction on-chain.
            self.nonces.insert(solver, expected_nonce);
            return Err(SolverRelayError::SettlementReverted(revert_data));
        }

        stylus_core::log(self.vm(), SettlementRelayed { solver, nonce });
        Ok(())
    }

    /// Invalidate the caller's outstanding signed-but-unsubmitted settlement
    /// by advancing its nonce. Takes no signature and dispatches nothing.
    pub fn cancel_current_nonce(&mut self) -> Result<(), SolverRelayError> {
        if !self._is_initialized() {
            return Err(SolverRelayError::NotInitialized(NotInitialized {}));
        }
        let solver = self.vm().msg_sender();
        let nonce = self.nonces.get(solver);
        self.nonces
            .insert(solver, nonce.saturating_add(U256::from(1u64)));
        Ok(())
    }

    /// Next expected nonce for `solver`.
    pub fn nonces(&self, solver: Address) -> U256 {
        self.nonces.get(solver)
    }

    /// EIP-712 domain separator bound to this chain id and relay address.
    pub fn domain_separator(&self) -> FixedBytes<32> {
        self.domain_separator.get()
    }

    /// The exact digest a solver must sign for `(settlement, nonce, deadline)`.
    pub fn settlement_message(
        &self,
        settlement: Vec<u8>,
        nonce: U256,
        deadline: U256,
    ) -> FixedBytes<32> {
        solver_relay_types::settlement_digest(
            self.domain_separator.get(),
            &settlement,
            nonce,
            deadline,
        )
    }

    pub fn settlement_contract(&self) -> Address {
        self.settlement_contract.get()
    }

    pub fn solver_authenticator(&self) -> Address {
        self.solver_authenticator.get()
    }

    pub fn is_initialized(&self) -> bool {
        self._is_initialized()
    }
}

impl SolverRelay {
    fn _is_initialized(&self) -> bool {
        self.domain_separator.get() != FixedBytes::ZERO
    }

    /// `settlement.authenticator()`. Keep revert semantics deterministic;
    /// panic on a settlement contract that does not expose an authenticator.
    fn fetch_authenticator(&self, settlement: Address) -> Address {
        let data = selector("authenticator()");
        let out = unsafe { RawCall::new_static().call(settlement, &data) }
            .unwrap_or_else(|_| panic!("Invalid settlement contract"));
        if out.len() < 32 {
            panic!("Invalid settlement contract");
        }
        Address::from_slice(&out[12..32])
    }

    /// Fresh `isSolver` query on every submission; any failure, including the
    /// cancel-only configuration without an authenticator, reads as "not a
    /// solver".
    fn is_solver(&self, solver: Address) -> bool {
        let authenticator = self.solver_authenticator.get();
        if authenticator == Address::ZERO {
            return false;
        }

        let mut data = Vec::with_capacity(4 + 32);
        data.extend_from_slice(&selector("isSolver(address)"));
        let mut arg = [0u8; 32];
        arg[12..32].copy_from_slice(solver.as_slice());
        data.extend_from_slice(&arg);

        match unsafe { RawCall::new_static().call(authenticator, &data) } {
            Ok(out) => out.len() >= 32 && U256::from_be_slice(&out[0..32]) != U256::ZERO,
            Err(_) => false,
        }
    }
}

fn selector(sig: &str) -> [u8; 4] {
    let h = keccak256(sig.as_bytes());
    [h[0], h[1], h[2], h[3]]
}
