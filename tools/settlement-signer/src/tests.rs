#[cfg(test)]
mod tests {
    use crate::signer::{
        recover_signer, relay_digest, settle_calldata, sign_settlement, signer_address, settleCall,
    };
    use alloy_primitives::{Address, U256};
    use alloy_sol_types::SolCall;
    use k256::ecdsa::SigningKey;

    const CHAIN_ID: u64 = 42161;

    fn relay() -> Address {
        Address::from([0x42; 20])
    }

    fn solver_key() -> SigningKey {
        SigningKey::from_slice(&[0x01; 32]).unwrap()
    }

    #[test]
    fn test_sign_and_recover_roundtrip() {
        let key = solver_key();
        let signed = sign_settlement(
            &key,
            CHAIN_ID,
            relay(),
            vec![0xde, 0xad, 0xbe, 0xef],
            U256::ZERO,
            U256::from(1337u64),
        )
        .unwrap();

        assert!(signed.v == 27 || signed.v == 28);
        assert_eq!(recover_signer(&signed), Some(signer_address(&key)));
    }

    #[test]
    fn test_empty_settlement_signs() {
        // "0x" targets the settlement contract's fallback function.
        let key = solver_key();
        let signed =
            sign_settlement(&key, CHAIN_ID, relay(), Vec::new(), U256::ZERO, U256::MAX).unwrap();
        assert_eq!(recover_signer(&signed), Some(signer_address(&key)));
    }

    #[test]
    fn test_tampering_changes_the_recovered_signer() {
        let key = solver_key();
        let solver = signer_address(&key);
        let signed = sign_settlement(
            &key,
            CHAIN_ID,
            relay(),
            vec![0x01, 0x02],
            U256::from(7u64),
            U256::from(100u64),
        )
        .unwrap();

        let mut tampered = signed.clone();
        tampered.settlement = vec![0x01, 0x03];
        assert_ne!(recover_signer(&tampered), Some(solver));

        let mut tampered = signed.clone();
        tampered.nonce = U256::from(8u64);
        assert_ne!(recover_signer(&tampered), Some(solver));

        let mut tampered = signed.clone();
        tampered.deadline = U256::from(101u64);
        assert_ne!(recover_signer(&tampered), Some(solver));

        // A message signed for one relay instance is inert against another.
        let mut tampered = signed.clone();
        tampered.domain_chain_id = CHAIN_ID + 1;
        assert_ne!(recover_signer(&tampered), Some(solver));

        let mut tampered = signed.clone();
        tampered.domain_verifying_contract = Address::from([0x43; 20]);
        assert_ne!(recover_signer(&tampered), Some(solver));
    }

    #[test]
    fn test_out_of_range_recovery_param_recovers_nobody() {
        // NOTE: the ecrecover precompile treats any v outside {27, 28} as
        // incorrect input; the pre-flight mirrors that as `None`.
        let key = solver_key();
        let mut signed =
            sign_settlement(&key, CHAIN_ID, relay(), Vec::new(), U256::ZERO, U256::MAX).unwrap();
        signed.v = 42;
        assert_eq!(recover_signer(&signed), None);
    }

    #[test]
    fn test_distinct_keys_recover_distinct_solvers() {
        let a = SigningKey::from_slice(&[0x01; 32]).unwrap();
        let b = SigningKey::from_slice(&[0x02; 32]).unwrap();
        assert_ne!(signer_address(&a), signer_address(&b));
    }

    #[test]
    fn test_settle_calldata_layout() {
        let key = solver_key();
        let signed = sign_settlement(
            &key,
            CHAIN_ID,
            relay(),
            vec![0x01, 0x02, 0x03, 0x04],
            U256::ZERO,
            U256::MAX,
        )
        .unwrap();

        let calldata = settle_calldata(&signed);
        assert_eq!(&calldata[0..4], settleCall::SELECTOR.as_slice());
        // selector (4) + six head words (192) + bytes length word (32) +
        // padded settlement tail (32)
        assert_eq!(calldata.len(), 4 + 192 + 32 + 32);
    }

    #[test]
    fn test_digest_matches_shared_canonicalization() {
        let separator = solver_relay_types::domain_separator(CHAIN_ID, relay());
        let expected = solver_relay_types::settlement_digest(
            separator,
            &[0x01],
            U256::from(1u64),
            U256::from(2u64),
        );
        assert_eq!(
            relay_digest(CHAIN_ID, relay(), &[0x01], U256::from(1u64), U256::from(2u64)),
            expected
        );
    }
}
