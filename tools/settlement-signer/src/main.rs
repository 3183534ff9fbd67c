use alloy_primitives::{Address, U256};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use k256::ecdsa::SigningKey;
use serde_json::json;

use settlement_signer::signer::{settle_calldata, sign_settlement, signer_address};

/// Sign a settlement message for the solver relay and print the ready-to-submit
/// `settle` calldata.
///
/// The digest is computed with the same canonicalization the relay verifies,
/// so the signature printed here is exactly what the chain will check.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Chain id the relay is deployed on.
    #[arg(long, env = "CHAIN_ID")]
    chain_id: u64,

    /// Address of the deployed relay (0x...).
    #[arg(long)]
    relay: String,

    /// Settlement calldata to relay (hex; "0x" relays the fallback function).
    #[arg(long, default_value = "0x")]
    settlement: String,

    /// The solver's next relay nonce (decimal; query `nonces(solver)` first).
    #[arg(long)]
    nonce: String,

    /// Last block number at which the settlement may execute (decimal;
    /// defaults to no expiry).
    #[arg(long)]
    deadline: Option<String>,

    /// Solver private key (hex string, 0x...).
    #[arg(long, env = "PKEY")]
    private_key: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let relay: Address = cli.relay.parse().context("invalid relay address")?;
    let settlement = decode_hex(&cli.settlement).context("invalid settlement hex")?;
    let nonce = parse_u256(&cli.nonce).context("invalid nonce")?;
    let deadline = match cli.deadline {
        Some(ref deadline) => parse_u256(deadline).context("invalid deadline")?,
        None => U256::MAX,
    };

    let key_bytes = decode_hex(&cli.private_key).context("invalid private key hex")?;
    let signing_key =
        SigningKey::from_slice(&key_bytes).map_err(|_| anyhow!("invalid private key"))?;

    let signed = sign_settlement(&signing_key, cli.chain_id, relay, settlement, nonce, deadline)
        .map_err(|err| anyhow!("signing failed: {err}"))?;

    let output = json!({
        "solver": signer_address(&signing_key).to_string(),
        "relay": relay.to_string(),
        "chain_id": cli.chain_id,
        "nonce": signed.nonce.to_string(),
        "deadline": signed.deadline.to_string(),
        "v": signed.v,
        "r": format!("0x{}", hex::encode(signed.r)),
        "s": format!("0x{}", hex::encode(signed.s)),
        "calldata": format!("0x{}", hex::encode(settle_calldata(&signed))),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn decode_hex(value: &str) -> Result<Vec<u8>> {
    let raw = value.strip_prefix("0x").unwrap_or(value);
    Ok(hex::decode(raw)?)
}

fn parse_u256(value: &str) -> Result<U256> {
    U256::from_str_radix(value, 10).map_err(|_| anyhow!("not a decimal uint256: {value}"))
}
