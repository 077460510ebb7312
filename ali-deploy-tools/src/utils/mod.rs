// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.
//!
//! Formatting helpers shared by the deployment log and the contract details printer.

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{utils::format_units, U256},
};
use color::Color;

pub mod color;

/// Pretty-prints an amount of wei as ETH, e.g. `1.5 ETH`.
pub fn format_amt(wei: U256) -> String {
    match format_units(wei, "ether") {
        Ok(eth) => {
            let eth = eth.trim_end_matches('0').trim_end_matches('.');
            let eth = if eth.is_empty() { "0" } else { eth };
            format!("{eth} ETH")
        }
        Err(_) => "???".red(),
    }
}

/// Pretty-prints an amount of gas.
pub fn format_gas(gas: u64) -> String {
    let text = format!("{gas} gas");
    if gas <= 3_000_000 {
        text.mint()
    } else if gas <= 7_000_000 {
        text.yellow()
    } else {
        text.pink()
    }
}

/// Formats an ABI value the way it is written in deployment records and contract listings.
pub fn format_value(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Address(address) => address.to_checksum(None),
        DynSolValue::Bool(b) => b.to_string(),
        DynSolValue::Int(i, _) => i.to_string(),
        DynSolValue::Uint(u, _) => u.to_string(),
        DynSolValue::String(s) => s.clone(),
        DynSolValue::Bytes(bytes) => format!("0x{}", hex::encode(bytes)),
        DynSolValue::FixedBytes(word, size) => format!("0x{}", hex::encode(&word[..*size])),
        DynSolValue::Array(values) | DynSolValue::FixedArray(values) => {
            format!("[{}]", join_values(values))
        }
        DynSolValue::Tuple(values) => format!("({})", join_values(values)),
        other => format!("{other:?}"),
    }
}

fn join_values(values: &[DynSolValue]) -> String {
    values.iter().map(format_value).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, B256};

    #[test]
    fn formats_amounts() {
        assert_eq!(format_amt(U256::ZERO), "0 ETH");
        assert_eq!(format_amt(U256::from(1_500_000_000_000_000_000u128)), "1.5 ETH");
        assert_eq!(format_amt(U256::from(10u128.pow(19))), "10 ETH");
        assert_eq!(format_amt(U256::from(1u64)), "0.000000000000000001 ETH");
    }

    #[test]
    fn formats_values() {
        let bridge = address!("4200000000000000000000000000000000000010");
        assert_eq!(
            format_value(&DynSolValue::Address(bridge)),
            "0x4200000000000000000000000000000000000010"
        );
        assert_eq!(
            format_value(&DynSolValue::Uint(U256::from(18u8), 8)),
            "18"
        );
        assert_eq!(
            format_value(&DynSolValue::FixedBytes(B256::repeat_byte(0xab), 2)),
            "0xabab"
        );
        assert_eq!(
            format_value(&DynSolValue::Tuple(vec![
                DynSolValue::Bool(true),
                DynSolValue::String("ALI".to_owned()),
            ])),
            "(true, ALI)"
        );
    }
}
