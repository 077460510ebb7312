// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Printing the public state of deployed contracts.

use std::fmt;

use alloy::{
    dyn_abi::{FunctionExt, JsonAbiExt},
    json_abi::{Function, JsonAbi, StateMutability},
    primitives::{Address, U256},
};

use crate::{
    core::chain::{Chain, ChainError},
    utils::{
        color::{Color, DebugColor},
        format_amt, format_value,
    },
};

/// Caller account and the values of every parameterless getter of a contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractDetails {
    pub caller: Address,
    pub nonce: u64,
    pub balance: U256,
    pub address: Address,
    /// Whether the address holds contract code. Getters are only read when it does.
    pub has_code: bool,
    /// Getter name and its value, or the reason it could not be read.
    pub state: Vec<(String, Result<String, String>)>,
}

impl fmt::Display for ContractDetails {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{}",
            format!(
                "account {}, nonce: {}, balance: {}",
                self.caller.debug_lavender(),
                self.nonce,
                format_amt(self.balance)
            )
            .grey()
        )?;
        write!(
            f,
            "{}",
            format!("contract at {}", self.address.debug_lavender()).grey()
        )?;
        if !self.has_code {
            write!(f, "\n  {}", "no contract code at this address".red())?;
        }
        for (name, value) in &self.state {
            match value {
                Ok(value) => write!(f, "\n  {}(): {}", name.grey(), value.mint())?,
                Err(err) => write!(f, "\n  {}(): {}", name.grey(), err.red())?,
            }
        }
        Ok(())
    }
}

/// Reads the contract's public state through its ABI.
pub async fn contract_details(
    caller: Address,
    abi: &JsonAbi,
    address: Address,
    chain: &impl Chain,
) -> Result<ContractDetails, ChainError> {
    let nonce = chain.nonce(caller).await?;
    let balance = chain.balance(caller).await?;
    let has_code = !chain.code_at(address).await?.is_empty();

    let mut state = Vec::new();
    if has_code {
        for function in abi.functions().filter(|function| is_getter(function)) {
            state.push((function.name.clone(), read(function, address, chain).await));
        }
    }

    Ok(ContractDetails {
        caller,
        nonce,
        balance,
        address,
        has_code,
        state,
    })
}

/// Prints [`contract_details`] to the console.
pub async fn print_contract_details(
    caller: Address,
    abi: &JsonAbi,
    address: Address,
    chain: &impl Chain,
) -> Result<ContractDetails, ChainError> {
    let details = contract_details(caller, abi, address, chain).await?;
    println!("{details}");
    Ok(details)
}

fn is_getter(function: &Function) -> bool {
    function.inputs.is_empty()
        && matches!(
            function.state_mutability,
            StateMutability::View | StateMutability::Pure
        )
}

async fn read(function: &Function, address: Address, chain: &impl Chain) -> Result<String, String> {
    let input = function.abi_encode_input(&[]).map_err(|err| err.to_string())?;
    let output = chain
        .call(address, input.into())
        .await
        .map_err(|err| err.to_string())?;
    let values = function
        .abi_decode_output(&output)
        .map_err(|err| format!("could not decode output: {err}"))?;
    Ok(match values.as_slice() {
        [value] => format_value(value),
        values => format!(
            "({})",
            values.iter().map(format_value).collect::<Vec<_>>().join(", ")
        ),
    })
}
