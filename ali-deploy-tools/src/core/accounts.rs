// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployer selection and named accounts.
//!
//! A named account maps a role, such as the bridge a token is minted by, to an address on each
//! network. Values may also be an index into the account list of the network, which is how
//! development networks usually refer to their funded accounts.

use std::collections::BTreeMap;

use alloy::primitives::{address, Address};
use serde::Deserialize;

use crate::core::network::Network;

/// Role of the OP Stack standard bridge on L2.
pub const OP_STANDARD_BRIDGE: &str = "opStandardBridge";

/// Address of the `L2StandardBridge` predeploy, identical on every OP Stack chain.
pub const L2_STANDARD_BRIDGE_PREDEPLOY: Address =
    address!("4200000000000000000000000000000000000010");

/// Key of the value used on networks without a value of their own.
pub const DEFAULT_KEY: &str = "default";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NamedAccount {
    Index(usize),
    Address(Address),
}

impl NamedAccount {
    pub fn resolve(&self, accounts: &[Address]) -> Result<Address, AccountError> {
        match *self {
            Self::Address(address) => Ok(address),
            Self::Index(index) => account_at(accounts, index),
        }
    }
}

impl From<Address> for NamedAccount {
    fn from(address: Address) -> Self {
        Self::Address(address)
    }
}

/// Named accounts by role, then by network name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct NamedAccounts(BTreeMap<String, BTreeMap<String, NamedAccount>>);

impl NamedAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the well-known roles that were not configured explicitly.
    pub fn with_defaults(mut self) -> Self {
        self.0
            .entry(OP_STANDARD_BRIDGE.to_owned())
            .or_default()
            .entry(DEFAULT_KEY.to_owned())
            .or_insert(NamedAccount::Address(L2_STANDARD_BRIDGE_PREDEPLOY));
        self
    }

    pub fn insert(
        &mut self,
        role: impl Into<String>,
        network: impl Into<String>,
        account: impl Into<NamedAccount>,
    ) {
        self.0
            .entry(role.into())
            .or_default()
            .insert(network.into(), account.into());
    }

    /// Value of `role` on `network`, falling back to the role's default.
    pub fn get(&self, role: &str, network: &str) -> Option<NamedAccount> {
        let values = self.0.get(role)?;
        values
            .get(network)
            .or_else(|| values.get(DEFAULT_KEY))
            .copied()
    }

    pub fn resolve(
        &self,
        role: &str,
        network: &Network,
        accounts: &[Address],
    ) -> Result<Address, AccountError> {
        self.get(role, &network.name)
            .ok_or_else(|| AccountError::MissingNamedAccount {
                role: role.to_owned(),
                network: network.name.clone(),
            })?
            .resolve(accounts)
    }
}

/// Picks the account that sends deployment transactions.
///
/// The first account of the in-process `hardhat` network is the default sender of every test
/// transaction, so deployments there use the second one.
pub fn select_deployer(network: &Network, accounts: &[Address]) -> Result<Address, AccountError> {
    let index = if network.is_hardhat() { 1 } else { 0 };
    account_at(accounts, index)
}

fn account_at(accounts: &[Address], index: usize) -> Result<Address, AccountError> {
    accounts
        .get(index)
        .copied()
        .ok_or(AccountError::NoAccount {
            index,
            available: accounts.len(),
        })
}

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("named account {role} is not configured for network {network}")]
    MissingNamedAccount { role: String, network: String },
    #[error("no account at index {index} ({available} accounts available)")]
    NoAccount { index: usize, available: usize },
}
