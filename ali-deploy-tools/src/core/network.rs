// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Networks a deployment can target.

use std::fmt;

use crate::utils::color::Color;

/// In-process development network. Its state does not outlive a run, so deployments to it are
/// never written to disk.
pub const HARDHAT: &str = "hardhat";
/// Development node listening on the local machine.
pub const LOCALHOST: &str = "localhost";

/// Endpoint used by development networks.
pub const LOCAL_ENDPOINT: &str = "http://127.0.0.1:8545";
/// Chain id used by development networks.
pub const LOCAL_CHAIN_ID: u64 = 31337;

/// `(name, url, chain id, live)` of every network known without configuration.
const BUILTIN_NETWORKS: &[(&str, &str, u64, bool)] = &[
    ("base_mainnet", "https://mainnet.base.org", 8453, true),
    ("base_goerli", "https://goerli.base.org", 84531, true),
    ("opBnb", "https://opbnb-mainnet-rpc.bnbchain.org", 204, true),
    ("opBnb_testnet", "https://opbnb-testnet-rpc.bnbchain.org", 5611, true),
    (LOCALHOST, LOCAL_ENDPOINT, LOCAL_CHAIN_ID, false),
    (HARDHAT, LOCAL_ENDPOINT, LOCAL_CHAIN_ID, false),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network {
    pub name: String,
    /// JSON-RPC endpoint.
    pub url: String,
    /// Expected chain id, checked against the node when known.
    pub chain_id: Option<u64>,
    /// Whether this is a public network rather than a development node.
    pub live: bool,
    /// Whether deployment records are persisted for this network.
    pub save_deployments: bool,
}

impl Network {
    pub fn builtin(name: &str) -> Option<Self> {
        BUILTIN_NETWORKS
            .iter()
            .find(|(builtin, ..)| *builtin == name)
            .map(|&(name, url, chain_id, live)| Self {
                name: name.to_owned(),
                url: url.to_owned(),
                chain_id: Some(chain_id),
                live,
                save_deployments: name != HARDHAT,
            })
    }

    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_NETWORKS.iter().map(|(name, ..)| *name)
    }

    pub fn is_hardhat(&self) -> bool {
        self.name == HARDHAT
    }

    /// Checks the chain id reported by the node against the expected one.
    pub fn check_chain_id(&self, actual: u64) -> Result<(), NetworkError> {
        match self.chain_id {
            Some(expected) if expected != actual => Err(NetworkError::ChainIdMismatch {
                network: self.name.clone(),
                expected,
                actual,
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Fixed set of network names a deploy script may run against.
#[derive(Clone, Copy, Debug)]
pub struct AllowList(&'static [&'static str]);

impl AllowList {
    pub const fn new(networks: &'static [&'static str]) -> Self {
        Self(networks)
    }

    pub fn contains(&self, network: &str) -> bool {
        self.0.iter().any(|allowed| *allowed == network)
    }

    pub fn check(&self, network: &str) -> Result<(), NetworkError> {
        if self.contains(network) {
            Ok(())
        } else {
            Err(NetworkError::Unsupported(network.to_owned()))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.0.iter().copied()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("unsupported network: {}", .0.red())]
    Unsupported(String),
    #[error(
        "network {network} expects chain id {expected}, but the node reports {}",
        .actual.red()
    )]
    ChainIdMismatch {
        network: String,
        expected: u64,
        actual: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    const L2: AllowList = AllowList::new(&["base_goerli", "hardhat"]);

    #[test]
    fn builtin_networks() {
        let hardhat = Network::builtin(HARDHAT).unwrap();
        assert!(hardhat.is_hardhat());
        assert!(!hardhat.save_deployments);
        assert!(!hardhat.live);

        let opbnb = Network::builtin("opBnb").unwrap();
        assert_eq!(opbnb.chain_id, Some(204));
        assert!(opbnb.save_deployments);
        assert!(opbnb.live);

        assert!(Network::builtin("mainnet").is_none());
        assert_eq!(Network::builtin_names().count(), 6);
    }

    #[test]
    fn allow_list() {
        assert!(L2.check("base_goerli").is_ok());
        assert!(L2.check("hardhat").is_ok());
        let err = L2.check("mainnet").unwrap_err();
        assert!(matches!(&err, NetworkError::Unsupported(name) if name == "mainnet"));
        assert!(err.to_string().starts_with("unsupported network: "));
        assert!(err.to_string().contains("mainnet"));
    }

    #[test]
    fn chain_id_check() {
        let network = Network::builtin("base_goerli").unwrap();
        assert!(network.check_chain_id(84531).is_ok());
        assert!(matches!(
            network.check_chain_id(1),
            Err(NetworkError::ChainIdMismatch { expected: 84531, actual: 1, .. })
        ));

        let unpinned = Network {
            chain_id: None,
            ..network
        };
        assert!(unpinned.check_chain_id(1).is_ok());
    }
}
