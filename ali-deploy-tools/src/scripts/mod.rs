// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploy scripts.
//!
//! A script acts on one contract and carries tags naming what it deploys. Scripts are selected
//! by tag, so `--tags OpAliERC20v2` runs only the scripts for that contract.

use crate::core::{
    accounts::{select_deployer, AccountError, NamedAccounts},
    artifact::Artifacts,
    chain::{Chain, ChainError},
    deployment::{DeployResult, DeploymentError},
    details::{contract_details, ContractDetails},
    network::{Network, NetworkError},
    store::{DeploymentRecord, DeploymentStore, StoreError},
};

pub mod op_ali_erc20v2;

/// Everything a deploy script runs against.
pub struct Environment<C> {
    pub network: Network,
    pub chain: C,
    pub named_accounts: NamedAccounts,
    pub artifacts: Artifacts,
    pub deployments: DeploymentStore,
}

impl<C: Chain> Environment<C> {
    /// Reads the contract recorded under `name`, as seen by the account deployments are sent
    /// from.
    pub async fn deployment_details(
        &self,
        name: &str,
    ) -> Result<(&DeploymentRecord, ContractDetails), ScriptError> {
        let record = self.deployments.require(name)?;
        let accounts = self.chain.accounts().await?;
        let caller = select_deployer(&self.network, &accounts)?;
        let details = contract_details(caller, &record.abi, record.address, &self.chain).await?;
        Ok((record, details))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Script {
    OpAliErc20v2,
}

impl Script {
    pub const ALL: &'static [Script] = &[Script::OpAliErc20v2];

    pub fn name(&self) -> &'static str {
        match self {
            Self::OpAliErc20v2 => op_ali_erc20v2::SCRIPT,
        }
    }

    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            Self::OpAliErc20v2 => op_ali_erc20v2::TAGS,
        }
    }

    /// Whether the script carries any of `tags`. No tags selects every script.
    pub fn matches<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.is_empty()
            || tags
                .iter()
                .any(|tag| self.tags().iter().any(|own| *own == tag.as_ref()))
    }

    /// Scripts selected by `tags`, in execution order.
    pub fn select<S: AsRef<str>>(tags: &[S]) -> Vec<Script> {
        Self::ALL
            .iter()
            .copied()
            .filter(|script| script.matches(tags))
            .collect()
    }

    pub async fn run<C: Chain>(
        &self,
        env: &mut Environment<C>,
    ) -> Result<DeployResult, ScriptError> {
        match self {
            Self::OpAliErc20v2 => op_ali_erc20v2::run(env).await,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("{0}")]
    Account(#[from] AccountError),
    #[error("{0}")]
    Chain(#[from] ChainError),
    #[error("{0}")]
    Deployment(#[from] DeploymentError),
    #[error("{0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::artifact::Artifact,
        testing::{MockChain, TOKEN_ARTIFACT},
    };
    use alloy::{
        dyn_abi::DynSolValue,
        primitives::{Address, Bytes},
    };

    const TOKEN: Address = Address::repeat_byte(0xcc);

    fn environment(network: &str, chain: MockChain) -> Environment<MockChain> {
        let network = Network::builtin(network).unwrap();
        let mut deployments = DeploymentStore::in_memory(&network.name);
        deployments
            .save(
                op_ali_erc20v2::CONTRACT,
                DeploymentRecord {
                    address: TOKEN,
                    abi: Artifact::from_json(TOKEN_ARTIFACT).unwrap().abi,
                    transaction_hash: None,
                    receipt: None,
                    args: Vec::new(),
                    num_deployments: 1,
                    bytecode: Bytes::new(),
                    deployed_bytecode: Bytes::new(),
                },
            )
            .unwrap();
        Environment {
            network,
            chain,
            named_accounts: NamedAccounts::new(),
            artifacts: Artifacts::new("artifacts"),
            deployments,
        }
    }

    #[tokio::test]
    async fn reads_recorded_deployment() {
        let chain = MockChain::new(vec![Address::repeat_byte(0xa0), Address::repeat_byte(0xa1)]);
        chain.set_code(TOKEN, Bytes::from_static(&[0x60, 0x80]));
        let abi = Artifact::from_json(TOKEN_ARTIFACT).unwrap().abi;
        let symbol = abi.function("symbol").unwrap()[0].clone();
        chain.respond(
            TOKEN,
            symbol.selector().to_vec(),
            DynSolValue::Tuple(vec![DynSolValue::String("ALI".to_owned())]).abi_encode_params(),
        );
        let env = environment("hardhat", chain);

        let (record, details) = env
            .deployment_details(op_ali_erc20v2::CONTRACT)
            .await
            .unwrap();
        assert_eq!(record.address, TOKEN);
        assert_eq!(details.caller, Address::repeat_byte(0xa1));
        assert!(details
            .state
            .contains(&("symbol".to_owned(), Ok("ALI".to_owned()))));
    }

    #[tokio::test]
    async fn unrecorded_deployment_is_an_error() {
        let env = environment("localhost", MockChain::new(vec![Address::repeat_byte(0xa0)]));
        let err = env.deployment_details("AliERC20v2").await.unwrap_err();
        assert!(matches!(err, ScriptError::Store(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn missing_caller_is_an_error() {
        let env = environment("localhost", MockChain::new(Vec::new()));
        let err = env
            .deployment_details(op_ali_erc20v2::CONTRACT)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ScriptError::Account(AccountError::NoAccount { index: 0, available: 0 })
        ));
        assert_eq!(env.chain.calls(), 0);
    }

    #[test]
    fn selects_scripts_by_tag() {
        let none: &[&str] = &[];
        assert_eq!(Script::select(none), vec![Script::OpAliErc20v2]);
        assert_eq!(Script::select(&["OpAliERC20v2"]), vec![Script::OpAliErc20v2]);
        assert_eq!(Script::select(&["l1", "v2_8"]), vec![Script::OpAliErc20v2]);
        assert!(Script::select(&["AliERC20v2"]).is_empty());
    }
}
