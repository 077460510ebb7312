// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! In-memory chain and fixtures for unit tests.

use std::{
    cell::RefCell,
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    primitives::{keccak256, Address, Bytes, U256},
    transports::TransportErrorKind,
};
use tempfile::TempDir;

use crate::core::{
    artifact::Artifacts,
    chain::{Chain, ChainError, DeploymentReceipt},
    deployment::request::DeploymentRequest,
    network::LOCAL_CHAIN_ID,
};

/// Hardhat artifact of the L2 token, trimmed to what deployments and details printing read.
pub const TOKEN_ARTIFACT: &str = r#"{
  "_format": "hh-sol-artifact-1",
  "contractName": "OpAliERC20v2",
  "sourceName": "contracts/token/OpAliERC20v2.sol",
  "abi": [
    {
      "inputs": [
        { "internalType": "address", "name": "_bridge", "type": "address" },
        { "internalType": "address", "name": "_remoteToken", "type": "address" }
      ],
      "stateMutability": "nonpayable",
      "type": "constructor"
    },
    {
      "inputs": [],
      "name": "BRIDGE",
      "outputs": [{ "internalType": "address", "name": "", "type": "address" }],
      "stateMutability": "view",
      "type": "function"
    },
    {
      "inputs": [{ "internalType": "address", "name": "owner", "type": "address" }],
      "name": "balanceOf",
      "outputs": [{ "internalType": "uint256", "name": "", "type": "uint256" }],
      "stateMutability": "view",
      "type": "function"
    },
    {
      "inputs": [],
      "name": "decimals",
      "outputs": [{ "internalType": "uint8", "name": "", "type": "uint8" }],
      "stateMutability": "pure",
      "type": "function"
    },
    {
      "inputs": [],
      "name": "symbol",
      "outputs": [{ "internalType": "string", "name": "", "type": "string" }],
      "stateMutability": "view",
      "type": "function"
    },
    {
      "inputs": [],
      "name": "totalSupply",
      "outputs": [{ "internalType": "uint256", "name": "", "type": "uint256" }],
      "stateMutability": "view",
      "type": "function"
    },
    {
      "inputs": [
        { "internalType": "address", "name": "to", "type": "address" },
        { "internalType": "uint256", "name": "value", "type": "uint256" }
      ],
      "name": "transfer",
      "outputs": [{ "internalType": "bool", "name": "", "type": "bool" }],
      "stateMutability": "nonpayable",
      "type": "function"
    }
  ],
  "bytecode": "0x6080604052348015600f57600080fd5b50603f80601d6000396000f3fe6080604052600080fdfea164736f6c6343000811000a",
  "deployedBytecode": "0x6080604052600080fdfea164736f6c6343000811000a",
  "linkReferences": {},
  "deployedLinkReferences": {}
}"#;

/// Writes an artifact the way Hardhat lays them out, returning its path.
pub fn write_artifact(root: &Path, contract: &str, json: &str) -> PathBuf {
    let dir = root.join("contracts").join(format!("{contract}.sol"));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{contract}.json"));
    fs::write(&path, json).unwrap();
    path
}

/// Artifacts directory holding only the token artifact.
pub fn token_artifacts() -> (TempDir, Artifacts) {
    let dir = tempfile::tempdir().unwrap();
    write_artifact(dir.path(), "OpAliERC20v2", TOKEN_ARTIFACT);
    let artifacts = Artifacts::new(dir.path());
    (dir, artifacts)
}

/// Chain that records creation transactions instead of executing them.
pub struct MockChain {
    chain_id: u64,
    accounts: Vec<Address>,
    state: RefCell<MockState>,
}

#[derive(Default)]
struct MockState {
    deployments: Vec<DeploymentRequest>,
    nonces: HashMap<Address, u64>,
    code: HashMap<Address, Bytes>,
    responses: HashMap<(Address, Bytes), Bytes>,
    calls: usize,
}

impl MockChain {
    pub fn new(accounts: Vec<Address>) -> Self {
        Self {
            chain_id: LOCAL_CHAIN_ID,
            accounts,
            state: RefCell::default(),
        }
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Answers calls to `to` with `input` by `output`. Other calls revert.
    pub fn respond(&self, to: Address, input: impl Into<Bytes>, output: impl Into<Bytes>) {
        self.state
            .borrow_mut()
            .responses
            .insert((to, input.into()), output.into());
    }

    pub fn set_code(&self, address: Address, code: impl Into<Bytes>) {
        self.state.borrow_mut().code.insert(address, code.into());
    }

    pub fn deployments(&self) -> Vec<DeploymentRequest> {
        self.state.borrow().deployments.clone()
    }

    pub fn calls(&self) -> usize {
        self.state.borrow().calls
    }
}

impl Chain for MockChain {
    async fn chain_id(&self) -> Result<u64, ChainError> {
        Ok(self.chain_id)
    }

    async fn accounts(&self) -> Result<Vec<Address>, ChainError> {
        Ok(self.accounts.clone())
    }

    async fn nonce(&self, account: Address) -> Result<u64, ChainError> {
        Ok(self
            .state
            .borrow()
            .nonces
            .get(&account)
            .copied()
            .unwrap_or_default())
    }

    async fn balance(&self, _account: Address) -> Result<U256, ChainError> {
        Ok(U256::from(1_000_000_000_000_000_000u64))
    }

    async fn code_at(&self, address: Address) -> Result<Bytes, ChainError> {
        Ok(self
            .state
            .borrow()
            .code
            .get(&address)
            .cloned()
            .unwrap_or_default())
    }

    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, ChainError> {
        let mut state = self.state.borrow_mut();
        state.calls += 1;
        state
            .responses
            .get(&(to, input))
            .cloned()
            .ok_or_else(|| TransportErrorKind::custom_str("execution reverted").into())
    }

    async fn deploy(&self, request: DeploymentRequest) -> Result<DeploymentReceipt, ChainError> {
        let mut state = self.state.borrow_mut();
        let nonce = state.nonces.entry(request.from()).or_default();
        let contract_address = request.from().create(*nonce);
        *nonce += 1;

        let mut preimage = request.code().to_vec();
        preimage.extend_from_slice(contract_address.as_slice());
        let receipt = DeploymentReceipt {
            from: request.from(),
            contract_address,
            transaction_hash: keccak256(preimage),
            block_number: Some(state.deployments.len() as u64 + 1),
            gas_used: 1_500_000,
        };
        state.code.insert(contract_address, request.code().clone());
        state.deployments.push(request);
        Ok(receipt)
    }
}
