// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Access to the chain a deployment targets.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, BlockNumber, Bytes, TxHash, U256},
    providers::{DynProvider, Provider},
    rpc::types::{TransactionReceipt, TransactionRequest},
    transports::TransportError,
};
use serde::{Deserialize, Serialize};

use crate::{
    core::deployment::request::DeploymentRequest,
    utils::{color::DebugColor, format_gas},
};

/// Everything a deployment reads from or sends to the chain.
#[allow(async_fn_in_trait)]
pub trait Chain {
    async fn chain_id(&self) -> Result<u64, ChainError>;

    /// Accounts available for sending transactions.
    async fn accounts(&self) -> Result<Vec<Address>, ChainError>;

    async fn nonce(&self, account: Address) -> Result<u64, ChainError>;

    async fn balance(&self, account: Address) -> Result<U256, ChainError>;

    async fn code_at(&self, address: Address) -> Result<Bytes, ChainError>;

    /// Executes a read-only call against the latest block.
    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, ChainError>;

    /// Sends a contract creation transaction and waits for it to be included.
    async fn deploy(&self, request: DeploymentRequest) -> Result<DeploymentReceipt, ChainError>;
}

/// The parts of a creation receipt kept in deployment records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentReceipt {
    pub from: Address,
    pub contract_address: Address,
    pub transaction_hash: TxHash,
    #[serde(default, deserialize_with = "quantity::deserialize_opt")]
    pub block_number: Option<BlockNumber>,
    #[serde(deserialize_with = "quantity::deserialize")]
    pub gas_used: u64,
}

impl TryFrom<&TransactionReceipt> for DeploymentReceipt {
    type Error = ChainError;

    fn try_from(receipt: &TransactionReceipt) -> Result<Self, Self::Error> {
        let tx_hash = receipt.transaction_hash;
        if !receipt.status() {
            return Err(ChainError::Reverted { tx_hash });
        }
        let contract_address = receipt
            .contract_address
            .ok_or(ChainError::NoContractAddress { tx_hash })?;
        Ok(Self {
            from: receipt.from,
            contract_address,
            transaction_hash: tx_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        })
    }
}

/// Receipt numbers as JSON numbers, decimal strings or hex quantities.
mod quantity {
    use serde::{de::Error, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Quantity {
        Number(u64),
        Text(String),
    }

    fn parse<E: Error>(quantity: Quantity) -> Result<u64, E> {
        match quantity {
            Quantity::Number(number) => Ok(number),
            Quantity::Text(text) => match text.strip_prefix("0x") {
                Some(hex) => u64::from_str_radix(hex, 16),
                None => text.parse(),
            }
            .map_err(E::custom),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        parse(Quantity::deserialize(deserializer)?)
    }

    pub fn deserialize_opt<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        Option::<Quantity>::deserialize(deserializer)?
            .map(parse)
            .transpose()
    }
}

/// [`Chain`] backed by a JSON-RPC provider.
#[derive(Clone)]
pub struct RpcChain {
    provider: DynProvider,
    signers: Vec<Address>,
    max_fee_per_gas_wei: Option<u128>,
}

impl RpcChain {
    /// Wraps a provider. When `signers` is empty the accounts managed by the node are used.
    pub fn new(provider: DynProvider, signers: Vec<Address>) -> Self {
        Self {
            provider,
            signers,
            max_fee_per_gas_wei: None,
        }
    }

    pub fn with_max_fee_per_gas(mut self, max_fee_per_gas_wei: Option<u128>) -> Self {
        self.max_fee_per_gas_wei = max_fee_per_gas_wei;
        self
    }

    /// Creation tx with its gas limit and, when capped, its fees.
    fn deployment_tx(&self, request: &DeploymentRequest, gas: u64) -> TransactionRequest {
        let mut tx = request.tx();
        tx.gas = Some(gas);
        if let Some(max_fee_per_gas) = self.max_fee_per_gas_wei {
            // Gas fillers estimate both fees unless both are set
            tx.max_fee_per_gas = Some(max_fee_per_gas);
            tx.max_priority_fee_per_gas = Some(0);
        }
        tx
    }
}

impl Chain for RpcChain {
    async fn chain_id(&self) -> Result<u64, ChainError> {
        Ok(self.provider.get_chain_id().await?)
    }

    async fn accounts(&self) -> Result<Vec<Address>, ChainError> {
        if !self.signers.is_empty() {
            return Ok(self.signers.clone());
        }
        Ok(self.provider.get_accounts().await?)
    }

    async fn nonce(&self, account: Address) -> Result<u64, ChainError> {
        Ok(self.provider.get_transaction_count(account).await?)
    }

    async fn balance(&self, account: Address) -> Result<U256, ChainError> {
        Ok(self.provider.get_balance(account).await?)
    }

    async fn code_at(&self, address: Address) -> Result<Bytes, ChainError> {
        Ok(self.provider.get_code_at(address).await?)
    }

    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, ChainError> {
        let tx = TransactionRequest::default().with_to(to).with_input(input);
        Ok(self.provider.call(tx).await?)
    }

    async fn deploy(&self, request: DeploymentRequest) -> Result<DeploymentReceipt, ChainError> {
        let gas = self.provider.estimate_gas(request.tx()).await?;
        debug!(@grey, "estimated deployment gas: {}", format_gas(gas));
        let tx = self.deployment_tx(&request, gas);

        let pending = self.provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        debug!(@grey, "sent deploy tx: {}", tx_hash.debug_lavender());

        let receipt = pending
            .get_receipt()
            .await
            .or(Err(ChainError::FailedToComplete { tx_hash }))?;
        DeploymentReceipt::try_from(&receipt)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("rpc error: {0}")]
    Rpc(#[from] TransportError),
    #[error("tx {} failed to complete", .tx_hash.debug_red())]
    FailedToComplete { tx_hash: TxHash },
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("no contract address in receipt of {}", .tx_hash.debug_red())]
    NoContractAddress { tx_hash: TxHash },
}
