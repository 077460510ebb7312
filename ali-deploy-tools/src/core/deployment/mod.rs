// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Replicable contract deployment.
//!
//! A contract is deployed under a name. Once a record for that name exists on a network the
//! contract is not deployed there again, unless its code or constructor arguments changed and
//! the caller did not ask to skip existing deployments.

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::StateMutability,
    primitives::{Address, U256},
};
use typed_builder::TypedBuilder;

use crate::{
    core::{
        artifact::{Artifact, ArtifactError, Artifacts},
        chain::{Chain, ChainError},
        store::{DeploymentRecord, DeploymentStore, StoreError},
    },
    utils::{color::DebugColor, format_gas, format_value},
};
use request::DeploymentRequest;

pub mod request;

/// How to deploy a contract, see [`deploy`].
#[derive(Debug, TypedBuilder)]
pub struct DeployOptions {
    /// Account that sends the creation transaction.
    from: Address,
    /// Artifact to deploy, if it is named differently from the deployment.
    #[builder(default, setter(into, strip_option))]
    contract: Option<String>,
    #[builder(default)]
    args: Vec<DynSolValue>,
    /// Ether sent to a payable constructor.
    #[builder(default)]
    value: U256,
    /// Reuse any recorded deployment, even one with different code or arguments.
    #[builder(default)]
    skip_if_already_deployed: bool,
    /// Report the deployment outcome at info level.
    #[builder(default)]
    log: bool,
}

#[derive(Clone, Debug)]
pub struct DeployResult {
    pub record: DeploymentRecord,
    /// Whether a creation transaction was sent.
    pub newly_deployed: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("{0}")]
    Chain(#[from] ChainError),
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0} has no creation code (interface or abstract contract?)")]
    NotDeployable(String),
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
}

/// Deploys the contract named `name` unless it is already deployed, recording the deployment.
pub async fn deploy(
    name: &str,
    options: DeployOptions,
    artifacts: &Artifacts,
    store: &mut DeploymentStore,
    chain: &impl Chain,
) -> Result<DeployResult, DeploymentError> {
    let existing = store.get(name).cloned();
    if let Some(record) = &existing {
        if options.skip_if_already_deployed {
            report(options.log, name, record, false);
            return Ok(DeployResult {
                record: record.clone(),
                newly_deployed: false,
            });
        }
    }

    let contract = options.contract.as_deref().unwrap_or(name);
    let artifact = artifacts.load(contract)?;
    if !artifact.is_deployable() {
        return Err(DeploymentError::NotDeployable(contract.to_owned()));
    }
    let encoded_args = encode_constructor_args(&artifact, &options.args, options.value)?;
    let args: Vec<String> = options.args.iter().map(format_value).collect();

    if let Some(record) = &existing {
        if record.bytecode == artifact.bytecode && record.args == args {
            report(options.log, name, record, false);
            return Ok(DeployResult {
                record: record.clone(),
                newly_deployed: false,
            });
        }
        debug!(@grey, "{} changed since it was deployed at {}", name, record.address);
    }

    let request = DeploymentRequest::new(
        options.from,
        &artifact.bytecode,
        &encoded_args,
        options.value,
    );
    let receipt = chain.deploy(request).await?;

    let record = DeploymentRecord {
        address: receipt.contract_address,
        abi: artifact.abi,
        transaction_hash: Some(receipt.transaction_hash),
        num_deployments: existing.map_or(1, |record| record.num_deployments + 1),
        receipt: Some(receipt),
        args,
        bytecode: artifact.bytecode,
        deployed_bytecode: artifact.deployed_bytecode,
    };
    store.save(name, record.clone())?;
    report(options.log, name, &record, true);

    Ok(DeployResult {
        record,
        newly_deployed: true,
    })
}

/// Encodes constructor arguments after checking them against the artifact's constructor.
pub fn encode_constructor_args(
    artifact: &Artifact,
    args: &[DynSolValue],
    value: U256,
) -> Result<Vec<u8>, DeploymentError> {
    let Some(constructor) = &artifact.abi.constructor else {
        if !args.is_empty() {
            return Err(DeploymentError::InvalidConstructor(format!(
                "{} has no constructor, got {} arguments",
                artifact.contract_name,
                args.len()
            )));
        }
        if !value.is_zero() {
            return Err(DeploymentError::InvalidConstructor(
                "attempting to send Ether to non-payable constructor".to_string(),
            ));
        }
        return Ok(Vec::new());
    };

    if constructor.state_mutability != StateMutability::Payable && !value.is_zero() {
        return Err(DeploymentError::InvalidConstructor(
            "attempting to send Ether to non-payable constructor".to_string(),
        ));
    }
    if args.len() != constructor.inputs.len() {
        return Err(DeploymentError::InvalidConstructor(format!(
            "mismatch number of constructor arguments (want {} ({}); got {})",
            constructor
                .inputs
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            constructor.inputs.len(),
            args.len(),
        )));
    }
    for (arg, param) in args.iter().zip(&constructor.inputs) {
        let ty = param.resolve().map_err(|err| {
            DeploymentError::InvalidConstructor(format!("could not resolve {param}: {err}"))
        })?;
        if !ty.matches(arg) {
            return Err(DeploymentError::InvalidConstructor(format!(
                "argument {} does not match {param}",
                format_value(arg)
            )));
        }
    }

    constructor
        .abi_encode_input(args)
        .map_err(|err| DeploymentError::InvalidConstructor(err.to_string()))
}

fn report(log: bool, name: &str, record: &DeploymentRecord, deployed: bool) {
    let gas = record.receipt.as_ref().map(|receipt| receipt.gas_used);
    let msg = match (deployed, record.transaction_hash, gas) {
        (true, Some(tx_hash), Some(gas)) => format!(
            "deployed \"{name}\" (tx: {}) at {} with {}",
            tx_hash.debug_lavender(),
            record.address.debug_lavender(),
            format_gas(gas)
        ),
        (true, ..) => format!("deployed \"{name}\" at {}", record.address.debug_lavender()),
        (false, ..) => format!("reusing \"{name}\" at {}", record.address.debug_lavender()),
    };
    if log {
        info!(@grey, "{}", msg);
    } else {
        debug!(@grey, "{}", msg);
    }
}
