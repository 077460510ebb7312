// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploys `OpAliERC20v2`, the ALI token on OP Stack L2 networks.
//!
//! The token is minted and burnt by the L2 standard bridge on behalf of the ALI token on L1,
//! so it is constructed with the bridge address and the address of the remote (L1) token.

use alloy::dyn_abi::DynSolValue;

use super::{Environment, ScriptError};
use crate::{
    core::{
        accounts::{select_deployer, OP_STANDARD_BRIDGE},
        chain::Chain,
        deployment::{self, DeployOptions, DeployResult},
        details::print_contract_details,
        network::{AllowList, HARDHAT, LOCALHOST},
    },
    utils::{color::DebugColor, format_amt},
};

pub const SCRIPT: &str = "deploy-OpAliERC20v2";
pub const TAGS: &[&str] = &["OpAliERC20v2", "v2_8", "deploy", "L2", "l2"];

pub const CONTRACT: &str = "OpAliERC20v2";

/// Role of the L1 ALI token the L2 token is bridged from.
pub const REMOTE_TOKEN: &str = "RemoteAliERC20v2";

/// L2 networks only.
pub const SUPPORTED_NETWORKS: AllowList = AllowList::new(&[
    "base_mainnet",
    "base_goerli",
    "opBnb",
    "opBnb_testnet",
    LOCALHOST,
    HARDHAT,
]);

pub async fn run<C: Chain>(env: &mut Environment<C>) -> Result<DeployResult, ScriptError> {
    let chain_id = env.chain.chain_id().await?;
    let accounts = env.chain.accounts().await?;
    let deployer = select_deployer(&env.network, &accounts)?;
    let nonce = env.chain.nonce(deployer).await?;
    let balance = env.chain.balance(deployer).await?;

    info!(@grey, "script: {}", SCRIPT.debug_lavender());
    info!(@grey, "network {} {}", chain_id, env.network.name.debug_lavender());
    info!(@grey,
        "accounts: {}, service account {}, nonce: {}, balance: {}",
        accounts.len(),
        deployer.debug_lavender(),
        nonce,
        format_amt(balance)
    );

    SUPPORTED_NETWORKS.check(&env.network.name)?;
    env.network.check_chain_id(chain_id)?;
    env.deployments.check_chain_id(chain_id)?;

    let bridge_address = env
        .named_accounts
        .resolve(OP_STANDARD_BRIDGE, &env.network, &accounts)?;
    let remote_token = env
        .named_accounts
        .resolve(REMOTE_TOKEN, &env.network, &accounts)?;
    debug!(@grey, "bridge: {}, remote token: {}", bridge_address, remote_token);

    let options = DeployOptions::builder()
        .from(deployer)
        .contract(CONTRACT)
        .args(vec![
            DynSolValue::Address(bridge_address),
            DynSolValue::Address(remote_token),
        ])
        .skip_if_already_deployed(true)
        .log(true)
        .build();
    let result = deployment::deploy(
        CONTRACT,
        options,
        &env.artifacts,
        &mut env.deployments,
        &env.chain,
    )
    .await?;

    let record = env.deployments.require(CONTRACT)?;
    print_contract_details(deployer, &record.abi, record.address, &env.chain).await?;

    Ok(result)
}
