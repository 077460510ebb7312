// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    common_args::{environment, AuthArgs, NetworkArgs, ProjectArgs},
    error::AliDeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name the contract was deployed under.
    name: String,

    #[command(flatten)]
    network: NetworkArgs,
    #[command(flatten)]
    project: ProjectArgs,
    #[command(flatten)]
    auth: AuthArgs,
}

pub async fn exec(args: Args) -> AliDeployResult {
    let env = environment(&args.network, &args.project, &args.auth).await?;
    let (record, details) = env.deployment_details(&args.name).await?;
    println!("{details}");

    if let Some(tx_hash) = record.transaction_hash {
        log::info!("deployed in tx {tx_hash} ({} deployments)", record.num_deployments);
    }
    Ok(())
}
