// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use ali_deploy_tools::scripts::Script;
use eyre::eyre;

use crate::{
    common_args::{environment, AuthArgs, NetworkArgs, ProjectArgs},
    error::AliDeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Only run scripts carrying one of these tags. Runs every script if omitted.
    #[arg(long, value_delimiter = ',')]
    tags: Vec<String>,

    #[command(flatten)]
    network: NetworkArgs,
    #[command(flatten)]
    project: ProjectArgs,
    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
}

pub async fn exec(args: Args) -> AliDeployResult {
    let scripts = Script::select(args.tags.as_slice());
    if scripts.is_empty() {
        return Err(eyre!("no deploy script is tagged with any of {:?}", args.tags).into());
    }

    let mut env = environment(&args.network, &args.project, &args.auth).await?;
    for script in scripts {
        log::debug!("running {} (tags: {})", script.name(), script.tags().join(", "));
        script.run(&mut env).await?;
    }
    Ok(())
}
