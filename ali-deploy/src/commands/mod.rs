// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::AliDeployResult;

mod deploy;
mod show;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Run the deploy scripts selected by tag against a network
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Print the state of a recorded deployment
    Show(show::Args),
}

pub async fn exec(cmd: Command) -> AliDeployResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Show(args) => show::exec(args).await,
    }
}
