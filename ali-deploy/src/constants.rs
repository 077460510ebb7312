// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use ali_deploy_tools::core::{
    artifact::ARTIFACTS_DIR, config::CONFIG_FILE, store::DEPLOYMENTS_DIR,
};

/// Local accounts derived from a mnemonic when no count is given.
///
/// Deployments to `hardhat` use the second account.
pub const DEFAULT_MNEMONIC_ACCOUNTS: u32 = 2;
