// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for replicable deployments of ALI token contracts to OP Stack L2 networks.
//!
//! Deploy scripts run against an [`Environment`](scripts::Environment): a network, a [`Chain`]
//! to talk to, named accounts, compiled artifacts and the deployment records of that network.
//! Records make deployments replicable: a contract recorded under a name is not deployed again.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod scripts;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::core::chain::{Chain, RpcChain};
pub use error::{Error, Result};
