// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use ali_deploy_tools::{
    core::{
        accounts::AccountError, chain::ChainError, config::ConfigError,
        deployment::DeploymentError, network::NetworkError, store::StoreError,
    },
    scripts::ScriptError,
};

pub type AliDeployResult = Result<(), AliDeployError>;

#[derive(Debug)]
pub struct AliDeployError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl AliDeployError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for AliDeployError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for AliDeployError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for AliDeployError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<ali_deploy_tools::Error> for AliDeployError {
    fn from(err: ali_deploy_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

macro_rules! from_tools_error {
    ($($err:ty),* $(,)?) => {
        $(
            impl From<$err> for AliDeployError {
                fn from(err: $err) -> Self {
                    ali_deploy_tools::Error::from(err).into()
                }
            }
        )*
    };
}

from_tools_error!(
    AccountError,
    ChainError,
    ConfigError,
    DeploymentError,
    NetworkError,
    ScriptError,
    StoreError,
);
