// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment records.
//!
//! Each network has a directory under the deployments root holding one `<Name>.json` record per
//! deployed contract and a `.chainId` file naming the chain the records belong to.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    json_abi::JsonAbi,
    primitives::{Address, Bytes, TxHash},
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{chain::DeploymentReceipt, network::Network};

/// Default root directory of deployment records.
pub const DEPLOYMENTS_DIR: &str = "deployments";

const CHAIN_ID_FILE: &str = ".chainId";

/// A contract deployed under a name on one network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub address: Address,
    pub abi: JsonAbi,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<TxHash>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<DeploymentReceipt>,
    /// Constructor arguments, formatted.
    #[serde(default, deserialize_with = "formatted_args")]
    pub args: Vec<String>,
    #[serde(default = "first_deployment")]
    pub num_deployments: u64,
    #[serde(default)]
    pub bytecode: Bytes,
    #[serde(default)]
    pub deployed_bytecode: Bytes,
}

fn first_deployment() -> u64 {
    1
}

/// Reads arguments written as arbitrary JSON, keeping strings as they are.
fn formatted_args<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let args = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(args
        .into_iter()
        .map(|arg| match arg {
            serde_json::Value::String(arg) => arg,
            arg => arg.to_string(),
        })
        .collect())
}

#[derive(Debug)]
pub struct DeploymentStore {
    network: String,
    /// `None` when records are kept in memory only.
    dir: Option<PathBuf>,
    records: BTreeMap<String, DeploymentRecord>,
}

impl DeploymentStore {
    pub fn in_memory(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            dir: None,
            records: BTreeMap::new(),
        }
    }

    /// Opens the records of `network` under `root`, or an empty in-memory store for networks
    /// that do not save deployments.
    pub fn open(root: impl AsRef<Path>, network: &Network) -> Result<Self, StoreError> {
        if !network.save_deployments {
            return Ok(Self::in_memory(&network.name));
        }

        let dir = root.as_ref().join(&network.name);
        let mut records = BTreeMap::new();
        if dir.is_dir() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                    let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                        continue;
                    };
                    // `.migrations.json` and other bookkeeping files
                    if name.starts_with('.') {
                        continue;
                    }
                    let record = read_record(&path)?;
                    records.insert(name.to_owned(), record);
                }
            }
        }
        debug!(@grey, "loaded {} deployment records for {}", records.len(), network.name);

        Ok(Self {
            network: network.name.clone(),
            dir: Some(dir),
            records,
        })
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Ensures the records belong to the connected chain, claiming the directory for it if it
    /// has no chain yet.
    pub fn check_chain_id(&self, chain_id: u64) -> Result<(), StoreError> {
        let Some(dir) = &self.dir else {
            return Ok(());
        };
        let path = dir.join(CHAIN_ID_FILE);
        if path.is_file() {
            let recorded = fs::read_to_string(&path)?;
            let recorded = recorded.trim();
            if recorded != chain_id.to_string() {
                return Err(StoreError::ChainIdMismatch {
                    network: self.network.clone(),
                    recorded: recorded.to_owned(),
                    actual: chain_id,
                });
            }
            return Ok(());
        }
        fs::create_dir_all(dir)?;
        fs::write(path, chain_id.to_string())?;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&DeploymentRecord> {
        self.records.get(name)
    }

    /// Like [`get`](Self::get), but a missing record is an error.
    pub fn require(&self, name: &str) -> Result<&DeploymentRecord, StoreError> {
        self.get(name).ok_or_else(|| StoreError::NotFound {
            name: name.to_owned(),
            network: self.network.clone(),
        })
    }

    pub fn save(&mut self, name: &str, record: DeploymentRecord) -> Result<(), StoreError> {
        if let Some(dir) = &self.dir {
            fs::create_dir_all(dir)?;
            let path = dir.join(format!("{name}.json"));
            fs::write(&path, serde_json::to_string_pretty(&record)?)?;
            debug!(@grey, "saved deployment record {}", path.display());
        }
        self.records.insert(name.to_owned(), record);
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

fn read_record(path: &Path) -> Result<DeploymentRecord, StoreError> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|source| StoreError::Malformed {
        path: path.to_owned(),
        source,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed deployment record {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("deployments of {network} belong to chain {recorded}, but the node reports chain {actual}")]
    ChainIdMismatch {
        network: String,
        recorded: String,
        actual: u64,
    },
    #[error("no deployment found for {name} on {network}")]
    NotFound { name: String, network: String },
}
