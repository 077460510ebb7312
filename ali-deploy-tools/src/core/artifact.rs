// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts in the Hardhat JSON format.

use std::{fs, path::PathBuf};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;

/// Default directory compiled artifacts are written to.
pub const ARTIFACTS_DIR: &str = "artifacts";

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    /// Creation code, without constructor arguments.
    pub bytecode: Bytes,
    #[serde(default)]
    pub deployed_bytecode: Bytes,
}

impl Artifact {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Interfaces and abstract contracts compile to empty creation code.
    pub fn is_deployable(&self) -> bool {
        !self.bytecode.is_empty()
    }
}

/// Artifacts found under a root directory, looked up by contract name.
#[derive(Clone, Debug)]
pub struct Artifacts {
    root: PathBuf,
}

impl Artifacts {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Finds the single artifact file named `<contract>.json`.
    pub fn find(&self, contract: &str) -> Result<PathBuf, ArtifactError> {
        let pattern = self.root.join("**").join(format!("{contract}.json"));
        let mut matches = glob::glob(&pattern.to_string_lossy())?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| ArtifactError::Io(err.into_error()))?;
        match matches.len() {
            0 => Err(ArtifactError::NotFound {
                contract: contract.to_owned(),
                root: self.root.clone(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(ArtifactError::Ambiguous {
                contract: contract.to_owned(),
                paths: matches,
            }),
        }
    }

    pub fn load(&self, contract: &str) -> Result<Artifact, ArtifactError> {
        let path = self.find(contract)?;
        debug!(@grey, "reading artifact {}", path.display());
        let json = fs::read_to_string(&path)?;
        Artifact::from_json(&json).map_err(|source| ArtifactError::Malformed { path, source })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid artifact pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("no artifact for {contract} under {}", .root.display())]
    NotFound { contract: String, root: PathBuf },
    #[error("several artifacts for {contract}: {paths:?}")]
    Ambiguous { contract: String, paths: Vec<PathBuf> },
    #[error("malformed artifact {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{write_artifact, TOKEN_ARTIFACT};

    #[test]
    fn parses_hardhat_artifact() {
        let artifact = Artifact::from_json(TOKEN_ARTIFACT).unwrap();
        assert_eq!(artifact.contract_name, "OpAliERC20v2");
        assert!(artifact.is_deployable());
        let constructor = artifact.abi.constructor.as_ref().unwrap();
        assert_eq!(constructor.inputs.len(), 2);
        assert!(artifact.abi.function("symbol").is_some());
    }

    #[test]
    fn finds_artifacts_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(dir.path(), "OpAliERC20v2", TOKEN_ARTIFACT);
        fs::write(
            path.with_file_name("OpAliERC20v2.dbg.json"),
            r#"{"_format":"hh-sol-dbg-1"}"#,
        )
        .unwrap();

        let artifacts = Artifacts::new(dir.path());
        assert_eq!(artifacts.find("OpAliERC20v2").unwrap(), path);
        assert_eq!(
            artifacts.load("OpAliERC20v2").unwrap().contract_name,
            "OpAliERC20v2"
        );
        assert!(matches!(
            artifacts.find("AliERC20v2"),
            Err(ArtifactError::NotFound { .. })
        ));
    }

    #[test]
    fn rejects_ambiguous_names() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "OpAliERC20v2", TOKEN_ARTIFACT);
        let other = dir.path().join("contracts/mocks/OpAliERC20v2.sol");
        fs::create_dir_all(&other).unwrap();
        fs::write(other.join("OpAliERC20v2.json"), TOKEN_ARTIFACT).unwrap();

        let artifacts = Artifacts::new(dir.path());
        assert!(matches!(
            artifacts.find("OpAliERC20v2"),
            Err(ArtifactError::Ambiguous { paths, .. }) if paths.len() == 2
        ));
    }

    #[test]
    fn reports_malformed_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "Broken", r#"{"contractName": "Broken"}"#);
        assert!(matches!(
            Artifacts::new(dir.path()).load("Broken"),
            Err(ArtifactError::Malformed { .. })
        ));
    }
}
