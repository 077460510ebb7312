// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::{Address, FixedBytes},
    providers::{Provider, ProviderBuilder},
    signers::{
        local::{coins_bip39::English, LocalSigner, MnemonicBuilder, PrivateKeySigner},
        Signer,
    },
};
use ali_deploy_tools::{
    core::{
        artifact::Artifacts,
        config::DeployConfig,
        network::Network,
        store::DeploymentStore,
    },
    scripts::Environment,
    RpcChain,
};
use eyre::{eyre, Context};

use crate::{
    constants::{ARTIFACTS_DIR, CONFIG_FILE, DEFAULT_MNEMONIC_ACCOUNTS, DEPLOYMENTS_DIR},
    utils::{convert_gwei_to_wei, decode0x},
};

/// Wallet source. Without one, transactions are signed by the accounts the node manages.
#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
    /// BIP-39 mnemonic to derive accounts from. Warning: this exposes it to shell history
    #[arg(long, env = "MNEMONIC", hide_env_values = true)]
    mnemonic: Option<String>,
    /// Number of accounts derived from the mnemonic
    #[arg(long, default_value_t = DEFAULT_MNEMONIC_ACCOUNTS)]
    accounts_count: u32,
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
}

impl AuthArgs {
    /// Local signers in account order, empty when no wallet source is given.
    fn build_signers(&self, chain_id: u64) -> eyre::Result<Vec<PrivateKeySigner>> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return Ok(vec![signer_from_hex(key, chain_id)?]);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return Ok(vec![signer_from_hex(key, chain_id)?]);
        }

        if let Some(keystore) = &self.keystore_path {
            let password = self
                .keystore_password_path
                .as_ref()
                .map(fs::read_to_string)
                .unwrap_or(Ok("".into()))?;
            let signer =
                LocalSigner::decrypt_keystore(keystore, password)?.with_chain_id(Some(chain_id));
            return Ok(vec![signer]);
        }

        if let Some(phrase) = &self.mnemonic {
            return (0..self.accounts_count)
                .map(|index| -> eyre::Result<PrivateKeySigner> {
                    let signer = MnemonicBuilder::<English>::default()
                        .phrase(phrase.as_str())
                        .index(index)?
                        .build()?;
                    Ok(signer.with_chain_id(Some(chain_id)))
                })
                .collect();
        }

        Ok(Vec::new())
    }

    pub fn get_max_fee_per_gas_wei(&self) -> eyre::Result<Option<u128>> {
        self.max_fee_per_gas_gwei
            .as_ref()
            .map(|fee_str| convert_gwei_to_wei(fee_str))
            .transpose()
    }
}

fn signer_from_hex(key: impl AsRef<str>, chain_id: u64) -> eyre::Result<PrivateKeySigner> {
    let priv_key_bytes: FixedBytes<32> = FixedBytes::try_from(decode0x(key)?.as_slice())
        .map_err(|_| eyre!("private key must be 32 bytes"))?;
    Ok(PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id)))
}

/// Public nodes of live networks manage no accounts.
fn check_wallet(network: &Network, signers: &[PrivateKeySigner]) -> eyre::Result<()> {
    if network.live && signers.is_empty() {
        return Err(eyre!(
            "no wallet given for live network {}, use --private-key, --private-key-path, --keystore-path or --mnemonic",
            network.name
        ));
    }
    Ok(())
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Network to deploy to, e.g. base_goerli
    #[arg(long)]
    pub network: String,
    /// RPC endpoint, overriding the one configured for the network
    #[arg(short, long)]
    pub endpoint: Option<String>,
}

impl NetworkArgs {
    pub fn network(&self, config: &DeployConfig) -> eyre::Result<Network> {
        let mut network = config.network(&self.network)?;
        if let Some(endpoint) = &self.endpoint {
            network.url = endpoint.clone();
        }
        Ok(network)
    }

    pub async fn build_chain(&self, network: &Network, auth: &AuthArgs) -> eyre::Result<RpcChain> {
        let provider = ProviderBuilder::new()
            .connect(&network.url)
            .await
            .wrap_err_with(|| format!("could not connect to {} at {}", network, network.url))?;
        let chain_id = provider.get_chain_id().await?;

        let signers = auth.build_signers(chain_id)?;
        check_wallet(network, &signers)?;
        let addresses: Vec<Address> = signers.iter().map(|signer| signer.address()).collect();
        let mut signers = signers.into_iter();
        let provider = match signers.next() {
            Some(first) => {
                let mut wallet = EthereumWallet::new(first);
                for signer in signers {
                    wallet.register_signer(signer);
                }
                ProviderBuilder::new()
                    .wallet(wallet)
                    .connect(&network.url)
                    .await?
                    .erased()
            }
            None => provider.erased(),
        };

        Ok(RpcChain::new(provider, addresses)
            .with_max_fee_per_gas(auth.get_max_fee_per_gas_wei()?))
    }
}

#[derive(Debug, clap::Args)]
pub struct ProjectArgs {
    /// Deployment configuration file
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,
    /// Directory of compiled contract artifacts
    #[arg(long, default_value = ARTIFACTS_DIR)]
    artifacts: PathBuf,
    /// Directory of deployment records
    #[arg(long, default_value = DEPLOYMENTS_DIR)]
    deployments: PathBuf,
}

impl ProjectArgs {
    pub fn config(&self) -> eyre::Result<DeployConfig> {
        Ok(DeployConfig::load(&self.config)?)
    }

    pub fn artifacts(&self) -> Artifacts {
        Artifacts::new(&self.artifacts)
    }

    pub fn deployments(&self, network: &Network) -> eyre::Result<DeploymentStore> {
        Ok(DeploymentStore::open(&self.deployments, network)?)
    }
}

/// Connects to the network and gathers what deploy scripts run against.
pub async fn environment(
    network_args: &NetworkArgs,
    project: &ProjectArgs,
    auth: &AuthArgs,
) -> eyre::Result<Environment<RpcChain>> {
    let config = project.config()?;
    let network = network_args.network(&config)?;
    let chain = network_args.build_chain(&network, auth).await?;
    Ok(Environment {
        deployments: project.deployments(&network)?,
        artifacts: project.artifacts(),
        named_accounts: config.named_accounts(),
        network,
        chain,
    })
}
