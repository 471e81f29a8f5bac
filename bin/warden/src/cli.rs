use std::{num::NonZeroU64, path::PathBuf, time::Duration};

use alloy_consensus::Header;
use alloy_primitives::Address;
use clap::{Parser, Subcommand};
use warden_authority::{
    AuthorityOptions, AuthorizationOracle, CallOptions, ProducerAuthority as _,
};
use warden_config::{AuthorityConfig, ChainConfig, NodeConfig};
use warden_validator::{ChainSpec, GasLimitBounds, GasLimitParams, calc_gas_limit};

#[derive(Parser, Debug)]
#[command(name = "warden")]
#[command(about = "Block validation with a permissioned-producer gate")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Suggest the gas limit of the block following a parent.
    GasLimit(GasLimitArgs),
    /// Ask the producer registry whether an address may produce blocks.
    CheckProducer(CheckProducerArgs),
    /// Print the default configuration as TOML.
    DefaultConfig,
}

#[derive(clap::Args, Debug)]
pub(crate) struct GasLimitArgs {
    /// Gas limit of the parent block.
    #[arg(long)]
    pub parent_gas_limit: u64,

    /// Gas used by the parent block.
    #[arg(long)]
    pub parent_gas_used: u64,
}

#[derive(clap::Args, Debug)]
pub(crate) struct CheckProducerArgs {
    /// Producer address to look up.
    #[arg(long)]
    pub address: Address,

    /// Deadline for the registry call, overriding the configured one.
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,
}

impl Cli {
    pub(crate) fn run(self) -> eyre::Result<()> {
        match &self.command {
            Commands::GasLimit(args) => self.run_gas_limit(args),
            Commands::CheckProducer(args) => self.run_check_producer(args),
            Commands::DefaultConfig => {
                print!("{}", NodeConfig::default().to_toml()?);
                Ok(())
            }
        }
    }

    fn load_config(&self) -> eyre::Result<NodeConfig> {
        let config = NodeConfig::load(self.config.as_deref())?;
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    fn run_gas_limit(&self, args: &GasLimitArgs) -> eyre::Result<()> {
        let spec = chain_spec(&self.load_config()?.chain)?;
        let parent = Header {
            gas_limit: args.parent_gas_limit,
            gas_used: args.parent_gas_used,
            ..Default::default()
        };

        let gas_limit = calc_gas_limit(&parent, &spec.gas_limit);
        let bounds = GasLimitBounds::from_parent(parent.gas_limit, &spec.gas_limit);
        tracing::debug!(chain_id = spec.chain_id, gas_limit, ?bounds, "Computed gas limit");

        println!("gas_limit = {gas_limit}");
        println!("bounds = [{}, {}]", bounds.min, bounds.max);
        Ok(())
    }

    fn run_check_producer(&self, args: &CheckProducerArgs) -> eyre::Result<()> {
        let config = self.load_config()?.authority;
        let options = CallOptions {
            timeout: args.timeout_ms.or(config.call_timeout_ms).map(Duration::from_millis),
        };
        let oracle = oracle(&config)?;

        tracing::info!(
            producer = %args.address,
            endpoint = %config.endpoint,
            registry = %config.registry_address,
            "Querying producer registry"
        );

        let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        let answer = rt.block_on(oracle.is_authorized(args.address, options))?;

        println!("producer = {}", args.address);
        println!("authorized = {}", answer.authorized);
        println!("response = {}", answer.response);
        Ok(())
    }
}

/// Build the runtime chain spec from its configuration section.
pub(crate) fn chain_spec(config: &ChainConfig) -> eyre::Result<ChainSpec> {
    let bound_divisor = NonZeroU64::new(config.gas_limit_bound_divisor)
        .ok_or_else(|| eyre::eyre!("gas limit bound divisor must be non-zero"))?;
    let params = GasLimitParams {
        bound_divisor,
        min_gas_limit: config.min_gas_limit,
        target_gas_limit: config.target_gas_limit,
    };
    Ok(ChainSpec::new(config.chain_id)
        .with_eip158_block(config.eip158_block)
        .with_gas_limit_params(params))
}

/// Connect the registry oracle described by `config`.
pub(crate) fn oracle(config: &AuthorityConfig) -> eyre::Result<AuthorizationOracle> {
    let options = AuthorityOptions::new(config.registry_address, config.caller_address);
    let oracle = AuthorizationOracle::connect(
        config.endpoint.clone(),
        Duration::from_millis(config.request_timeout_ms),
        options,
    )?;
    Ok(oracle)
}
