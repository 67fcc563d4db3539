use std::{net::SocketAddr, str::FromStr, sync::Arc};

use clap::Parser;
use dotenvy::dotenv;
use solana_program::pubkey::Pubkey;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use stake_delegation_sdk::{
    models::config::{StakeConfig, DEFAULT_EXPLORER_BASE_URL, DEFAULT_VALIDATOR_NAME},
    utils::accounts::MAX_COMPUTE_UNIT_LIMIT,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Bind address for the server
    #[arg(long, env, default_value_t = SocketAddr::from_str("0.0.0.0:7001").unwrap())]
    pub bind_addr: SocketAddr,

    /// RPC url
    #[arg(long, env, default_value = "https://api.mainnet-beta.solana.com")]
    pub json_rpc_url: String,

    /// Vote account new stake accounts are delegated to (Pubkey as base58 string)
    #[arg(long, env)]
    pub validator_vote_address: Pubkey,

    /// Address shown on the validator card, defaults to the vote address
    #[arg(long, env)]
    pub validator_address: Option<Pubkey>,

    /// Validator name shown on the validator card
    #[arg(long, env, default_value = DEFAULT_VALIDATOR_NAME)]
    pub validator_name: String,

    /// Logo shown next to the validator name on the validator card
    #[arg(long, env)]
    pub validator_logo_url: Option<String>,

    /// Explorer page prefix for the validator address
    #[arg(long, env, default_value = DEFAULT_EXPLORER_BASE_URL)]
    pub explorer_base_url: String,

    /// Compute unit limit set on generated transactions
    #[arg(long, env, default_value_t = MAX_COMPUTE_UNIT_LIMIT)]
    pub compute_unit_limit: u32,
}

impl Args {
    fn stake_config(&self) -> StakeConfig {
        StakeConfig {
            validator_vote_address: self.validator_vote_address,
            validator_address: self
                .validator_address
                .unwrap_or(self.validator_vote_address),
            validator_name: self.validator_name.clone(),
            validator_logo_url: self.validator_logo_url.clone(),
            explorer_base_url: self.explorer_base_url.clone(),
            compute_unit_limit: self.compute_unit_limit,
        }
    }
}

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("args: {:?}", args);

    info!("starting server at {}", args.bind_addr);

    let rpc_client = RpcClient::new(args.json_rpc_url.clone());
    info!("started rpc client at {}", args.json_rpc_url);

    let state = Arc::new(stake_delegation_api::router::RouterState {
        stake_config: args.stake_config(),
        rpc_client,
    });

    let app = stake_delegation_api::router::get_routes(state);

    axum::Server::bind(&args.bind_addr)
        .serve(app.into_make_service_with_connect_info::<SocketAddr>())
        .await?;

    Ok(())
}
