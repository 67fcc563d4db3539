use std::{str::FromStr, sync::Arc};

use axum::{body::Bytes, extract::State, response::IntoResponse, Json};
use solana_program::pubkey::Pubkey;
use stake_delegation_sdk::utils::transactions::{
    compile_transaction, get_base64_encoded_wire_transaction, get_latest_blockhash_lifetime,
    get_stake_message, StakeMessageParams,
};
use tracing::info;

use crate::{GenerateStakeTransactionRequest, GenerateStakeTransactionResponse};

use super::RouterState;

/// Builds an unsigned transaction that creates a stake account funded by the staker and
/// delegates it to the configured validator.
///
/// # Returns
/// - `Ok(Json(response))`: `{ "wireTransaction": "<base64>" }`, ready to be signed by the staker
///   and the new stake account.
/// - `400`: `stakeLamports` or `stakerAddress` is missing or falsy (`null`, `false`, `0`, `""`).
/// - `500`: any other failure, including malformed addresses and RPC errors.
///
/// # Example
/// ```text
/// POST /api/v1/stake/generate
/// { "stakeLamports": 1000000000, "stakerAddress": "...", "newAccountAddress": "..." }
/// ```
pub(crate) async fn generate_stake_transaction(
    State(state): State<Arc<RouterState>>,
    body: Bytes,
) -> crate::Result<impl IntoResponse> {
    let request: GenerateStakeTransactionRequest = serde_json::from_slice(&body)?;

    let stake_lamports = request.stake_lamports()?;
    let staker_address = request.staker_address()?;

    let authority = Pubkey::from_str(&staker_address)?;
    let new_account_address = request.new_account_address.unwrap_or_default();
    let new_account = Pubkey::from_str(&new_account_address)?;

    let lifetime = get_latest_blockhash_lifetime(&state.rpc_client).await?;

    let message = get_stake_message(StakeMessageParams {
        authority: &authority,
        new_account: &new_account,
        vote_account: &state.stake_config.validator_vote_address,
        stake_lamports,
        lifetime,
        compute_unit_limit: state.stake_config.compute_unit_limit,
    });

    let transaction = compile_transaction(&message)?;
    let wire_transaction = get_base64_encoded_wire_transaction(&transaction)?;

    info!(
        "Generated stake transaction: staker={authority} stake_account={new_account} lamports={stake_lamports} last_valid_block_height={}",
        lifetime.last_valid_block_height
    );

    Ok(Json(GenerateStakeTransactionResponse { wire_transaction }))
}
