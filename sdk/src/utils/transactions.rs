use base64::{engine::general_purpose, Engine as _};
use log::*;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    message::{v0, VersionedMessage},
    pubkey::Pubkey,
    signature::Signature,
    transaction::VersionedTransaction,
};

use crate::models::{
    errors::StakeTransactionError,
    message::{BlockhashLifetime, TransactionMessage},
};

use super::instructions::{
    get_create_stake_account_instruction, get_delegate_stake_instruction,
    get_initialize_stake_instruction, get_set_compute_unit_limit_instruction,
};

pub struct StakeMessageParams<'a> {
    /// Fee payer, staker and withdrawer of the new stake account
    pub authority: &'a Pubkey,
    pub new_account: &'a Pubkey,
    pub vote_account: &'a Pubkey,
    pub stake_lamports: u64,
    pub lifetime: BlockhashLifetime,
    pub compute_unit_limit: u32,
}

/// Builds the unsigned message that creates a stake account, initializes it and delegates it.
///
/// Instruction order is fixed:
/// 1. SetComputeUnitLimit
/// 2. CreateAccount
/// 3. Initialize
/// 4. DelegateStake
pub fn get_stake_message(params: StakeMessageParams) -> TransactionMessage {
    let StakeMessageParams {
        authority,
        new_account,
        vote_account,
        stake_lamports,
        lifetime,
        compute_unit_limit,
    } = params;

    debug!(
        "Building stake message: authority={authority} new_account={new_account} vote_account={vote_account} lamports={stake_lamports}"
    );

    TransactionMessage::new()
        .set_fee_payer(*authority)
        .set_blockhash_lifetime(lifetime)
        .prepend_instruction(get_set_compute_unit_limit_instruction(
            compute_unit_limit,
        ))
        .append_instruction(get_create_stake_account_instruction(
            authority,
            new_account,
            stake_lamports,
        ))
        .append_instruction(get_initialize_stake_instruction(new_account, authority))
        .append_instruction(get_delegate_stake_instruction(
            new_account,
            vote_account,
            authority,
        ))
}

/// Compiles a finished message into a v0 transaction with every signature left blank.
pub fn compile_transaction(
    message: &TransactionMessage,
) -> Result<VersionedTransaction, StakeTransactionError> {
    let fee_payer = message
        .fee_payer()
        .ok_or(StakeTransactionError::MissingFeePayer)?;
    let lifetime = message
        .lifetime()
        .ok_or(StakeTransactionError::MissingBlockhashLifetime)?;

    let compiled = v0::Message::try_compile(
        fee_payer,
        message.instructions(),
        &[],
        lifetime.blockhash,
    )?;

    let num_signatures = compiled.header.num_required_signatures as usize;
    Ok(VersionedTransaction {
        signatures: vec![Signature::default(); num_signatures],
        message: VersionedMessage::V0(compiled),
    })
}

pub fn get_base64_encoded_wire_transaction(
    transaction: &VersionedTransaction,
) -> Result<String, StakeTransactionError> {
    let bytes = bincode::serialize(transaction)?;
    Ok(general_purpose::STANDARD.encode(bytes))
}

/// Fetches a fresh blockhash lifetime. Called once per generated transaction, never cached.
pub async fn get_latest_blockhash_lifetime(
    client: &RpcClient,
) -> Result<BlockhashLifetime, StakeTransactionError> {
    let (blockhash, last_valid_block_height) = client
        .get_latest_blockhash_with_commitment(CommitmentConfig::confirmed())
        .await?;

    Ok(BlockhashLifetime {
        blockhash,
        last_valid_block_height,
    })
}
