use solana_rpc_client_api::client_error::Error as ClientError;
use solana_sdk::message::CompileError;

use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum StakeTransactionError {
    #[error("Transaction message has no fee payer")]
    MissingFeePayer,
    #[error("Transaction message has no blockhash lifetime")]
    MissingBlockhashLifetime,
    #[error(transparent)]
    CompileError(#[from] CompileError),
    #[error("Failed to serialize transaction: {0}")]
    SerializeError(#[from] bincode::Error),
    #[error(transparent)]
    ClientError(#[from] ClientError),
}
