use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

pub mod error;
pub mod router;

pub type Result<T> = std::result::Result<T, error::ApiError>;

/// Body of `POST /api/v1/stake/generate`.
///
/// `stakeLamports` and `stakerAddress` are kept as raw JSON so that any falsy value (`null`,
/// `false`, `0`, `""`) is reported as a missing parameter before its type is checked.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStakeTransactionRequest {
    pub stake_lamports: Option<Value>,
    pub staker_address: Option<Value>,
    pub new_account_address: Option<String>,
}

impl GenerateStakeTransactionRequest {
    pub fn stake_lamports(&self) -> Result<u64> {
        let value = required(self.stake_lamports.as_ref(), "stakeLamports")?;
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn staker_address(&self) -> Result<String> {
        let value = required(self.staker_address.as_ref(), "stakerAddress")?;
        Ok(serde_json::from_value(value.clone())?)
    }
}

fn required<'a>(value: Option<&'a Value>, name: &'static str) -> Result<&'a Value> {
    value
        .filter(|value| !is_falsy(value))
        .ok_or(ApiError::MissingParameter(name))
}

/// `null`, `false`, `0` and `""` count as absent.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStakeTransactionResponse {
    /// Base64 encoded, unsigned v0 transaction
    pub wire_transaction: String,
}
