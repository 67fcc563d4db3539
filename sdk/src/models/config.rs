use solana_sdk::pubkey::Pubkey;

use crate::utils::accounts::MAX_COMPUTE_UNIT_LIMIT;

pub const DEFAULT_VALIDATOR_NAME: &str = "ZeroVentures";
pub const DEFAULT_EXPLORER_BASE_URL: &str = "https://stakewiz.com/validator";

/// Process-wide staking settings, built once at start-up and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeConfig {
    /// Vote account every generated stake account is delegated to
    pub validator_vote_address: Pubkey,
    /// Address shown and linked on the validator card
    pub validator_address: Pubkey,
    /// Display name shown on the validator card
    pub validator_name: String,
    /// Logo shown next to the validator name, if any
    pub validator_logo_url: Option<String>,
    /// Validator pages are linked as `{explorer_base_url}/{validator_address}`
    pub explorer_base_url: String,
    /// Compute unit ceiling set on every generated transaction
    pub compute_unit_limit: u32,
}

impl StakeConfig {
    /// Config that delegates to and displays `validator_vote_address`.
    pub fn new(validator_vote_address: Pubkey) -> Self {
        Self {
            validator_vote_address,
            validator_address: validator_vote_address,
            validator_name: DEFAULT_VALIDATOR_NAME.to_string(),
            validator_logo_url: None,
            explorer_base_url: DEFAULT_EXPLORER_BASE_URL.to_string(),
            compute_unit_limit: MAX_COMPUTE_UNIT_LIMIT,
        }
    }
}
