use solana_sdk::{pubkey::Pubkey, sysvar};
use solana_stake_interface::state::StakeStateV2;

/// Highest compute unit limit a single transaction may request.
pub const MAX_COMPUTE_UNIT_LIMIT: u32 = 1_400_000;

/// Legacy stake config account. Still required in `DelegateStake` account lists, never read.
pub const STAKE_CONFIG_ADDRESS: Pubkey =
    Pubkey::from_str_const("StakeConfig11111111111111111111111111111111");

pub fn get_stake_program_address() -> Pubkey {
    solana_stake_interface::program::id()
}

/// Bytes allocated for a new stake account.
pub fn get_stake_account_space() -> u64 {
    StakeStateV2::size_of() as u64
}

pub fn get_rent_sysvar_address() -> Pubkey {
    sysvar::rent::id()
}

pub fn get_clock_sysvar_address() -> Pubkey {
    sysvar::clock::id()
}

pub fn get_stake_history_sysvar_address() -> Pubkey {
    sysvar::stake_history::id()
}
