use solana_sdk::{
    compute_budget::ComputeBudgetInstruction, instruction::Instruction, pubkey::Pubkey,
};
use solana_stake_interface::{
    instruction as stake_instruction,
    state::{Authorized, Lockup},
};
use solana_system_interface::instruction as system_instruction;

use super::accounts::{get_stake_account_space, get_stake_program_address};

pub fn get_set_compute_unit_limit_instruction(units: u32) -> Instruction {
    ComputeBudgetInstruction::set_compute_unit_limit(units)
}

/// Creates `new_account` funded with `lamports`, sized for a stake account and owned by the
/// stake program. Both `payer` and `new_account` must sign.
pub fn get_create_stake_account_instruction(
    payer: &Pubkey,
    new_account: &Pubkey,
    lamports: u64,
) -> Instruction {
    system_instruction::create_account(
        payer,
        new_account,
        lamports,
        get_stake_account_space(),
        &get_stake_program_address(),
    )
}

/// Initializes a stake account with `authority` as both staker and withdrawer and no lockup.
pub fn get_initialize_stake_instruction(stake_account: &Pubkey, authority: &Pubkey) -> Instruction {
    stake_instruction::initialize(
        stake_account,
        &Authorized {
            staker: *authority,
            withdrawer: *authority,
        },
        &Lockup::default(),
    )
}

/// Delegates `stake_account` to `vote_account`.
///
/// Accounts: stake, vote, clock sysvar, stake history sysvar, stake config, stake authority.
pub fn get_delegate_stake_instruction(
    stake_account: &Pubkey,
    vote_account: &Pubkey,
    stake_authority: &Pubkey,
) -> Instruction {
    stake_instruction::delegate_stake(stake_account, stake_authority, vote_account)
}
