use solana_sdk::{hash::Hash, instruction::Instruction, pubkey::Pubkey};

/// Validity window of a transaction: a recent blockhash and the last block height at which
/// a transaction referencing it can still land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockhashLifetime {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
}

/// Only version 0 messages are built.
pub const MESSAGE_VERSION: u8 = 0;

/// A transaction message under construction.
///
/// Every setter consumes the message and returns it, so the message is threaded through the
/// build steps in order and nothing can be removed once added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionMessage {
    fee_payer: Option<Pubkey>,
    lifetime: Option<BlockhashLifetime>,
    instructions: Vec<Instruction>,
}

impl TransactionMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fee_payer(mut self, fee_payer: Pubkey) -> Self {
        self.fee_payer = Some(fee_payer);
        self
    }

    pub fn set_blockhash_lifetime(mut self, lifetime: BlockhashLifetime) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    pub fn prepend_instruction(mut self, instruction: Instruction) -> Self {
        self.instructions.insert(0, instruction);
        self
    }

    pub fn append_instruction(mut self, instruction: Instruction) -> Self {
        self.instructions.push(instruction);
        self
    }

    pub fn version(&self) -> u8 {
        MESSAGE_VERSION
    }

    pub fn fee_payer(&self) -> Option<&Pubkey> {
        self.fee_payer.as_ref()
    }

    pub fn lifetime(&self) -> Option<&BlockhashLifetime> {
        self.lifetime.as_ref()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}
