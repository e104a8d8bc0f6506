use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("7mT9LzDLhZQHfXTamhKMNuhsxCJyFcRWkbq3Ed4EKFh4");

#[program]
pub mod vesting_contract {
    use super::*;

    /// Creates a vesting record and its escrow token account for a
    /// (beneficiary, authority, mint) tuple. Does not fund the escrow.
    pub fn initialize(
        ctx: Context<Initialize>,
        beneficiary: Pubkey,
        total_amount: u64,
        start_time: i64,
        cliff_duration: i64,
        total_duration: i64,
    ) -> Result<()> {
        instructions::initialize(
            ctx,
            beneficiary,
            total_amount,
            start_time,
            cliff_duration,
            total_duration,
        )
    }

    /// Authority moves backing tokens into escrow.
    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        instructions::fund(ctx, amount)
    }

    /// Beneficiary withdraws the vested-but-unreleased portion.
    /// Returns the claimed amount.
    pub fn claim(ctx: Context<Claim>) -> Result<u64> {
        instructions::claim(ctx)
    }

    /// Authority terminates the schedule early, reclaiming the unvested
    /// remainder. Returns the forfeited amount.
    pub fn revoke(ctx: Context<Revoke>) -> Result<u64> {
        instructions::revoke(ctx)
    }

    /// Read-only quote of vested/released/claimable for off-chain consumers.
    pub fn emit_quote(ctx: Context<EmitQuote>) -> Result<()> {
        instructions::emit_quote(ctx)
    }
}
