use anchor_lang::prelude::*;

use crate::constants::VESTING_RECORD_SEED;
use crate::error::VestingError;
use crate::state::VestingRecord;

pub fn emit_quote(ctx: Context<EmitQuote>) -> Result<()> {
    let record = &ctx.accounts.vesting_record;
    let now = Clock::get()?.unix_timestamp;

    let vested = record.vested_amount(now)?;
    let claimable = vested
        .checked_sub(record.released_amount)
        .ok_or(VestingError::ArithmeticOverflow)?;

    emit!(VestingQuote {
        beneficiary: record.beneficiary,
        now,
        vested,
        released_amount: record.released_amount,
        claimable,
        total_amount: record.total_amount,
        revoked: record.revoked,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitQuote<'info> {
    #[account(
        seeds = [
            VESTING_RECORD_SEED,
            vesting_record.beneficiary.as_ref(),
            vesting_record.authority.as_ref(),
            vesting_record.mint.as_ref(),
        ],
        bump = vesting_record.bump,
    )]
    pub vesting_record: Account<'info, VestingRecord>,
}

#[event]
pub struct VestingQuote {
    pub beneficiary: Pubkey,
    pub now: i64,
    pub vested: u64,
    pub released_amount: u64,
    pub claimable: u64,
    pub total_amount: u64,
    pub revoked: bool,
}
