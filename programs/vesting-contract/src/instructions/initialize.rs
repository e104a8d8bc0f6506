use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{ESCROW_SEED, VESTING_RECORD_SEED};
use crate::error::VestingError;
use crate::state::VestingRecord;

pub fn initialize(
    ctx: Context<Initialize>,
    beneficiary: Pubkey,
    total_amount: u64,
    start_time: i64,
    cliff_duration: i64,
    total_duration: i64,
) -> Result<()> {
    require!(total_amount > 0, VestingError::InvalidAmount);
    require!(start_time > 0, VestingError::InvalidSchedule);
    require!(total_duration > 0, VestingError::InvalidSchedule);
    require!(cliff_duration >= 0, VestingError::InvalidSchedule);
    require!(cliff_duration <= total_duration, VestingError::InvalidSchedule);
    require!(beneficiary != Pubkey::default(), VestingError::InvalidPubkey);
    require!(
        beneficiary != ctx.accounts.vesting_record.key(),
        VestingError::InvalidPubkey
    );
    require!(beneficiary != crate::ID, VestingError::InvalidPubkey);

    let record = &mut ctx.accounts.vesting_record;
    record.beneficiary = beneficiary;
    record.authority = ctx.accounts.authority.key();
    record.mint = ctx.accounts.mint.key();
    record.escrow = ctx.accounts.escrow.key();
    record.total_amount = total_amount;
    record.start_time = start_time;
    record.cliff_duration = cliff_duration;
    record.total_duration = total_duration;
    record.released_amount = 0;
    record.revoked = false;
    record.bump = ctx.bumps.vesting_record;

    emit!(RecordInitialized {
        beneficiary,
        authority: record.authority,
        mint: record.mint,
        escrow: record.escrow,
        total_amount,
        start_time,
        cliff_duration,
        total_duration,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + VestingRecord::SIZE,
        seeds = [
            VESTING_RECORD_SEED,
            beneficiary.as_ref(),
            authority.key().as_ref(),
            mint.key().as_ref(),
        ],
        bump
    )]
    pub vesting_record: Account<'info, VestingRecord>,

    #[account(
        init,
        payer = authority,
        token::mint = mint,
        token::authority = vesting_record,
        seeds = [ESCROW_SEED, vesting_record.key().as_ref()],
        bump
    )]
    pub escrow: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct RecordInitialized {
    pub beneficiary: Pubkey,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub escrow: Pubkey,
    pub total_amount: u64,
    pub start_time: i64,
    pub cliff_duration: i64,
    pub total_duration: i64,
}
