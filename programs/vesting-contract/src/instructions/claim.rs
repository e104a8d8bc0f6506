use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{ESCROW_SEED, VESTING_RECORD_SEED};
use crate::error::VestingError;
use crate::state::VestingRecord;

pub fn claim(ctx: Context<Claim>) -> Result<u64> {
    // Avoid borrow checker conflicts: capture AccountInfos/keys before taking mutable borrows.
    let escrow_ai = ctx.accounts.escrow.to_account_info();
    let record_ai = ctx.accounts.vesting_record.to_account_info();

    let record = &ctx.accounts.vesting_record;
    require_keys_eq!(
        ctx.accounts.beneficiary.key(),
        record.beneficiary,
        VestingError::Unauthorized
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        record.mint,
        VestingError::InvalidMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        record.beneficiary,
        VestingError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let claimable = record.claimable_amount(now)?;
    require!(claimable > 0, VestingError::NothingToClaim);
    require!(
        ctx.accounts.escrow.amount >= claimable,
        VestingError::InsufficientEscrowBalance
    );

    let beneficiary_key = record.beneficiary;
    let authority_key = record.authority;
    let mint_key = record.mint;
    let bump = record.bump;

    // CPI transfer from escrow to the beneficiary, signed by the record PDA.
    let signer_seeds: &[&[&[u8]]] = &[&[
        VESTING_RECORD_SEED,
        beneficiary_key.as_ref(),
        authority_key.as_ref(),
        mint_key.as_ref(),
        &[bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: escrow_ai,
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: record_ai,
            },
            signer_seeds,
        ),
        claimable,
    )?;

    let record = &mut ctx.accounts.vesting_record;
    record.released_amount = record
        .released_amount
        .checked_add(claimable)
        .ok_or(VestingError::ArithmeticOverflow)?;

    emit!(TokensClaimed {
        beneficiary: beneficiary_key,
        amount: claimable,
        released_total: record.released_amount,
        total_amount: record.total_amount,
    });

    Ok(claimable)
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        mut,
        seeds = [
            VESTING_RECORD_SEED,
            vesting_record.beneficiary.as_ref(),
            vesting_record.authority.as_ref(),
            vesting_record.mint.as_ref(),
        ],
        bump = vesting_record.bump,
    )]
    pub vesting_record: Account<'info, VestingRecord>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, vesting_record.key().as_ref()],
        bump,
        constraint = escrow.mint == vesting_record.mint @ VestingError::InvalidMint,
        constraint = escrow.key() == vesting_record.escrow @ VestingError::InvalidTokenAccount,
    )]
    pub escrow: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub released_total: u64,
    pub total_amount: u64,
}
