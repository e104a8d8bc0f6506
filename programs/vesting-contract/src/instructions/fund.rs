use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{ESCROW_SEED, VESTING_RECORD_SEED};
use crate::error::VestingError;
use crate::state::VestingRecord;

pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    let record = &ctx.accounts.vesting_record;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        record.authority,
        VestingError::Unauthorized
    );
    require_keys_eq!(
        ctx.accounts.authority_token_account.mint,
        record.mint,
        VestingError::InvalidMint
    );
    require_keys_eq!(
        ctx.accounts.authority_token_account.owner,
        ctx.accounts.authority.key(),
        VestingError::InvalidTokenAccount
    );

    // The escrow never needs to hold more than the claimable ceiling.
    let post = (ctx.accounts.escrow.amount as u128)
        .checked_add(amount as u128)
        .ok_or(VestingError::ArithmeticOverflow)?;
    require!(post <= record.total_amount as u128, VestingError::OverFund);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.authority_token_account.to_account_info(),
                to: ctx.accounts.escrow.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.escrow.reload()?;

    emit!(EscrowFunded {
        authority: ctx.accounts.authority.key(),
        amount,
        escrow_balance: ctx.accounts.escrow.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Fund<'info> {
    #[account(
        seeds = [
            VESTING_RECORD_SEED,
            vesting_record.beneficiary.as_ref(),
            vesting_record.authority.as_ref(),
            vesting_record.mint.as_ref(),
        ],
        bump = vesting_record.bump,
        constraint = vesting_record.escrow == escrow.key() @ VestingError::InvalidTokenAccount,
    )]
    pub vesting_record: Account<'info, VestingRecord>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, vesting_record.key().as_ref()],
        bump,
        constraint = escrow.mint == vesting_record.mint @ VestingError::InvalidMint,
    )]
    pub escrow: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct EscrowFunded {
    pub authority: Pubkey,
    pub amount: u64,
    pub escrow_balance: u64,
}
