use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{ESCROW_SEED, VESTING_RECORD_SEED};
use crate::error::VestingError;
use crate::state::VestingRecord;

pub fn revoke(ctx: Context<Revoke>) -> Result<u64> {
    let escrow_ai = ctx.accounts.escrow.to_account_info();
    let record_ai = ctx.accounts.vesting_record.to_account_info();

    let record = &ctx.accounts.vesting_record;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        record.authority,
        VestingError::Unauthorized
    );
    require!(!record.revoked, VestingError::AlreadyRevoked);
    require_keys_eq!(
        ctx.accounts.authority_token_account.mint,
        record.mint,
        VestingError::InvalidMint
    );
    require_keys_eq!(
        ctx.accounts.authority_token_account.owner,
        record.authority,
        VestingError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let vested = record.vested_amount(now)?;
    let forfeited = record
        .total_amount
        .checked_sub(vested)
        .ok_or(VestingError::ArithmeticOverflow)?;

    if forfeited > 0 {
        require!(
            ctx.accounts.escrow.amount >= forfeited,
            VestingError::InsufficientEscrowBalance
        );

        let beneficiary_key = record.beneficiary;
        let authority_key = record.authority;
        let mint_key = record.mint;
        let bump = record.bump;

        // Return the unvested remainder from escrow, signed by the record PDA.
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
                    to: ctx.accounts.authority_token_account.to_account_info(),
                    authority: record_ai,
                },
                signer_seeds,
            ),
            forfeited,
        )?;
    }

    // Freeze the ceiling at the vested amount; vesting stops here. Already
    // earned tokens stay claimable by the beneficiary.
    let record = &mut ctx.accounts.vesting_record;
    record.total_amount = vested;
    record.revoked = true;

    emit!(ScheduleRevoked {
        authority: record.authority,
        beneficiary: record.beneficiary,
        vested,
        forfeited,
    });

    Ok(forfeited)
}

#[derive(Accounts)]
pub struct Revoke<'info> {
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
    pub authority_token_account: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ScheduleRevoked {
    pub authority: Pubkey,
    pub beneficiary: Pubkey,
    pub vested: u64,
    pub forfeited: u64,
}
