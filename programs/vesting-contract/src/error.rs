use anchor_lang::prelude::*;

/// Custom error codes for the vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid vesting schedule")]
    InvalidSchedule,

    #[msg("Vesting record already initialized")]
    AlreadyInitialized,

    #[msg("Unauthorized signer")]
    Unauthorized,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Schedule already revoked")]
    AlreadyRevoked,

    #[msg("Math overflow")]
    ArithmeticOverflow,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid token mint")]
    InvalidMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient escrow balance")]
    InsufficientEscrowBalance,

    #[msg("Deposit would exceed total vesting amount")]
    OverFund,
}
