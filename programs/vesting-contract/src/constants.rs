//! Program-wide constants.

/// Seed prefix for the vesting record PDA
/// (`[VESTING_RECORD_SEED, beneficiary, authority, mint]`).
pub const VESTING_RECORD_SEED: &[u8] = b"vesting";

/// Seed prefix for the escrow token account PDA
/// (`[ESCROW_SEED, vesting_record]`).
pub const ESCROW_SEED: &[u8] = b"escrow";
