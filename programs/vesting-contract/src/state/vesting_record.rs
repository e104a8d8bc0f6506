use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Per-beneficiary vesting record PDA.
///
/// One record exists per (beneficiary, authority, mint) tuple. The record
/// PDA is the authority over its escrow token account, so every debit of
/// the escrow is signed by this program.
#[account]
pub struct VestingRecord {
    /// Wallet entitled to claim vested tokens.
    pub beneficiary: Pubkey,
    /// Wallet permitted to revoke the schedule.
    pub authority: Pubkey,
    /// Token mint.
    pub mint: Pubkey,
    /// Escrow token account holding the backing tokens.
    pub escrow: Pubkey,
    /// Ceiling ever claimable. Frozen at the vested amount on revocation.
    pub total_amount: u64,
    /// Vesting start timestamp (Unix seconds, UTC).
    pub start_time: i64,
    /// Seconds after start before anything unlocks.
    pub cliff_duration: i64,
    /// Seconds after start at which the full amount is vested.
    pub total_duration: i64,
    /// Cumulative amount already withdrawn. Non-decreasing.
    pub released_amount: u64,
    /// Terminal flag set by revocation.
    pub revoked: bool,
    /// Canonical bump of the record PDA (signs escrow transfers).
    pub bump: u8,
}

impl VestingRecord {
    pub const SIZE: usize =
        32 + // beneficiary
        32 + // authority
        32 + // mint
        32 + // escrow
        8 +  // total_amount
        8 +  // start_time
        8 +  // cliff_duration
        8 +  // total_duration
        8 +  // released_amount
        1 +  // revoked
        1;   // bump

    /// Cumulative amount vested as of `now`.
    ///
    /// Zero before the cliff, `total_amount` at or after
    /// `start_time + total_duration`, linear interpolation (floored)
    /// in between. Once revoked the frozen `total_amount` is fully
    /// vested, so late claims can still drain the earned remainder.
    pub fn vested_amount(&self, now: i64) -> Result<u64> {
        if self.revoked {
            return Ok(self.total_amount);
        }

        let cliff_end = self
            .start_time
            .checked_add(self.cliff_duration)
            .ok_or(VestingError::ArithmeticOverflow)?;
        if now < cliff_end {
            return Ok(0);
        }

        let end = self
            .start_time
            .checked_add(self.total_duration)
            .ok_or(VestingError::ArithmeticOverflow)?;
        if now >= end {
            return Ok(self.total_amount);
        }

        // now >= cliff_end >= start_time here, so elapsed is non-negative.
        let elapsed = u128::try_from(now - self.start_time)
            .map_err(|_| VestingError::ArithmeticOverflow)?;
        let vested = (self.total_amount as u128)
            .checked_mul(elapsed)
            .ok_or(VestingError::ArithmeticOverflow)?
            .checked_div(self.total_duration as u128)
            .ok_or(VestingError::ArithmeticOverflow)?;

        u64::try_from(vested).map_err(|_| VestingError::ArithmeticOverflow.into())
    }

    /// Amount claimable as of `now`: vested minus already released.
    pub fn claimable_amount(&self, now: i64) -> Result<u64> {
        let vested = self.vested_amount(now)?;
        vested
            .checked_sub(self.released_amount)
            .ok_or(VestingError::ArithmeticOverflow.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(total: u64, start: i64, cliff: i64, duration: i64) -> VestingRecord {
        VestingRecord {
            beneficiary: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            escrow: Pubkey::new_unique(),
            total_amount: total,
            start_time: start,
            cliff_duration: cliff,
            total_duration: duration,
            released_amount: 0,
            revoked: false,
            bump: 255,
        }
    }

    #[test]
    fn zero_before_cliff_full_at_end() {
        let r = record(1000, 0, 100, 1000);
        assert_eq!(r.vested_amount(0).unwrap(), 0);
        assert_eq!(r.vested_amount(50).unwrap(), 0);
        assert_eq!(r.vested_amount(99).unwrap(), 0);
        // Cliff boundary is inclusive: the linear formula applies.
        assert_eq!(r.vested_amount(100).unwrap(), 100);
        assert_eq!(r.vested_amount(1000).unwrap(), 1000);
        assert_eq!(r.vested_amount(5000).unwrap(), 1000);
    }

    #[test]
    fn linear_interpolation_floors() {
        let r = record(1000, 0, 100, 1000);
        assert_eq!(r.vested_amount(550).unwrap(), 550);

        // 7 units over 9 seconds: fractional accrual floors.
        let r = record(7, 0, 0, 9);
        assert_eq!(r.vested_amount(1).unwrap(), 0);
        assert_eq!(r.vested_amount(2).unwrap(), 1);
        assert_eq!(r.vested_amount(8).unwrap(), 6);
        assert_eq!(r.vested_amount(9).unwrap(), 7);
    }

    #[test]
    fn monotone_in_now() {
        let r = record(12_345, 1_700_000_000, 3_600, 86_400);
        let mut prev = 0u64;
        for offset in (0..=90_000).step_by(777) {
            let v = r.vested_amount(r.start_time + offset).unwrap();
            assert!(v >= prev, "vested decreased at offset {offset}");
            prev = v;
        }
        assert_eq!(prev, r.total_amount);
    }

    #[test]
    fn claim_sequence_from_spec_example() {
        let mut r = record(1000, 0, 100, 1000);

        // now=550: vested 550, nothing released yet.
        let c = r.claimable_amount(550).unwrap();
        assert_eq!(c, 550);
        r.released_amount += c;

        // Same instant again: nothing further to claim.
        assert_eq!(r.claimable_amount(550).unwrap(), 0);

        // now=1000: fully vested, remainder claimable.
        let c = r.claimable_amount(1000).unwrap();
        assert_eq!(c, 450);
        r.released_amount += c;
        assert_eq!(r.released_amount, r.total_amount);
        assert_eq!(r.claimable_amount(9999).unwrap(), 0);
    }

    #[test]
    fn released_never_exceeds_vested_or_total() {
        let mut r = record(999, 0, 250, 1000);
        for now in [250, 300, 617, 800, 1000, 2000] {
            let c = r.claimable_amount(now).unwrap();
            r.released_amount += c;
            assert!(r.released_amount <= r.vested_amount(now).unwrap());
            assert!(r.released_amount <= r.total_amount);
        }
        assert_eq!(r.released_amount, 999);
    }

    #[test]
    fn revocation_freezes_ceiling() {
        let mut r = record(1000, 0, 100, 1000);

        // Revoke at now=400: vested 400, forfeited 600.
        let vested = r.vested_amount(400).unwrap();
        assert_eq!(vested, 400);
        let forfeited = r.total_amount - vested;
        assert_eq!(forfeited, 600);
        r.total_amount = vested;
        r.revoked = true;

        // Later claims get the full frozen amount, not the linear value.
        assert_eq!(r.vested_amount(900).unwrap(), 400);
        let c = r.claimable_amount(900).unwrap();
        assert_eq!(c, 400);
        r.released_amount += c;
        assert_eq!(r.claimable_amount(100_000).unwrap(), 0);
        assert!(r.released_amount <= r.total_amount);
    }

    #[test]
    fn revocation_after_partial_claim() {
        let mut r = record(1000, 0, 100, 1000);
        let c = r.claimable_amount(550).unwrap();
        r.released_amount += c; // 550 released

        let vested = r.vested_amount(600).unwrap(); // 600
        r.total_amount = vested;
        r.revoked = true;

        assert_eq!(r.claimable_amount(999_999).unwrap(), 50);
    }

    #[test]
    fn wide_math_does_not_wrap() {
        // total * elapsed overflows u64 but not u128.
        let r = record(u64::MAX, 0, 0, i64::MAX);
        let v = r.vested_amount(i64::MAX / 2).unwrap();
        assert!(v < u64::MAX);
        assert_eq!(r.vested_amount(i64::MAX).unwrap(), u64::MAX);
    }

    #[test]
    fn overflow_in_schedule_bounds_is_an_error() {
        let mut r = record(1, i64::MAX, 1, 1);
        assert!(r.vested_amount(0).is_err());
        r.cliff_duration = 0;
        // start + total_duration overflows.
        assert!(r.vested_amount(i64::MAX).is_err());
    }
}
