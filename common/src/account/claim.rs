use serde::{Deserialize, Serialize};

use crate::{asset::Amount, error::FaucetError, time::TimestampSeconds};

/// Per-account claim history
///
/// Created lazily on the first successful claim: the cooldown applies
/// only to accounts that have a record, so the engine keys eligibility
/// on record existence rather than on `last_claim_at` being non-zero
/// (a first claim at timestamp 0 is legitimate). Both fields are
/// monotonically non-decreasing and `total_claimed` never exceeds the
/// lifetime cap of the policy it is evaluated against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Timestamp (seconds) of the most recent successful claim
    pub last_claim_at: TimestampSeconds,
    /// Cumulative amount ever granted to this account
    pub total_claimed: Amount,
}

impl ClaimRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the cooldown window from the last claim is still open
    ///
    /// Only meaningful on a committed record. The boundary itself is
    /// eligible: a claim at exactly `last_claim_at + cooldown_seconds`
    /// is not cooling.
    pub fn is_cooling(&self, now: TimestampSeconds, cooldown_seconds: u64) -> bool {
        now < self.last_claim_at.saturating_add(cooldown_seconds)
    }

    /// Earliest timestamp at which the next claim may succeed
    pub fn next_claim_at(&self, cooldown_seconds: u64) -> TimestampSeconds {
        self.last_claim_at.saturating_add(cooldown_seconds)
    }

    /// Amount still claimable before the lifetime cap is reached
    pub fn remaining_allowance(&self, lifetime_cap: Amount) -> Amount {
        lifetime_cap.saturating_sub(self.total_claimed)
    }

    /// Compute the cumulative total after granting `amount`
    ///
    /// Fails with `LifetimeCapExceeded` when the claim would pass the
    /// cap even partially; the grant is never truncated to the
    /// remaining allowance.
    pub fn charged(&self, amount: Amount, lifetime_cap: Amount) -> Result<Amount, FaucetError> {
        match self.total_claimed.checked_add(amount) {
            Some(total) if total <= lifetime_cap => Ok(total),
            _ => Err(FaucetError::LifetimeCapExceeded),
        }
    }

    /// Commit a successful claim
    ///
    /// `new_total` must come from [`Self::charged`] for the same
    /// policy, which makes this infallible.
    pub fn commit(&mut self, now: TimestampSeconds, new_total: Amount) {
        self.last_claim_at = now;
        self.total_claimed = new_total;
    }
}
