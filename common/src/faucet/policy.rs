use serde::{Deserialize, Serialize};

use crate::{
    asset::Amount,
    config::{DEFAULT_CLAIM_AMOUNT, DEFAULT_COOLDOWN_SECONDS, DEFAULT_LIFETIME_CAP},
};

/// Distribution policy, fixed at construction
///
/// There is no update entry point: changing the policy means deploying
/// a new engine. `lifetime_cap` should be an exact multiple of
/// `claim_amount`; if it is not, the remainder below a full claim is
/// simply never granted, because a claim that would pass the cap even
/// partially is rejected rather than truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaucetPolicy {
    /// Amount granted by a single successful claim
    pub claim_amount: Amount,
    /// Minimum elapsed seconds between two successful claims per account
    pub cooldown_seconds: u64,
    /// Maximum cumulative amount a single account may ever receive
    pub lifetime_cap: Amount,
}

impl FaucetPolicy {
    pub const fn new(claim_amount: Amount, cooldown_seconds: u64, lifetime_cap: Amount) -> Self {
        Self {
            claim_amount,
            cooldown_seconds,
            lifetime_cap,
        }
    }

    /// Number of full claims an account can make over its lifetime
    pub const fn max_claims(&self) -> u64 {
        if self.claim_amount == 0 {
            0
        } else {
            self.lifetime_cap / self.claim_amount
        }
    }
}

impl Default for FaucetPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_CLAIM_AMOUNT,
            DEFAULT_COOLDOWN_SECONDS,
            DEFAULT_LIFETIME_CAP,
        )
    }
}

/// Eligibility state of a single account
///
/// `Eligible --claim--> Cooling --cooldown elapses--> Eligible` while
/// allowance remains, or `Exhausted` once the next claim can no longer
/// fit under the cap. `Exhausted` is terminal: the cap is never
/// reduced. The global pause flag overlays this machine without
/// advancing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimState {
    /// A claim would succeed (pause permitting)
    Eligible,
    /// Cooldown window from the last claim is still open
    Cooling,
    /// Lifetime cap reached, no further claims ever
    Exhausted,
}
