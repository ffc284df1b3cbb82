pub mod event;
pub mod policy;

pub use event::FaucetEvent;
pub use policy::{ClaimState, FaucetPolicy};

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use indexmap::IndexMap;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    account::{AccountId, ClaimRecord},
    asset::{Amount, AssetLedger, SharedLedger},
    error::FaucetError,
    time::TimestampSeconds,
};

/// Proof of a successful claim, returned to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimReceipt {
    pub account: AccountId,
    pub amount: Amount,
    pub timestamp: TimestampSeconds,
}

/// Claim policy engine
///
/// Tracks per-account claim history, the global pause flag and the
/// admin identity. On a successful claim it mints on the shared
/// [`AssetLedger`] under its own `identity`, which the deployment
/// routine bound as the exclusive minter.
///
/// All mutating operations take `&mut self`, so callers that share an
/// engine must serialize access to it; every call is a bounded,
/// synchronous state transition with `now` supplied from outside.
pub struct Faucet {
    /// The engine's own identity, presented to the ledger as mint caller
    identity: AccountId,
    /// The only account permitted to toggle the pause flag
    admin: AccountId,
    policy: FaucetPolicy,
    paused: bool,
    /// Per-account history, created lazily on first successful claim
    records: IndexMap<AccountId, ClaimRecord>,
    ledger: SharedLedger,
    /// Signals not yet handed to external monitoring
    pending_events: Vec<FaucetEvent>,
}

impl Faucet {
    pub fn new(
        identity: AccountId,
        admin: AccountId,
        policy: FaucetPolicy,
        ledger: SharedLedger,
    ) -> Self {
        Self {
            identity,
            admin,
            policy,
            paused: false,
            records: IndexMap::new(),
            ledger,
            pending_events: Vec::new(),
        }
    }

    /// Validate a claim without mutating anything
    ///
    /// Single source of truth for `request_tokens` and `can_claim`:
    /// checks pause, cooldown and lifetime cap in that order and
    /// returns the cumulative total a successful claim would commit.
    /// The cooldown only applies when a record exists; an account that
    /// has never claimed is eligible at any timestamp, including 0.
    fn check_claim(
        &self,
        account: &AccountId,
        now: TimestampSeconds,
    ) -> Result<Amount, FaucetError> {
        if self.paused {
            return Err(FaucetError::FaucetPaused);
        }

        let record = self.records.get(account);
        if record.is_some_and(|record| record.is_cooling(now, self.policy.cooldown_seconds)) {
            return Err(FaucetError::CooldownActive);
        }

        record
            .copied()
            .unwrap_or_default()
            .charged(self.policy.claim_amount, self.policy.lifetime_cap)
    }

    /// Claim the fixed distribution amount for `caller`
    ///
    /// The ledger mint happens before the claim record is touched, so a
    /// mint failure (unbound minter, overflow) leaves no partial state:
    /// either both the ledger and the record advance, or neither does.
    pub fn request_tokens(
        &mut self,
        caller: &AccountId,
        now: TimestampSeconds,
    ) -> Result<ClaimReceipt, FaucetError> {
        let new_total = self.check_claim(caller, now)?;
        let amount = self.policy.claim_amount;

        self.ledger_write().mint(&self.identity, caller, amount)?;

        self.records
            .entry(*caller)
            .or_default()
            .commit(now, new_total);

        debug!("Claim granted to {} at {}: {} units", caller, now, amount);
        self.pending_events.push(FaucetEvent::TokensClaimed {
            account: *caller,
            amount,
            timestamp: now,
        });

        Ok(ClaimReceipt {
            account: *caller,
            amount,
            timestamp: now,
        })
    }

    /// True iff a claim by `account` at `now` would succeed
    pub fn can_claim(&self, account: &AccountId, now: TimestampSeconds) -> bool {
        self.check_claim(account, now).is_ok()
    }

    /// Eligibility state of `account`, ignoring the pause overlay
    pub fn claim_state(&self, account: &AccountId, now: TimestampSeconds) -> ClaimState {
        let record = self.record(account);
        if record
            .charged(self.policy.claim_amount, self.policy.lifetime_cap)
            .is_err()
        {
            ClaimState::Exhausted
        } else if self.records.contains_key(account)
            && record.is_cooling(now, self.policy.cooldown_seconds)
        {
            ClaimState::Cooling
        } else {
            ClaimState::Eligible
        }
    }

    /// Amount still claimable by `account` before its lifetime cap
    pub fn remaining_allowance(&self, account: &AccountId) -> Amount {
        self.record(account).remaining_allowance(self.policy.lifetime_cap)
    }

    /// Timestamp of the most recent successful claim, 0 = never claimed
    pub fn last_claim_at(&self, account: &AccountId) -> TimestampSeconds {
        self.record(account).last_claim_at
    }

    /// Cumulative amount ever granted to `account`
    pub fn total_claimed(&self, account: &AccountId) -> Amount {
        self.record(account).total_claimed
    }

    /// Toggle the global pause flag, admin only
    ///
    /// Emits a pause event on every successful call, even when the flag
    /// value does not change.
    pub fn set_paused(&mut self, caller: &AccountId, value: bool) -> Result<(), FaucetError> {
        if *caller != self.admin {
            warn!("Rejected pause toggle from {}: not the admin", caller);
            return Err(FaucetError::Unauthorized);
        }

        info!("Faucet paused flag set to {} by admin", value);
        self.paused = value;
        self.pending_events
            .push(FaucetEvent::FaucetPaused { paused: value });
        Ok(())
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn admin(&self) -> &AccountId {
        &self.admin
    }

    pub fn identity(&self) -> &AccountId {
        &self.identity
    }

    pub fn policy(&self) -> &FaucetPolicy {
        &self.policy
    }

    pub fn ledger(&self) -> &SharedLedger {
        &self.ledger
    }

    pub fn claim_record(&self, account: &AccountId) -> Option<&ClaimRecord> {
        self.records.get(account)
    }

    /// Hand pending signals to external monitoring
    pub fn drain_events(&mut self) -> Vec<FaucetEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn record(&self, account: &AccountId) -> ClaimRecord {
        self.records.get(account).copied().unwrap_or_default()
    }

    // A poisoned lock only means another holder panicked; ledger
    // mutations are validated before being applied, so the state at
    // rest is always consistent and can be reused.
    fn ledger_write(&self) -> RwLockWriteGuard<'_, AssetLedger> {
        self.ledger.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    fn ledger_read(&self) -> std::sync::RwLockReadGuard<'_, AssetLedger> {
        self.ledger.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Deployment-time initialization routine
///
/// Constructs the ledger, binds the engine identity as the exclusive
/// minter and wires the engine to the shared ledger handle. Persisting
/// the resulting identifiers for clients is the caller's concern.
pub fn bootstrap(
    identity: AccountId,
    admin: AccountId,
    policy: FaucetPolicy,
) -> Result<(SharedLedger, Faucet), FaucetError> {
    let mut ledger = AssetLedger::new();
    ledger.bind_minter(identity)?;

    let ledger = Arc::new(RwLock::new(ledger));
    let faucet = Faucet::new(identity, admin, policy, ledger.clone());
    Ok((ledger, faucet))
}
