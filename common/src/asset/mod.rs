use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{account::AccountId, error::FaucetError};

/// Atomic units of the distributed asset
pub type Amount = u64;

/// Ledger handle shared between the policy engine and external readers
pub type SharedLedger = Arc<RwLock<AssetLedger>>;

/// Authoritative balance ledger
///
/// Owns the total supply and per-account balances. The only mutation
/// path is [`AssetLedger::mint`], restricted to a single minter bound
/// exactly once via [`AssetLedger::bind_minter`].
///
/// Invariant: the sum of all balances equals `total_supply` at all
/// times; a mint updates both together or not at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetLedger {
    /// Per-account balances in atomic units
    balances: IndexMap<AccountId, Amount>,
    /// Sum of all balances
    total_supply: Amount,
    /// The only caller allowed to mint, None until bound
    minter: Option<AccountId>,
}

impl AssetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if `caller` is the bound minter
    pub fn is_bound_minter(&self, caller: &AccountId) -> bool {
        self.minter.as_ref() == Some(caller)
    }

    /// Bind the exclusive minter, callable exactly once
    ///
    /// A second call fails with `AlreadyBound` and leaves the first
    /// binding in place. Rejection is loud rather than a silent no-op
    /// so a misconfigured deployment cannot go unnoticed.
    pub fn bind_minter(&mut self, minter: AccountId) -> Result<(), FaucetError> {
        if self.minter.is_some() {
            return Err(FaucetError::AlreadyBound);
        }

        info!("Minter bound to {}", minter);
        self.minter = Some(minter);
        Ok(())
    }

    /// Increase `to`'s balance and the total supply by `amount`
    ///
    /// Fails with `Unauthorized` unless `caller` is the bound minter
    /// (including when no minter is bound yet) and with `Overflow` when
    /// either the balance or the supply would exceed `u64`. Both sums
    /// are validated before either is written.
    pub fn mint(
        &mut self,
        caller: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), FaucetError> {
        if !self.is_bound_minter(caller) {
            warn!("Rejected mint from {}: not the bound minter", caller);
            return Err(FaucetError::Unauthorized);
        }

        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(FaucetError::Overflow)?;
        let new_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(FaucetError::Overflow)?;

        self.total_supply = new_supply;
        self.balances.insert(*to, new_balance);
        Ok(())
    }

    /// Balance of `account`, 0 when unknown
    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    pub fn minter(&self) -> Option<&AccountId> {
        self.minter.as_ref()
    }

    /// Iterate over all accounts with a balance entry
    pub fn balances(&self) -> impl Iterator<Item = (&AccountId, Amount)> {
        self.balances.iter().map(|(account, amount)| (account, *amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(tag: u8) -> AccountId {
        AccountId::new([tag; 32])
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = AssetLedger::new();
        assert_eq!(ledger.total_supply(), 0);
        assert_eq!(ledger.balance_of(&account(1)), 0);
        assert!(ledger.minter().is_none());
    }

    #[test]
    fn test_bind_minter_once() {
        let mut ledger = AssetLedger::new();
        let minter = account(1);

        ledger.bind_minter(minter).unwrap();
        assert!(ledger.is_bound_minter(&minter));

        // Second binding is rejected and the first one survives
        assert_eq!(
            ledger.bind_minter(account(2)),
            Err(FaucetError::AlreadyBound)
        );
        assert_eq!(ledger.minter(), Some(&minter));

        // Re-binding the same identity is an error too, not a confirm
        assert_eq!(ledger.bind_minter(minter), Err(FaucetError::AlreadyBound));
    }

    #[test]
    fn test_mint_requires_bound_minter() {
        let mut ledger = AssetLedger::new();
        let user = account(2);

        // No minter bound yet
        assert_eq!(
            ledger.mint(&account(1), &user, 100),
            Err(FaucetError::Unauthorized)
        );

        ledger.bind_minter(account(1)).unwrap();

        // Wrong caller
        assert_eq!(
            ledger.mint(&account(3), &user, 100),
            Err(FaucetError::Unauthorized)
        );
        assert_eq!(ledger.total_supply(), 0);
        assert_eq!(ledger.balance_of(&user), 0);

        // Bound minter succeeds
        ledger.mint(&account(1), &user, 100).unwrap();
        assert_eq!(ledger.balance_of(&user), 100);
        assert_eq!(ledger.total_supply(), 100);
    }

    #[test]
    fn test_mint_accumulates() {
        let mut ledger = AssetLedger::new();
        let minter = account(1);
        ledger.bind_minter(minter).unwrap();

        ledger.mint(&minter, &account(2), 100).unwrap();
        ledger.mint(&minter, &account(2), 50).unwrap();
        ledger.mint(&minter, &account(3), 25).unwrap();

        assert_eq!(ledger.balance_of(&account(2)), 150);
        assert_eq!(ledger.balance_of(&account(3)), 25);
        assert_eq!(ledger.total_supply(), 175);
    }

    #[test]
    fn test_mint_overflow_leaves_state_unchanged() {
        let mut ledger = AssetLedger::new();
        let minter = account(1);
        ledger.bind_minter(minter).unwrap();
        ledger.mint(&minter, &account(2), u64::MAX).unwrap();

        // Supply is saturated: any further mint overflows atomically
        assert_eq!(
            ledger.mint(&minter, &account(3), 1),
            Err(FaucetError::Overflow)
        );
        assert_eq!(ledger.total_supply(), u64::MAX);
        assert_eq!(ledger.balance_of(&account(2)), u64::MAX);
        assert_eq!(ledger.balance_of(&account(3)), 0);
    }

    #[test]
    fn test_supply_matches_balance_sum() {
        let mut ledger = AssetLedger::new();
        let minter = account(1);
        ledger.bind_minter(minter).unwrap();

        for tag in 2u8..10 {
            ledger.mint(&minter, &account(tag), tag as u64 * 10).unwrap();
        }

        let sum: Amount = ledger.balances().map(|(_, amount)| amount).sum();
        assert_eq!(sum, ledger.total_supply());
    }

    #[test]
    fn test_ledger_serde_roundtrip() {
        let mut ledger = AssetLedger::new();
        let minter = account(1);
        ledger.bind_minter(minter).unwrap();
        ledger.mint(&minter, &account(2), 42).unwrap();

        let json = serde_json::to_string(&ledger).unwrap();
        let restored: AssetLedger = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.total_supply(), 42);
        assert_eq!(restored.balance_of(&account(2)), 42);
        assert_eq!(restored.minter(), Some(&minter));
    }
}
