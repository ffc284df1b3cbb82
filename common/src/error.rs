use thiserror::Error;

/// Shared error taxonomy for the ledger and the policy engine.
///
/// Every failure is terminal and synchronous: nothing is retried
/// internally and no partial state is committed on any error path.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FaucetError {
    #[error("Caller lacks the required privilege")]
    Unauthorized,

    #[error("A minter is already bound to this ledger")]
    AlreadyBound,

    #[error("Faucet is paused")]
    FaucetPaused,

    #[error("Cooldown period active")]
    CooldownActive,

    #[error("Lifetime claim limit reached")]
    LifetimeCapExceeded,

    #[error("Balance overflow")]
    Overflow,
}
