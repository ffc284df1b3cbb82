use serde::{Deserialize, Serialize};

use crate::{account::AccountId, asset::Amount, time::TimestampSeconds};

/// Observable signals for external monitoring and UIs
///
/// Events are observational only: nothing in the core reads them back,
/// and dropping them never affects policy or ledger state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaucetEvent {
    /// A claim succeeded and tokens were minted
    TokensClaimed {
        account: AccountId,
        amount: Amount,
        timestamp: TimestampSeconds,
    },
    /// The admin toggled the pause flag
    FaucetPaused { paused: bool },
}
