pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 8 decimals numbers
pub const COIN_DECIMALS: u8 = 8;
// 100 000 000 to represent 1 full coin
pub const COIN_VALUE: u64 = 10u64.pow(COIN_DECIMALS as u32);

// ===== DEFAULT FAUCET POLICY =====

// Amount granted by a single successful claim (100 coins)
pub const DEFAULT_CLAIM_AMOUNT: u64 = 100 * COIN_VALUE;
// Minimum elapsed time between two successful claims by the same account
pub const DEFAULT_COOLDOWN_SECONDS: u64 = 24 * 60 * 60;
// Maximum cumulative amount a single account may ever receive (1000 coins)
// Must stay an exact multiple of DEFAULT_CLAIM_AMOUNT so the last
// permissible claim grants the full amount
pub const DEFAULT_LIFETIME_CAP: u64 = 1_000 * COIN_VALUE;
