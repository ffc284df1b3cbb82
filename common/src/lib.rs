pub mod account;
pub mod asset;
pub mod config;
pub mod error;
pub mod faucet;
pub mod time;

pub use account::{AccountId, ClaimRecord};
pub use asset::{Amount, AssetLedger, SharedLedger};
pub use error::FaucetError;
pub use faucet::{bootstrap, ClaimReceipt, ClaimState, Faucet, FaucetEvent, FaucetPolicy};
