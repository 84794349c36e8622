//! Wallet data model: raw CSV rows mapped into typed, UI-ready view models.

pub mod lookup;
pub mod wallet;

pub use wallet::{Category, SecurityLevel, SolanaPaySupport, WalletViewModel};
