//! Fixed name-keyed lookup tables for presentation metadata. Matching is a
//! case-insensitive substring scan of the wallet name, first hit wins.

use rand::Rng;

use crate::models::wallet::SecurityLevel;

const WALLET_LOGOS: &[(&str, &str)] = &[
    ("Phantom", "👻"),
    ("Solflare", "🔥"),
    ("Backpack", "🎒"),
    ("Glow", "✨"),
    ("Exodus", "🚀"),
    ("Trust Wallet", "🛡️"),
    ("Coinbase Wallet", "🔵"),
    ("Atomic Wallet", "⚛️"),
    ("Brave Wallet", "🦁"),
    ("Ledger", "🔐"),
    ("Trezor", "🔑"),
    ("SafePal", "💳"),
    ("Keystone", "🗝️"),
    ("Tangem", "💳"),
    ("MetaMask", "🦊"),
    ("Binance", "🟡"),
    ("OKX", "⭕"),
    ("Coin98", "🌐"),
    ("Math Wallet", "📊"),
    ("Guarda", "🛡️"),
    ("TokenPocket", "💰"),
    ("Enkrypt", "🔐"),
    ("Robinhood", "🏹"),
    ("Torus", "🌀"),
    ("Tiplink", "🔗"),
    ("Fuse", "⚡"),
    ("Helium", "📡"),
    ("Bitget", "📈"),
    ("Jupiter", "🪐"),
];

const DEFAULT_LOGO: &str = "💼";

const POPULARITY: &[(&str, u8)] = &[
    ("Phantom", 95),
    ("Solflare", 88),
    ("Trust Wallet", 85),
    ("Exodus", 80),
    ("Backpack", 75),
    ("Coin98", 70),
    ("Glow", 65),
    ("Atomic Wallet", 75),
    ("Coinbase Wallet", 80),
    ("Ledger", 90),
    ("Trezor", 85),
    ("MetaMask", 70),
];

pub fn wallet_logo(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    WALLET_LOGOS
        .iter()
        .find(|(key, _)| lower.contains(&key.to_lowercase()))
        .map_or(DEFAULT_LOGO, |(_, glyph)| *glyph)
}

/// Known names get a fixed score; unknown wallets get a pseudo-random score
/// in [40, 80).
pub fn popularity_score(name: &str) -> u8 {
    let lower = name.to_lowercase();
    if let Some((_, score)) = POPULARITY
        .iter()
        .find(|(key, _)| lower.contains(&key.to_lowercase()))
    {
        return *score;
    }
    rand::thread_rng().gen_range(40..80)
}

/// Keyed on the raw "Category" column ("Cold Wallet"/"Hot Wallet"), not the
/// derived platform category.
pub fn security_level(category: Option<&str>) -> SecurityLevel {
    match category {
        Some("Cold Wallet") => SecurityLevel::High,
        _ => SecurityLevel::Medium,
    }
}
