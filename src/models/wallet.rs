use serde::Serialize;
use serde_json::Value;

use crate::models::lookup;
use crate::store::RawRow;

/// Derived from the Platforms field by substring matching, in a fixed
/// precedence order: hardware > browser > mobile > desktop > other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Browser,
    Mobile,
    Desktop,
    Hardware,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Browser => "browser",
            Category::Mobile => "mobile",
            Category::Desktop => "desktop",
            Category::Hardware => "hardware",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tri-state Solana Pay QR support. Anything other than the literal "Yes" or
/// "Partial" column values reads as No.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolanaPaySupport {
    Yes,
    Partial,
    No,
}

impl SolanaPaySupport {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("Yes") => SolanaPaySupport::Yes,
            Some("Partial") => SolanaPaySupport::Partial,
            _ => SolanaPaySupport::No,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SecurityLevel {
    High,
    Medium,
}

/// The normalized, UI-ready representation of one wallet.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletViewModel {
    pub name: String,
    pub category: Category,
    pub platforms: Vec<String>,
    pub custody_model: String,
    pub in_app_dex_swap: bool,
    pub nft_gallery: bool,
    pub in_app_staking: bool,
    /// True for "Yes" or "Partial" - fiat supported at all.
    pub fiat_on_off_ramp: bool,
    /// True only for "Yes" - fiat fully supported.
    pub fiat_fully_supported: bool,
    pub push_notifications: bool,
    pub solana_pay_qr: SolanaPaySupport,
    pub multi_chain: bool,
    pub open_source: bool,
    pub logo: String,
    pub description: String,
    pub security: SecurityLevel,
    pub popularity: u8,
    pub image_logo: Option<String>,
    pub website: Option<String>,
}

impl WalletViewModel {
    /// Maps a raw CSV row to the view model. Rows without a name (empty rows,
    /// manager-variant rows) are dropped.
    pub fn from_row(row: &RawRow) -> Option<Self> {
        let name = text(row, "Name")
            .map(str::to_string)
            .filter(|n| !n.trim().is_empty())?;

        let platforms_raw = text(row, "Platforms");
        let fiat = text(row, "Fiat On/Off Ramp").map(str::trim);

        Some(Self {
            category: category_from_platforms(platforms_raw),
            platforms: split_platforms(platforms_raw),
            custody_model: text(row, "Custody Model").unwrap_or("Unknown").to_string(),
            in_app_dex_swap: yes(row, "In-app DEX Swap"),
            nft_gallery: yes(row, "NFT Gallery"),
            in_app_staking: yes(row, "In-app Staking"),
            fiat_on_off_ramp: matches!(fiat, Some("Yes" | "Partial")),
            fiat_fully_supported: fiat == Some("Yes"),
            push_notifications: yes(row, "Push Notifications"),
            solana_pay_qr: SolanaPaySupport::parse(text(row, "Solana Pay QR")),
            multi_chain: yes(row, "Multi-Chain"),
            open_source: yes(row, "Open Source"),
            logo: lookup::wallet_logo(&name).to_string(),
            description: text(row, "Notes")
                .map(str::to_string)
                .unwrap_or_else(|| format!("{name} wallet")),
            security: lookup::security_level(text(row, "Category")),
            popularity: lookup::popularity_score(&name),
            image_logo: text(row, "Logos").map(str::to_string),
            website: text(row, "Website").map(str::to_string),
            name,
        })
    }

    /// How many of the six core feature flags are enabled (the "3/6" badge).
    pub fn enabled_feature_count(&self) -> usize {
        [
            self.in_app_dex_swap,
            self.nft_gallery,
            self.in_app_staking,
            self.fiat_on_off_ramp,
            self.push_notifications,
            self.multi_chain,
        ]
        .iter()
        .filter(|enabled| **enabled)
        .count()
    }
}

/// Precedence order matters: a Platforms string matching several substrings
/// classifies as the first hit. "Hardware;Chrome" is hardware, not browser.
pub fn category_from_platforms(platforms: Option<&str>) -> Category {
    let Some(platforms) = platforms else {
        return Category::Other;
    };
    let p = platforms.to_lowercase();
    if p.contains("hardware") {
        return Category::Hardware;
    }
    if p.contains("chrome") || p.contains("firefox") || p.contains("edge") {
        return Category::Browser;
    }
    if p.contains("ios") || p.contains("android") {
        return Category::Mobile;
    }
    if p.contains("desktop") {
        return Category::Desktop;
    }
    Category::Other
}

pub fn split_platforms(platforms: Option<&str>) -> Vec<String> {
    platforms
        .map(|p| {
            p.split(';')
                .map(|token| token.trim().to_string())
                .filter(|token| !token.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn text<'a>(row: &'a RawRow, key: &str) -> Option<&'a str> {
    row.get(key).and_then(Value::as_str)
}

/// True iff the trimmed column value is exactly the literal "Yes".
fn yes(row: &RawRow, key: &str) -> bool {
    text(row, key).map(str::trim) == Some("Yes")
}
