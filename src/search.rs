//! Filter/search predicates over the wallet view models. Sub-predicates are
//! evaluated independently and composed with logical AND.

use serde::Deserialize;

use crate::models::{SolanaPaySupport, WalletViewModel};

/// Active filter selections, straight from the query string. Absent, empty
/// and "all" selectors match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletFilter {
    pub category: Option<String>,
    pub q: Option<String>,
    pub platform: Option<String>,
    pub custody: Option<String>,
    pub feature: Option<String>,
}

impl WalletFilter {
    pub fn matches(&self, wallet: &WalletViewModel) -> bool {
        self.matches_category(wallet)
            && self.matches_query(wallet)
            && self.matches_platform(wallet)
            && self.matches_custody(wallet)
            && self.matches_feature(wallet)
    }

    fn matches_category(&self, wallet: &WalletViewModel) -> bool {
        match selector(&self.category) {
            None => true,
            Some(sel) => wallet.category.as_str() == sel.to_lowercase(),
        }
    }

    fn matches_query(&self, wallet: &WalletViewModel) -> bool {
        let Some(query) = self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) else {
            return true;
        };
        let query = query.to_lowercase();

        // The literal query "solana pay" is the quick filter: it matches on
        // QR support and skips the substring search entirely.
        if query == "solana pay" {
            return wallet.solana_pay_qr == SolanaPaySupport::Yes;
        }

        wallet.name.to_lowercase().contains(&query)
            || wallet
                .platforms
                .iter()
                .any(|platform| platform.to_lowercase().contains(&query))
            || wallet.custody_model.to_lowercase().contains(&query)
            || wallet.description.to_lowercase().contains(&query)
    }

    fn matches_platform(&self, wallet: &WalletViewModel) -> bool {
        match selector(&self.platform) {
            None => true,
            Some(sel) => {
                let sel = sel.to_lowercase();
                wallet
                    .platforms
                    .iter()
                    .any(|platform| platform.to_lowercase().contains(&sel))
            }
        }
    }

    fn matches_custody(&self, wallet: &WalletViewModel) -> bool {
        match selector(&self.custody) {
            None => true,
            Some(sel) => wallet.custody_model.eq_ignore_ascii_case(sel),
        }
    }

    fn matches_feature(&self, wallet: &WalletViewModel) -> bool {
        match selector(&self.feature) {
            None => true,
            Some(label) => feature_flag(wallet, label),
        }
    }
}

/// Treats missing, empty and "all" selections as no-ops.
fn selector(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

/// Maps a feature dropdown label to the flag it filters on. Both fiat labels
/// share the "supported at all" flag. Unknown labels do not filter.
pub fn feature_flag(wallet: &WalletViewModel, label: &str) -> bool {
    match label {
        "DEX" => wallet.in_app_dex_swap,
        "NFT" => wallet.nft_gallery,
        "Fiat On-ramp" | "Fiat Off-ramp" => wallet.fiat_on_off_ramp,
        "Staking" => wallet.in_app_staking,
        "Push Notifications" => wallet.push_notifications,
        "Solana Pay QR" => wallet.solana_pay_qr == SolanaPaySupport::Yes,
        "Multi-Chain" => wallet.multi_chain,
        _ => true,
    }
}

/// "3/6" style indicator over the six core feature flags.
pub fn feature_count(wallet: &WalletViewModel) -> String {
    format!("{}/6", wallet.enabled_feature_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, SecurityLevel};

    fn wallet(name: &str) -> WalletViewModel {
        WalletViewModel {
            name: name.to_string(),
            category: Category::Browser,
            platforms: vec!["Chrome".to_string(), "iOS".to_string()],
            custody_model: "Self-custody".to_string(),
            in_app_dex_swap: true,
            nft_gallery: false,
            in_app_staking: true,
            fiat_on_off_ramp: true,
            fiat_fully_supported: false,
            push_notifications: false,
            solana_pay_qr: SolanaPaySupport::No,
            multi_chain: false,
            open_source: false,
            logo: "💼".to_string(),
            description: format!("{name} wallet"),
            security: SecurityLevel::Medium,
            popularity: 50,
            image_logo: None,
            website: None,
        }
    }

    fn filter(f: impl FnOnce(&mut WalletFilter)) -> WalletFilter {
        let mut filter = WalletFilter::default();
        f(&mut filter);
        filter
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(WalletFilter::default().matches(&wallet("Phantom")));
    }

    #[test]
    fn all_sentinel_matches_everything() {
        let f = filter(|f| {
            f.category = Some("all".to_string());
            f.custody = Some("All".to_string());
            f.platform = Some("all".to_string());
        });
        assert!(f.matches(&wallet("Phantom")));
    }

    #[test]
    fn category_is_an_exact_match() {
        let f = filter(|f| f.category = Some("browser".to_string()));
        assert!(f.matches(&wallet("Phantom")));

        let f = filter(|f| f.category = Some("hardware".to_string()));
        assert!(!f.matches(&wallet("Phantom")));
    }

    #[test]
    fn query_searches_name_platforms_custody_and_description() {
        assert!(filter(|f| f.q = Some("phan".to_string())).matches(&wallet("Phantom")));
        assert!(filter(|f| f.q = Some("chrome".to_string())).matches(&wallet("Phantom")));
        assert!(filter(|f| f.q = Some("self-custody".to_string())).matches(&wallet("Phantom")));
        assert!(filter(|f| f.q = Some("wallet".to_string())).matches(&wallet("Phantom")));
        assert!(!filter(|f| f.q = Some("ledger".to_string())).matches(&wallet("Phantom")));
    }

    #[test]
    fn solana_pay_query_filters_on_qr_support_only() {
        // This wallet's name even contains the query text; the quick filter
        // still rejects it because QR support is not "Yes".
        let named_after = wallet("Solana Pay Helper");
        let f = filter(|f| f.q = Some("Solana Pay".to_string()));
        assert!(!f.matches(&named_after));

        let mut supported = wallet("Phantom");
        supported.solana_pay_qr = SolanaPaySupport::Yes;
        assert!(f.matches(&supported));

        let mut partial = wallet("Solflare");
        partial.solana_pay_qr = SolanaPaySupport::Partial;
        assert!(!f.matches(&partial));
    }

    #[test]
    fn platform_selection_matches_any_token() {
        assert!(filter(|f| f.platform = Some("iOS".to_string())).matches(&wallet("Phantom")));
        assert!(!filter(|f| f.platform = Some("Android".to_string())).matches(&wallet("Phantom")));
    }

    #[test]
    fn custody_selection_is_exact_case_insensitive() {
        assert!(filter(|f| f.custody = Some("self-custody".to_string())).matches(&wallet("Phantom")));
        assert!(!filter(|f| f.custody = Some("MPC".to_string())).matches(&wallet("Phantom")));
        // Substrings do not match.
        assert!(!filter(|f| f.custody = Some("custody".to_string())).matches(&wallet("Phantom")));
    }

    #[test]
    fn both_fiat_labels_map_to_the_same_flag() {
        let w = wallet("Phantom");
        assert!(feature_flag(&w, "Fiat On-ramp"));
        assert!(feature_flag(&w, "Fiat Off-ramp"));

        let mut no_fiat = wallet("Trezor");
        no_fiat.fiat_on_off_ramp = false;
        assert!(!feature_flag(&no_fiat, "Fiat On-ramp"));
        assert!(!feature_flag(&no_fiat, "Fiat Off-ramp"));
    }

    #[test]
    fn feature_labels_map_to_flags() {
        let w = wallet("Phantom");
        assert!(feature_flag(&w, "DEX"));
        assert!(feature_flag(&w, "Staking"));
        assert!(!feature_flag(&w, "NFT"));
        assert!(!feature_flag(&w, "Push Notifications"));
        assert!(!feature_flag(&w, "Multi-Chain"));
        assert!(!feature_flag(&w, "Solana Pay QR"));
        // Unknown labels do not filter.
        assert!(feature_flag(&w, "Quantum Resistance"));
    }

    #[test]
    fn feature_count_formats_over_six() {
        assert_eq!(feature_count(&wallet("Phantom")), "3/6");
    }
}
