pub mod csv_data;
pub mod wallets;

pub use csv_data::{
    add_wallet, delete_wallet, get_csv_data, AddWalletResponse, CsvDataResponse,
    DeleteWalletRequest, DeleteWalletResponse,
};
pub use wallets::{list_wallets, wallet_stats, WalletListResponse, WalletStatsResponse};
