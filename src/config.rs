use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub csv_path: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
            csv_path: env::var("CSV_PATH")
                .unwrap_or_else(|_| "data/solana-wallet-matrix.csv".to_string())
                .into(),
        })
    }
}
