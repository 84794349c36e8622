//! CSV-backed wallet store: sole authority over the on-disk data file.
//!
//! Every operation is an independent read-parse-mutate-rewrite cycle over the
//! whole file. There is no locking between concurrent appends, so two
//! overlapping writes are a last-writer-wins race. Acceptable for the dataset
//! size this serves (tens to low hundreds of rows).

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// One parsed CSV row, keyed by header, in column order.
pub type RawRow = Map<String, Value>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("CSV parsing error")]
    Parse { details: Vec<String> },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWalletRequest {
    pub wallet_address: Option<String>,
    pub owner_name: Option<String>,
    pub balance: Option<f64>,
    pub currency: Option<String>,
    pub network: Option<String>,
    pub status: Option<String>,
}

/// Record shape persisted for wallets added through the API. Optional fields
/// are filled with defaults before anything touches the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub id: i64,
    pub wallet_address: String,
    pub owner_name: String,
    pub balance: f64,
    pub currency: String,
    pub network: String,
    #[serde(with = "crate::utils::date")]
    pub created_at: NaiveDate,
    pub status: String,
}

impl NormalizedRecord {
    fn to_row(&self) -> RawRow {
        let mut row = RawRow::new();
        row.insert("id".into(), Value::from(self.id));
        row.insert("walletAddress".into(), Value::from(self.wallet_address.clone()));
        row.insert("ownerName".into(), Value::from(self.owner_name.clone()));
        row.insert("balance".into(), Value::from(self.balance));
        row.insert("currency".into(), Value::from(self.currency.clone()));
        row.insert("network".into(), Value::from(self.network.clone()));
        row.insert(
            "createdAt".into(),
            Value::from(self.created_at.format("%Y-%m-%d").to_string()),
        );
        row.insert("status".into(), Value::from(self.status.clone()));
        row
    }
}

#[derive(Debug, Default)]
struct CsvTable {
    headers: Vec<String>,
    rows: Vec<RawRow>,
}

#[derive(Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file and returns the parsed rows in insertion order.
    /// A missing file is an I/O error here; callers that want to treat
    /// absence as an empty dataset go through the mutating operations.
    pub async fn list(&self) -> Result<Vec<RawRow>, StoreError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        Ok(parse(&text)?.rows)
    }

    /// Validates, dedupes on wallet address, appends and rewrites the file.
    /// Returns the normalized record that was stored.
    pub async fn append(&self, new: NewWalletRequest) -> Result<NormalizedRecord, StoreError> {
        let (Some(wallet_address), Some(owner_name)) =
            (non_empty(new.wallet_address), non_empty(new.owner_name))
        else {
            return Err(StoreError::Validation(
                "Wallet address and owner name are required".into(),
            ));
        };

        let mut table = self.read_or_empty().await?;

        // Exact string equality against every stored address.
        let duplicate = table
            .rows
            .iter()
            .any(|row| row.get("walletAddress").and_then(Value::as_str) == Some(wallet_address.as_str()));
        if duplicate {
            return Err(StoreError::Conflict("Wallet address already exists".into()));
        }

        let now = Utc::now();
        let record = NormalizedRecord {
            id: now.timestamp_millis(),
            wallet_address,
            owner_name,
            balance: new.balance.unwrap_or(0.0),
            currency: new.currency.unwrap_or_else(|| "ETH".into()),
            network: new.network.unwrap_or_else(|| "Ethereum".into()),
            created_at: now.date_naive(),
            status: new.status.unwrap_or_else(|| "Active".into()),
        };

        let row = record.to_row();
        for key in row.keys() {
            if !table.headers.iter().any(|h| h == key) {
                table.headers.push(key.clone());
            }
        }
        table.rows.push(row);

        self.write(&table).await?;
        Ok(record)
    }

    /// Removes every row whose wallet address matches exactly, rewriting the
    /// file. NotFound when nothing matched (including a missing file).
    pub async fn remove(&self, wallet_address: &str) -> Result<(), StoreError> {
        if wallet_address.trim().is_empty() {
            return Err(StoreError::Validation("Wallet address is required".into()));
        }

        let mut table = self.read_or_empty().await?;
        let before = table.rows.len();
        table
            .rows
            .retain(|row| row.get("walletAddress").and_then(Value::as_str) != Some(wallet_address));
        if table.rows.len() == before {
            return Err(StoreError::NotFound("Wallet address not found".into()));
        }

        self.write(&table).await
    }

    async fn read_or_empty(&self) -> Result<CsvTable, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => parse(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("CSV file not found, starting a new one");
                Ok(CsvTable::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, table: &CsvTable) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                tokio::fs::create_dir_all(dir).await?;
            }
        }

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&table.headers)?;
        for row in &table.rows {
            let cells: Vec<String> = table
                .headers
                .iter()
                .map(|h| cell_text(row.get(h)))
                .collect();
            writer.write_record(&cells)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

/// Header-delimited parse with dynamic type coercion per cell. Collects every
/// record-level error instead of stopping at the first one.
fn parse(text: &str) -> Result<CsvTable, StoreError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers: Vec<String> = match reader.headers() {
        Ok(h) => h.iter().map(str::to_string).collect(),
        Err(e) => {
            return Err(StoreError::Parse {
                details: vec![e.to_string()],
            })
        }
    };

    let mut rows = Vec::new();
    let mut details = Vec::new();
    for record in reader.records() {
        match record {
            Ok(rec) => {
                if rec.iter().all(|field| field.trim().is_empty()) {
                    continue;
                }
                let mut row = RawRow::new();
                for (i, field) in rec.iter().enumerate() {
                    if let Some(header) = headers.get(i) {
                        row.insert(header.clone(), coerce(field));
                    }
                }
                rows.push(row);
            }
            Err(e) => details.push(e.to_string()),
        }
    }

    if !details.is_empty() {
        return Err(StoreError::Parse { details });
    }
    Ok(CsvTable { headers, rows })
}

/// Dynamic typing: integers, floats and boolean literals become typed values,
/// empty cells become null, everything else stays a string.
fn coerce(field: &str) -> Value {
    if field.is_empty() {
        return Value::Null;
    }
    if let Ok(n) = field.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = field.parse::<f64>() {
        if f.is_finite() {
            return Value::from(f);
        }
    }
    match field {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::from(field),
    }
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
