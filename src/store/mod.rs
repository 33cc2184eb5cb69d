// Static sales data store
// Loaded once at startup and read-only for the process lifetime

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// A deal owned by exactly one sales rep.
///
/// Only `client` and `status` are interpreted by the backend. Everything
/// else in the source file (`value`, ...) is preserved verbatim through the
/// flattened map and served back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub status: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One sales representative record from the static dataset.
///
/// Like [`Deal`], uninterpreted fields (`id`, `skills`, `clients`, ...) ride
/// along in `extra` so the sales endpoint reproduces the source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRep {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub deals: Vec<Deal>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Root shape of the data file. A missing `salesReps` key reads as empty.
#[derive(Debug, Clone, Default, Deserialize)]
struct SalesData {
    #[serde(rename = "salesReps", default)]
    sales_reps: Vec<SalesRep>,
}

/// Why a data file failed to load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("data file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only snapshot of the sales dataset.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    reps: Vec<SalesRep>,
}

impl DataStore {
    /// Load the dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path)?;
        let data: SalesData = serde_json::from_str(&contents)?;
        Ok(Self::from_reps(data.sales_reps))
    }

    /// Load the dataset, degrading to an empty store on failure.
    ///
    /// The process keeps serving either way; the sales endpoint returns `[]`
    /// until the file is fixed and the server restarted.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(store) => {
                tracing::info!(
                    "Loaded {} sales reps from {}",
                    store.reps.len(),
                    path.display()
                );
                store
            }
            Err(LoadError::Io(e)) => {
                tracing::warn!(
                    "Could not read data file {} ({}); sales endpoint will return empty results",
                    path.display(),
                    e
                );
                Self::default()
            }
            Err(LoadError::Json(e)) => {
                tracing::warn!(
                    "Could not decode JSON from {} ({}); sales endpoint will return empty results",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Build a store directly from records (tests, embedding).
    pub fn from_reps(reps: Vec<SalesRep>) -> Self {
        Self { reps }
    }

    /// All records, in file order.
    pub fn reps(&self) -> &[SalesRep] {
        &self.reps
    }

    pub fn len(&self) -> usize {
        self.reps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reps.is_empty()
    }
}
