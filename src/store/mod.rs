//! Persistence of chart documents.
//!
//! Charts are saved as `{name, config}` documents keyed by chart name
//! within a namespace. Restoration is name-gated: a stored document only
//! applies when its name matches the requested chart name.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::config::{StoreSettings, StoredChart};

/// Error type for chart persistence.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access chart store: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize chart document: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("No usable store directory")]
    NoStoreDir,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Namespace-scoped load/save of chart documents.
pub trait ChartStore: Send + Sync {
    /// Load the document stored under `name`, if any.
    fn load(&self, name: &str) -> StoreResult<Option<StoredChart>>;

    /// Save (or replace) the document under its own name.
    fn save(&self, chart: &StoredChart) -> StoreResult<()>;
}

// =============================================================================
// In-memory store
// =============================================================================

/// In-memory store, used in tests and as a null persistence backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    charts: Mutex<HashMap<String, StoredChart>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChartStore for MemoryStore {
    fn load(&self, name: &str) -> StoreResult<Option<StoredChart>> {
        Ok(self
            .charts
            .lock()
            .expect("store lock poisoned")
            .get(name)
            .cloned())
    }

    fn save(&self, chart: &StoredChart) -> StoreResult<()> {
        self.charts
            .lock()
            .expect("store lock poisoned")
            .insert(chart.name.clone(), chart.clone());
        Ok(())
    }
}

// =============================================================================
// JSON file store
// =============================================================================

/// File-backed store: one JSON document per namespace, holding every chart
/// in that namespace keyed by name.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open (or create) the store for a namespace at an explicit directory.
    pub fn at<P: Into<PathBuf>>(dir: P, namespace: &str) -> Self {
        Self {
            path: dir.into().join(format!("{namespace}.json")),
        }
    }

    /// Open the store described by [`StoreSettings`]: the configured path,
    /// or `~/.config/chartplan/` when none is set.
    pub fn from_settings(settings: &StoreSettings) -> StoreResult<Self> {
        let dir = match &settings.path {
            Some(path) => PathBuf::from(path),
            None => dirs::config_dir()
                .ok_or(StoreError::NoStoreDir)?
                .join("chartplan"),
        };
        Ok(Self::at(dir, &settings.namespace))
    }

    fn read_all(&self) -> StoreResult<HashMap<String, StoredChart>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, charts: &HashMap<String, StoredChart>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(charts)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl ChartStore for JsonFileStore {
    fn load(&self, name: &str) -> StoreResult<Option<StoredChart>> {
        Ok(self.read_all()?.remove(name))
    }

    fn save(&self, chart: &StoredChart) -> StoreResult<()> {
        let mut charts = self.read_all()?;
        charts.insert(chart.name.clone(), chart.clone());
        self.write_all(&charts)
    }
}

/// Restore a chart configuration by name.
///
/// Returns the stored configuration only when the stored name matches the
/// requested name; anything else (absent or mismatched) yields `None` and
/// the caller falls back to defaults.
pub fn restore(
    store: &dyn ChartStore,
    name: &str,
) -> StoreResult<Option<crate::config::ChartConfig>> {
    match store.load(name)? {
        Some(stored) if stored.name == name => Ok(Some(stored.config)),
        _ => Ok(None),
    }
}
