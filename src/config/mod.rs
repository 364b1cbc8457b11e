//! Chart configuration types and crate settings.

pub mod chart;
pub mod settings;

pub use chart::{
    AxisConfig, ChartConfig, ChartKind, DonutConfig, MetricConfig, StoredChart, TableConfig,
};
pub use settings::{RuntimeSettings, Settings, SettingsError, StoreSettings};
