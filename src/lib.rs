//! # Chartplan
//!
//! Compiles declarative chart configurations into relational query plans.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        ChartConfig (axis / metric / donut / table)       │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [validation]
//! ┌─────────────────────────────────────────────────────────┐
//! │        Structural checks (presence, conflicts)           │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [resolver]
//! ┌─────────────────────────────────────────────────────────┐
//! │     Typed column roles (Dimension / Measure) against     │
//! │              the data-model catalog                      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [planner]
//! ┌─────────────────────────────────────────────────────────┐
//! │   QueryPlan: reset base + summarize / pivot-wider /      │
//! │              order-by / mutate operations                │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [engine]
//! ┌─────────────────────────────────────────────────────────┐
//! │            Execution collaborator (rows out)             │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`runtime`] module wraps the pipeline in a debounced reactive task,
//! and [`store`] persists chart documents by name.

pub mod compile;
pub mod config;
pub mod engine;
pub mod model;
pub mod plan;
pub mod planner;
pub mod resolver;
pub mod runtime;
pub mod store;
pub mod validation;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::compile::compile;
    pub use crate::config::{
        AxisConfig, ChartConfig, ChartKind, DonutConfig, MetricConfig, Settings, StoredChart,
        TableConfig,
    };
    pub use crate::engine::{EngineError, QueryEngine, RowSet};
    pub use crate::model::{
        AggregateKind, DataModel, Dimension, Measure, ModelQuery, ModelSnapshot,
    };
    pub use crate::plan::{
        DataType, Filter, FilterOp, Literal, Mutation, Operation, QueryPlan, SortDir,
    };
    pub use crate::runtime::{Chart, ChartOutput, ChartRuntime};
    pub use crate::store::{ChartStore, JsonFileStore, MemoryStore};
    pub use crate::validation::ConfigError;
}

// Also export the compile entry point at crate root for convenience
pub use compile::compile;
pub use config::ChartConfig;
pub use plan::{Operation, QueryPlan};
pub use validation::ConfigError;
