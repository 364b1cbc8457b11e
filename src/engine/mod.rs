//! Execution engine boundary.
//!
//! The compiler hands finished plans to an implementation of
//! [`QueryEngine`]; execution itself (and any retry of execution failures)
//! is the engine's concern, not this crate's.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::plan::QueryPlan;

/// Rows returned by plan execution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    pub rows: Vec<HashMap<String, serde_json::Value>>,
}

/// Errors surfaced by the execution engine.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Engine unavailable: {0}")]
    Unavailable(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Asynchronous query execution collaborator.
#[async_trait]
pub trait QueryEngine: Send + Sync {
    /// Execute a fully assembled plan and return its rows.
    async fn execute(&self, plan: &QueryPlan) -> EngineResult<RowSet>;
}

/// Test double that records every submitted plan and returns a canned
/// row set.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    plans: std::sync::Mutex<Vec<QueryPlan>>,
    rows: RowSet,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: RowSet) -> Self {
        Self {
            plans: std::sync::Mutex::new(Vec::new()),
            rows,
        }
    }

    /// Plans submitted so far, in order.
    pub fn submitted(&self) -> Vec<QueryPlan> {
        self.plans.lock().expect("plans lock poisoned").clone()
    }
}

#[async_trait]
impl QueryEngine for RecordingEngine {
    async fn execute(&self, plan: &QueryPlan) -> EngineResult<RowSet> {
        self.plans
            .lock()
            .expect("plans lock poisoned")
            .push(plan.clone());
        Ok(self.rows.clone())
    }
}
