// src/runtime/chart.rs
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use crate::compile::compile;
use crate::config::{ChartConfig, ChartKind, Settings, StoredChart};
use crate::engine::{QueryEngine, RowSet};
use crate::model::ModelSnapshot;
use crate::store::{self, ChartStore, StoreResult};
use crate::validation::ConfigError;

/// Latest result of a chart's compile+execute cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutput {
    /// No cycle has completed yet.
    Pending,
    /// Rows from the most recent successful execution.
    Rows(RowSet),
    /// The configuration failed validation or resolution; no plan was
    /// submitted.
    ConfigError(ConfigError),
    /// The engine rejected or failed the plan.
    EngineError(String),
}

/// A named chart: kind, configuration, and identity for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub name: String,
    pub config: ChartConfig,
}

impl Chart {
    pub fn new(name: &str, config: ChartConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    /// Construct a chart, restoring its stored configuration when the
    /// store holds a document under this exact name; defaults otherwise.
    pub fn restore_or_default(
        name: &str,
        kind: ChartKind,
        store: &dyn ChartStore,
    ) -> StoreResult<Self> {
        let config = match store::restore(store, name)? {
            Some(config) => config,
            None => ChartConfig::default_for(kind),
        };
        Ok(Self::new(name, config))
    }
}

/// Handle to a spawned reactive chart instance.
///
/// The background task observes two independent inputs - configuration
/// edits and upstream model snapshots - and debounces both with a single
/// quiescence window so rapid successive edits collapse into one
/// compile+execute cycle. Each compile replaces prior plan state
/// (last-write-wins); in-flight execution is never cancelled here.
pub struct ChartRuntime {
    name: String,
    config_tx: watch::Sender<ChartConfig>,
    output_rx: watch::Receiver<ChartOutput>,
    store: Arc<dyn ChartStore>,
    task: tokio::task::JoinHandle<()>,
}

impl ChartRuntime {
    /// Spawn the chart's recompute task.
    pub fn spawn(
        chart: Chart,
        model_rx: watch::Receiver<ModelSnapshot>,
        engine: Arc<dyn QueryEngine>,
        store: Arc<dyn ChartStore>,
        settings: &Settings,
    ) -> Self {
        let (config_tx, config_rx) = watch::channel(chart.config);
        let (output_tx, output_rx) = watch::channel(ChartOutput::Pending);
        let debounce = settings.debounce();

        let task = tokio::spawn(run(config_rx, model_rx, engine, output_tx, debounce));

        Self {
            name: chart.name,
            config_tx,
            output_rx,
            store,
            task,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the chart's configuration: persists the document, then
    /// notifies the recompute task.
    pub fn set_config(&self, config: ChartConfig) -> StoreResult<()> {
        self.store.save(&StoredChart {
            name: self.name.clone(),
            config: config.clone(),
        })?;
        // Receiver only closes when the task has exited; nothing to notify.
        let _ = self.config_tx.send(config);
        Ok(())
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> ChartConfig {
        self.config_tx.borrow().clone()
    }

    /// Watch the latest compile+execute outcome.
    pub fn output(&self) -> watch::Receiver<ChartOutput> {
        self.output_rx.clone()
    }
}

impl Drop for ChartRuntime {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    mut config_rx: watch::Receiver<ChartConfig>,
    mut model_rx: watch::Receiver<ModelSnapshot>,
    engine: Arc<dyn QueryEngine>,
    output_tx: watch::Sender<ChartOutput>,
    debounce: Duration,
) {
    // First cycle runs against the initial (possibly restored) inputs.
    recompute(&mut config_rx, &mut model_rx, &engine, &output_tx).await;

    loop {
        tokio::select! {
            res = config_rx.changed() => {
                if res.is_err() {
                    return;
                }
            }
            res = model_rx.changed() => {
                if res.is_err() {
                    return;
                }
            }
        }

        // Quiescence window: keep absorbing edits until none arrive for a
        // full debounce interval.
        loop {
            tokio::select! {
                _ = time::sleep(debounce) => break,
                res = config_rx.changed() => {
                    if res.is_err() {
                        return;
                    }
                }
                res = model_rx.changed() => {
                    if res.is_err() {
                        return;
                    }
                }
            }
        }

        recompute(&mut config_rx, &mut model_rx, &engine, &output_tx).await;
    }
}

async fn recompute(
    config_rx: &mut watch::Receiver<ChartConfig>,
    model_rx: &mut watch::Receiver<ModelSnapshot>,
    engine: &Arc<dyn QueryEngine>,
    output_tx: &watch::Sender<ChartOutput>,
) {
    let config = config_rx.borrow_and_update().clone();
    let snapshot = model_rx.borrow_and_update().clone();

    let output = match compile(&config, &snapshot.model, &snapshot.filters) {
        Ok(plan) => match engine.execute(&plan).await {
            Ok(rows) => ChartOutput::Rows(rows),
            Err(err) => ChartOutput::EngineError(err.to_string()),
        },
        Err(err) => ChartOutput::ConfigError(err),
    };

    let _ = output_tx.send(output);
}
