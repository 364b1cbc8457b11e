//! Reactive chart instances.
//!
//! Each chart owns its configuration and plan exclusively; no shared
//! mutable state crosses chart instances. A spawned [`ChartRuntime`]
//! watches two inputs:
//!
//! ```text
//! config edits ──┐
//!                ├─ debounce (quiescence window) ─ compile ─ execute ─ output
//! model/filters ─┘
//! ```
//!
//! Rapid successive edits collapse into a single compile+execute cycle;
//! a compile triggered while a previous execution is outstanding simply
//! supersedes it.

mod chart;

pub use chart::{Chart, ChartOutput, ChartRuntime};
