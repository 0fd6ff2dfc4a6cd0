//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config and cache subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters and gauges via the metrics facade)
//! ```
//!
//! # Design Decisions
//! - Structured logging with key-value fields, secrets never logged
//! - Metrics go through the `metrics` facade; installing an exporter is the
//!   embedding application's job, without one they are no-ops

pub mod logging;
pub mod metrics;
