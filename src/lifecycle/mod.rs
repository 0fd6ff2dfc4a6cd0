//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Resolve config → Validate → Decide cache gate → Hand out AppContext
//!
//! Signals (signals.rs):
//!     SIGHUP → Trigger config reload
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then cache
//! - Fail fast: any startup error is fatal

pub mod signals;
pub mod startup;

pub use startup::{bootstrap, AppContext, StartupError};
