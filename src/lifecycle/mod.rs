//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Connect database → Start listener
//!
//! Shutdown (shutdown.rs):
//!     Trigger received → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger_on_signal → graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then database, then listener
//! - Fail fast: any startup error is fatal

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
