//! Shared building blocks for the clinic workspace.
//!
//! * [`models`]: the entity records (patients, doctors, specialties, appointments, prescriptions).
//! * [`error`]: domain and input error kinds.
//! * [`config`]: runtime options collected by the command line.
//! * [`utils`]: parsing helpers used by the terminal adapter.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod utils;

#[doc(hidden)]
pub use tracing as __tracing;
