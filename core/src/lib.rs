//! # Clinic Core
//!
//! The in-memory clinic registry and the scheduling rules around it.
//!
//! * [`clinic`]: the [`Clinic`](clinic::Clinic) registry and its workflows.
//! * [`availability`]: which specialty a doctor practices on a given weekday.
//! * [`history`]: per-patient log of appointments and prescriptions.
//! * [`clock`]: source of capture timestamps.
//!
//! Nothing here prints or logs. Every refusal comes back as a
//! [`ClinicError`](clinic_common::error::ClinicError).

pub mod availability;
pub mod clinic;
pub mod clock;
pub mod history;
