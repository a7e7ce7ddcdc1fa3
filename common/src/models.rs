//! # Clinic Records
//!
//! Passive data holders. Identity keys are the patient's national ID and the
//! doctor's license number; everything else points at records through those keys.
//!
//! * [`patient::Patient`], [`doctor::Doctor`] and [`doctor::Specialty`]: registered once, never removed.
//! * [`appointment::Appointment`] and [`prescription::Prescription`]: immutable once created.
//! * [`weekday::DayOfWeek`]: the fixed weekday vocabulary used for schedules.

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod prescription;
pub mod weekday;
