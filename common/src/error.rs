//! # Error Kinds
//!
//! [`ClinicError`] is everything the registry can refuse. [`InputError`] covers
//! text that could not be turned into a value before reaching the registry.
//! Neither is fatal; callers report them and carry on.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::models::weekday::DayOfWeek;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClinicError {
    #[error("no patient registered with ID {national_id}")]
    PatientNotFound { national_id: String },

    #[error("no doctor registered with license {license}")]
    DoctorNotFound { license: String },

    #[error("doctor {license} does not practice on {day}")]
    SpecialtyUnavailable { license: String, day: DayOfWeek },

    #[error(
        "doctor {license} already has an appointment at {}",
        .date_time.format("%d/%m/%Y %H:%M")
    )]
    DuplicateAppointment {
        license: String,
        date_time: NaiveDateTime,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid date '{input}', expected {format}")]
    Date { input: String, format: String },

    #[error("invalid date and time '{input}', expected {format}")]
    DateTime { input: String, format: String },

    #[error("unknown weekday '{0}'")]
    Weekday(String),

    #[error("expected a whole number, got '{0}'")]
    Number(String),

    #[error("input ended")]
    EndOfInput,
}
