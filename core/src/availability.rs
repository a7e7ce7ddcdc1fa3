//! # Specialty Availability
//!
//! Decides which specialty a doctor practices on a weekday. The doctor's
//! specialty list is scanned in order and the first entry covering the day
//! wins, so overlapping day sets resolve deterministically.

use chrono::NaiveDateTime;
use clinic_common::error::ClinicError;
use clinic_common::models::doctor::Doctor;
use clinic_common::models::weekday::DayOfWeek;

/// Returns the name of the specialty `doctor` practices on `day`.
///
/// Fails with [`ClinicError::SpecialtyUnavailable`] if no specialty covers the day.
pub fn resolve(doctor: &Doctor, day: DayOfWeek) -> Result<&str, ClinicError> {
    doctor
        .specialties()
        .iter()
        .find(|specialty| specialty.practiced_on(day))
        .map(|specialty| specialty.name())
        .ok_or_else(|| ClinicError::SpecialtyUnavailable {
            license: doctor.license_number().to_string(),
            day,
        })
}

/// Same as [`resolve`], for the weekday on which `date_time` falls.
pub fn resolve_at(doctor: &Doctor, date_time: NaiveDateTime) -> Result<&str, ClinicError> {
    resolve(doctor, DayOfWeek::of(&date_time))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
