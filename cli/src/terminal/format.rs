//! Plain-text renderings of clinic records.
//!
//! Nothing here colors its output; [`print`](crate::terminal::print) decides
//! how lines look on the terminal.

use clinic_common::config::Config;
use clinic_common::models::appointment::Appointment;
use clinic_common::models::doctor::{Doctor, Specialty};
use clinic_common::models::patient::Patient;
use clinic_common::models::prescription::Prescription;
use clinic_common::models::weekday::Locale;
use clinic_core::clinic::Clinic;

pub fn patient(patient: &Patient) -> String {
    format!("{} (ID: {})", patient.full_name(), patient.national_id())
}

/// Short form used when a doctor is referenced from another record.
pub fn doctor_ref(doctor: &Doctor) -> String {
    format!("{} (License: {})", doctor.full_name(), doctor.license_number())
}

pub fn doctor(doctor: &Doctor, locale: Locale) -> String {
    let specialties: String = if doctor.specialties().is_empty() {
        String::from("none")
    } else {
        doctor
            .specialties()
            .iter()
            .map(|s| specialty(s, locale))
            .collect::<Vec<String>>()
            .join(", ")
    };
    format!("{} - Specialties: {}", doctor_ref(doctor), specialties)
}

pub fn specialty(specialty: &Specialty, locale: Locale) -> String {
    let days: String = specialty
        .days()
        .map(|day| day.localized(locale))
        .collect::<Vec<&str>>()
        .join(", ");
    format!("{} (Days: {})", specialty.name(), days)
}

pub fn appointment(appointment: &Appointment, clinic: &Clinic, cfg: &Config) -> String {
    format!(
        "Appointment on {} - {} with {} [{}]",
        appointment.date_time().format(&cfg.date_time_format),
        patient_by_id(clinic, appointment.patient_id()),
        doctor_by_license(clinic, appointment.doctor_license()),
        appointment.specialty()
    )
}

pub fn prescription(prescription: &Prescription, clinic: &Clinic, cfg: &Config) -> String {
    let medications: String = if prescription.medications().is_empty() {
        String::from("no medications")
    } else {
        prescription.medications().join(", ")
    };
    format!(
        "Prescription of {} - {} with {}: {}",
        prescription.issued_at().format(&cfg.date_format),
        patient_by_id(clinic, prescription.patient_id()),
        doctor_by_license(clinic, prescription.doctor_license()),
        medications
    )
}

/// Human hint for a `chrono` format string, e.g. `%d/%m/%Y %H:%M` -> `dd/mm/yyyy HH:MM`.
pub fn format_hint(format: &str) -> String {
    format
        .replace("%d", "dd")
        .replace("%m", "mm")
        .replace("%Y", "yyyy")
        .replace("%H", "HH")
        .replace("%M", "MM")
}

fn patient_by_id(clinic: &Clinic, patient_id: &str) -> String {
    clinic
        .find_patient(patient_id)
        .map(patient)
        .unwrap_or_else(|| format!("ID {patient_id}"))
}

fn doctor_by_license(clinic: &Clinic, license: &str) -> String {
    clinic
        .find_doctor(license)
        .map(doctor_ref)
        .unwrap_or_else(|| format!("License {license}"))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
