#![cfg(test)]
use clinic_common::error::ClinicError;
use clinic_common::models::doctor::{Doctor, Specialty};
use clinic_common::models::weekday::DayOfWeek;
use clinic_core::clinic::Clinic;

use crate::fixtures::{self, LICENSE, PATIENT_ID};

/// Register a patient and a Monday doctor, book a Monday, then hit the
/// duplicate slot and an unknown license.
#[test]
fn booking_scenario() {
    let mut clinic: Clinic = fixtures::seeded_clinic();
    let slot = fixtures::monday_at(10);

    clinic
        .schedule_appointment(PATIENT_ID, LICENSE, slot)
        .expect("first booking should succeed");
    assert_eq!(clinic.appointments().len(), 1);

    let duplicate = clinic.schedule_appointment(PATIENT_ID, LICENSE, slot);
    assert!(
        matches!(duplicate, Err(ClinicError::DuplicateAppointment { .. })),
        "Expected a duplicate slot error, got {:?}",
        duplicate
    );

    let unknown = clinic.schedule_appointment(PATIENT_ID, "M999", slot);
    assert_eq!(
        unknown,
        Err(ClinicError::DoctorNotFound {
            license: String::from("M999")
        })
    );

    assert_eq!(clinic.appointments().len(), 1);
}

#[test]
fn doctor_is_checked_before_patient() {
    let mut clinic = fixtures::seeded_clinic();
    let result = clinic.schedule_appointment("00000000", "M999", fixtures::monday_at(10));
    assert!(matches!(result, Err(ClinicError::DoctorNotFound { .. })));

    let result = clinic.schedule_appointment("00000000", LICENSE, fixtures::monday_at(10));
    assert!(matches!(result, Err(ClinicError::PatientNotFound { .. })));
}

#[test]
fn unavailable_day_is_checked_before_duplicates() {
    let mut clinic = fixtures::seeded_clinic();
    let tuesday = fixtures::monday_at(10) + chrono::Duration::days(1);

    let result = clinic.schedule_appointment(PATIENT_ID, LICENSE, tuesday);
    assert_eq!(
        result,
        Err(ClinicError::SpecialtyUnavailable {
            license: String::from(LICENSE),
            day: DayOfWeek::Tuesday,
        })
    );
}

#[test]
fn slot_is_doctor_and_exact_time() {
    let mut clinic = fixtures::seeded_clinic();
    clinic.register_doctor(
        Doctor::new("Dr. Cuddy", "M002")
            .with_specialty(Specialty::new("Endocrinology", [DayOfWeek::Monday])),
    );

    let slot = fixtures::monday_at(10);
    clinic.schedule_appointment(PATIENT_ID, LICENSE, slot).unwrap();
    clinic.schedule_appointment(PATIENT_ID, "M002", slot).unwrap();
    clinic
        .schedule_appointment(PATIENT_ID, LICENSE, fixtures::monday_at(11))
        .unwrap();
    clinic
        .schedule_appointment(PATIENT_ID, LICENSE, fixtures::weeks_later(slot, 1))
        .unwrap();

    let specialties: Vec<String> = clinic
        .appointments()
        .iter()
        .map(|a| a.specialty().to_string())
        .collect();
    assert_eq!(
        specialties,
        ["Diagnóstico", "Endocrinology", "Diagnóstico", "Diagnóstico"]
    );
}

#[test]
fn specialty_added_later_is_used_for_new_bookings() {
    let mut clinic = fixtures::seeded_clinic();
    let friday = fixtures::monday_at(9) + chrono::Duration::days(4);

    assert!(clinic.schedule_appointment(PATIENT_ID, LICENSE, friday).is_err());
    assert!(clinic.add_specialty_to_doctor(
        LICENSE,
        Specialty::new("Infectology", [DayOfWeek::Friday, DayOfWeek::Monday]),
    ));
    clinic.schedule_appointment(PATIENT_ID, LICENSE, friday).unwrap();
    clinic
        .schedule_appointment(PATIENT_ID, LICENSE, fixtures::monday_at(9))
        .unwrap();

    let appointments = clinic.appointments();
    assert_eq!(appointments[0].specialty(), "Infectology");
    // Mondays stay with the first specialty in the list
    assert_eq!(appointments[1].specialty(), "Diagnóstico");
}

#[test]
fn independent_registries_do_not_share_state() {
    let mut first = fixtures::seeded_clinic();
    let second = fixtures::seeded_clinic();

    first
        .schedule_appointment(PATIENT_ID, LICENSE, fixtures::monday_at(10))
        .unwrap();

    assert_eq!(first.appointments().len(), 1);
    assert!(second.appointments().is_empty());
}
