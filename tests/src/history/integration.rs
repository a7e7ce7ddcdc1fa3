#![cfg(test)]
use clinic_common::error::ClinicError;
use clinic_common::models::patient::Patient;
use chrono::NaiveDate;

use crate::fixtures::{self, LICENSE, PATIENT_ID};

#[test]
fn every_registered_patient_has_a_history() {
    let mut clinic = fixtures::seeded_clinic();
    let ana = Patient::new(
        "Ana Gomez",
        "87654321",
        NaiveDate::from_ymd_opt(1985, 5, 20).unwrap(),
    );
    clinic.register_patient(ana.clone());

    for patient in clinic.patients() {
        let history = clinic
            .clinical_history(patient.national_id())
            .expect("registered patient should have a history");
        assert_eq!(history.patient(), &patient);
    }
    assert_eq!(clinic.clinical_history("87654321").unwrap().patient(), &ana);
}

#[test]
fn prescription_scenario() {
    let mut clinic = fixtures::seeded_clinic();
    let medications: Vec<String> = vec![String::from("MedA"), String::from("MedB")];

    clinic
        .issue_prescription(PATIENT_ID, LICENSE, medications.iter().cloned())
        .unwrap();

    let history = clinic.clinical_history(PATIENT_ID).unwrap();
    let prescriptions = history.prescriptions();
    assert_eq!(prescriptions.len(), 1);
    assert_eq!(prescriptions[0].medications(), medications.as_slice());
    assert_eq!(prescriptions[0].issued_at(), fixtures::issue_time());
    assert_eq!(prescriptions[0].doctor_license(), LICENSE);
}

#[test]
fn empty_prescription_is_recorded() {
    let mut clinic = fixtures::seeded_clinic();
    clinic
        .issue_prescription(PATIENT_ID, LICENSE, Vec::<String>::new())
        .unwrap();

    let history = clinic.clinical_history(PATIENT_ID).unwrap();
    assert_eq!(history.prescriptions().len(), 1);
    assert!(history.prescriptions()[0].medications().is_empty());
}

#[test]
fn history_collects_appointments_and_prescriptions_in_order() {
    let mut clinic = fixtures::seeded_clinic();
    clinic
        .schedule_appointment(PATIENT_ID, LICENSE, fixtures::monday_at(11))
        .unwrap();
    clinic
        .schedule_appointment(PATIENT_ID, LICENSE, fixtures::monday_at(9))
        .unwrap();
    clinic.issue_prescription(PATIENT_ID, LICENSE, ["MedA"]).unwrap();

    let history = clinic.clinical_history(PATIENT_ID).unwrap();
    let times: Vec<_> = history.appointments().iter().map(|a| a.date_time()).collect();
    assert_eq!(times, vec![fixtures::monday_at(11), fixtures::monday_at(9)]);
    assert_eq!(history.prescriptions().len(), 1);
}

#[test]
fn failed_operations_leave_history_untouched() {
    let mut clinic = fixtures::seeded_clinic();
    let slot = fixtures::monday_at(10);
    clinic.schedule_appointment(PATIENT_ID, LICENSE, slot).unwrap();

    let _ = clinic.schedule_appointment(PATIENT_ID, LICENSE, slot);
    let _ = clinic.issue_prescription(PATIENT_ID, "M999", ["MedA"]);

    let history = clinic.clinical_history(PATIENT_ID).unwrap();
    assert_eq!(history.appointments().len(), 1);
    assert!(history.prescriptions().is_empty());
}

#[test]
fn unknown_patient_has_no_history() {
    let clinic = fixtures::seeded_clinic();
    assert!(matches!(
        clinic.clinical_history("00000000"),
        Err(ClinicError::PatientNotFound { .. })
    ));
}

#[test]
fn prescription_errors_check_patient_first() {
    let mut clinic = fixtures::seeded_clinic();
    assert!(matches!(
        clinic.issue_prescription("00000000", "M999", ["MedA"]),
        Err(ClinicError::PatientNotFound { .. })
    ));
    assert!(matches!(
        clinic.issue_prescription(PATIENT_ID, "M999", ["MedA"]),
        Err(ClinicError::DoctorNotFound { .. })
    ));
}
