//! # Clinic Registry
//!
//! Owns every patient, doctor, appointment and clinical history, and runs the
//! workflows that create them.
//!
//! Scheduling an appointment goes through a fixed sequence of checks, each of
//! which stops the request on failure:
//! 1. the doctor is registered,
//! 2. the patient is registered,
//! 3. the doctor practices some specialty on the appointment's weekday
//!    (see [`availability`](crate::availability)),
//! 4. the slot (doctor, date-time) is still free.
//!
//! Only then is the appointment appended to the global log and to the patient's
//! history.
//!
//! The registry is a plain owned value. Operations take `&self`/`&mut self` and
//! run to completion; callers sharing one registry between threads must wrap
//! it in their own lock.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;
use clinic_common::error::ClinicError;
use clinic_common::models::appointment::Appointment;
use clinic_common::models::doctor::{Doctor, Specialty};
use clinic_common::models::patient::Patient;
use clinic_common::models::prescription::Prescription;

use crate::availability;
use crate::clock::{Clock, SystemClock};
use crate::history::ClinicalHistory;

type Slot = (String, NaiveDateTime);

pub struct Clinic {
    patients: HashMap<String, Patient>,
    patient_order: Vec<String>,
    doctors: HashMap<String, Doctor>,
    doctor_order: Vec<String>,
    appointments: Vec<Appointment>,
    booked_slots: HashSet<Slot>,
    histories: HashMap<String, ClinicalHistory>,
    clock: Box<dyn Clock>,
}

impl Default for Clinic {
    fn default() -> Self {
        Self::new()
    }
}

impl Clinic {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Creates an empty registry that stamps prescriptions with `clock`.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            patients: HashMap::new(),
            patient_order: Vec::new(),
            doctors: HashMap::new(),
            doctor_order: Vec::new(),
            appointments: Vec::new(),
            booked_slots: HashSet::new(),
            histories: HashMap::new(),
            clock,
        }
    }

    /// Registers `patient` under its national ID together with an empty history.
    ///
    /// Registering an ID again replaces both the patient and the history. The
    /// patient keeps its original position in [`Clinic::patients`].
    pub fn register_patient(&mut self, patient: Patient) {
        let id: String = patient.national_id().to_string();
        if !self.patients.contains_key(&id) {
            self.patient_order.push(id.clone());
        }
        self.histories
            .insert(id.clone(), ClinicalHistory::new(patient.clone()));
        self.patients.insert(id, patient);
    }

    /// Registers `doctor` under its license number, replacing any previous entry.
    pub fn register_doctor(&mut self, doctor: Doctor) {
        let license: String = doctor.license_number().to_string();
        if !self.doctors.contains_key(&license) {
            self.doctor_order.push(license.clone());
        }
        self.doctors.insert(license, doctor);
    }

    /// Appends `specialty` to a registered doctor.
    ///
    /// Returns `false` if no doctor holds `license`.
    pub fn add_specialty_to_doctor(&mut self, license: &str, specialty: Specialty) -> bool {
        match self.doctors.get_mut(license) {
            Some(doctor) => {
                doctor.add_specialty(specialty);
                true
            }
            None => false,
        }
    }

    /// Books an appointment for `patient_id` with the doctor holding `license`.
    ///
    /// # Errors
    /// Checked in this order:
    /// * [`ClinicError::DoctorNotFound`]
    /// * [`ClinicError::PatientNotFound`]
    /// * [`ClinicError::SpecialtyUnavailable`] if the doctor does not work that weekday
    /// * [`ClinicError::DuplicateAppointment`] if the doctor is already booked at `date_time`
    pub fn schedule_appointment(
        &mut self,
        patient_id: &str,
        license: &str,
        date_time: NaiveDateTime,
    ) -> Result<(), ClinicError> {
        let doctor: &Doctor = self.require_doctor(license)?;
        if !self.patients.contains_key(patient_id) {
            return Err(patient_not_found(patient_id));
        }

        let specialty: String = availability::resolve_at(doctor, date_time)?.to_string();

        let slot: Slot = (license.to_string(), date_time);
        if self.booked_slots.contains(&slot) {
            return Err(ClinicError::DuplicateAppointment {
                license: license.to_string(),
                date_time,
            });
        }

        let appointment = Appointment::new(patient_id, license, date_time, specialty);
        self.history_mut(patient_id)?
            .record_appointment(appointment.clone());
        self.booked_slots.insert(slot);
        self.appointments.push(appointment);
        Ok(())
    }

    /// Issues a prescription and files it in the patient's history.
    ///
    /// `medications` is copied; an empty list is accepted. The issue time comes
    /// from the registry's clock.
    ///
    /// # Errors
    /// [`ClinicError::PatientNotFound`] first, then [`ClinicError::DoctorNotFound`].
    pub fn issue_prescription<I, S>(
        &mut self,
        patient_id: &str,
        license: &str,
        medications: I,
    ) -> Result<(), ClinicError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !self.patients.contains_key(patient_id) {
            return Err(patient_not_found(patient_id));
        }
        self.require_doctor(license)?;

        let prescription =
            Prescription::new(patient_id, license, medications, self.clock.now());
        self.history_mut(patient_id)?
            .record_prescription(prescription);
        Ok(())
    }

    /// # Errors
    /// [`ClinicError::PatientNotFound`] if `patient_id` was never registered.
    pub fn clinical_history(&self, patient_id: &str) -> Result<&ClinicalHistory, ClinicError> {
        self.histories
            .get(patient_id)
            .ok_or_else(|| patient_not_found(patient_id))
    }

    /// All appointments in booking order.
    pub fn appointments(&self) -> Vec<Appointment> {
        self.appointments.clone()
    }

    /// All patients in registration order.
    pub fn patients(&self) -> Vec<Patient> {
        self.patient_order
            .iter()
            .filter_map(|id| self.patients.get(id))
            .cloned()
            .collect()
    }

    /// All doctors in registration order.
    pub fn doctors(&self) -> Vec<Doctor> {
        self.doctor_order
            .iter()
            .filter_map(|license| self.doctors.get(license))
            .cloned()
            .collect()
    }

    pub fn find_doctor(&self, license: &str) -> Option<&Doctor> {
        self.doctors.get(license)
    }

    pub fn find_patient(&self, patient_id: &str) -> Option<&Patient> {
        self.patients.get(patient_id)
    }

    fn require_doctor(&self, license: &str) -> Result<&Doctor, ClinicError> {
        self.doctors
            .get(license)
            .ok_or_else(|| ClinicError::DoctorNotFound {
                license: license.to_string(),
            })
    }

    fn history_mut(&mut self, patient_id: &str) -> Result<&mut ClinicalHistory, ClinicError> {
        self.histories
            .get_mut(patient_id)
            .ok_or_else(|| patient_not_found(patient_id))
    }
}

fn patient_not_found(patient_id: &str) -> ClinicError {
    ClinicError::PatientNotFound {
        national_id: patient_id.to_string(),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
