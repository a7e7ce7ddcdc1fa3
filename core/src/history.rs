//! # Clinical History
//!
//! One append-only log per registered patient. The registry creates it together
//! with the patient and is the only writer.

use clinic_common::models::appointment::Appointment;
use clinic_common::models::patient::Patient;
use clinic_common::models::prescription::Prescription;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicalHistory {
    patient: Patient,
    appointments: Vec<Appointment>,
    prescriptions: Vec<Prescription>,
}

impl ClinicalHistory {
    pub fn new(patient: Patient) -> Self {
        Self {
            patient,
            appointments: Vec::new(),
            prescriptions: Vec::new(),
        }
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    /// Appointments in booking order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Prescriptions in issue order.
    pub fn prescriptions(&self) -> &[Prescription] {
        &self.prescriptions
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty() && self.prescriptions.is_empty()
    }

    pub(crate) fn record_appointment(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }

    pub(crate) fn record_prescription(&mut self, prescription: Prescription) {
        self.prescriptions.push(prescription);
    }
}
