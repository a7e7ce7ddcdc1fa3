use chrono::NaiveDateTime;

/// A booked appointment.
///
/// Patient and doctor are referenced by their identity keys; the registry owns
/// the records themselves. The pair (doctor license, date-time) is the slot
/// and is unique across all appointments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    patient_id: String,
    doctor_license: String,
    date_time: NaiveDateTime,
    specialty: String,
}

impl Appointment {
    pub fn new(
        patient_id: impl Into<String>,
        doctor_license: impl Into<String>,
        date_time: NaiveDateTime,
        specialty: impl Into<String>,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            doctor_license: doctor_license.into(),
            date_time,
            specialty: specialty.into(),
        }
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn doctor_license(&self) -> &str {
        &self.doctor_license
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    /// Specialty resolved for the appointment's weekday.
    pub fn specialty(&self) -> &str {
        &self.specialty
    }
}
