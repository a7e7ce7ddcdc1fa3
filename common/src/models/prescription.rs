use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prescription {
    patient_id: String,
    doctor_license: String,
    medications: Vec<String>,
    issued_at: NaiveDateTime,
}

impl Prescription {
    /// Copies `medications` into a new prescription. An empty list is allowed.
    pub fn new<I, S>(
        patient_id: impl Into<String>,
        doctor_license: impl Into<String>,
        medications: I,
        issued_at: NaiveDateTime,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patient_id: patient_id.into(),
            doctor_license: doctor_license.into(),
            medications: medications.into_iter().map(Into::into).collect(),
            issued_at,
        }
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn doctor_license(&self) -> &str {
        &self.doctor_license
    }

    pub fn medications(&self) -> &[String] {
        &self.medications
    }

    pub fn issued_at(&self) -> NaiveDateTime {
        self.issued_at
    }
}
