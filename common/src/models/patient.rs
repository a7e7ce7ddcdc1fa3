use chrono::NaiveDate;

/// A registered patient. Identity is the national ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    full_name: String,
    national_id: String,
    birth_date: NaiveDate,
}

impl Patient {
    pub fn new(
        full_name: impl Into<String>,
        national_id: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            national_id: national_id.into(),
            birth_date,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
}
