//! # Doctors and Specialties
//!
//! A [`Doctor`] owns an ordered list of [`Specialty`] entries. Each entry says
//! which practice area the doctor covers on which weekdays. Day sets may
//! overlap between entries; lookups use list order.

use std::collections::BTreeSet;

use crate::models::weekday::DayOfWeek;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specialty {
    name: String,
    days: BTreeSet<DayOfWeek>,
}

impl Specialty {
    pub fn new(name: impl Into<String>, days: impl IntoIterator<Item = DayOfWeek>) -> Self {
        Self {
            name: name.into(),
            days: days.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days in calendar order, Monday first.
    pub fn days(&self) -> impl Iterator<Item = DayOfWeek> + '_ {
        self.days.iter().copied()
    }

    pub fn practiced_on(&self, day: DayOfWeek) -> bool {
        self.days.contains(&day)
    }
}

/// A registered doctor. Identity is the license number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    full_name: String,
    license_number: String,
    specialties: Vec<Specialty>,
}

impl Doctor {
    pub fn new(full_name: impl Into<String>, license_number: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            license_number: license_number.into(),
            specialties: Vec::new(),
        }
    }

    /// Builder form of [`Doctor::add_specialty`].
    pub fn with_specialty(mut self, specialty: Specialty) -> Self {
        self.specialties.push(specialty);
        self
    }

    pub fn add_specialty(&mut self, specialty: Specialty) {
        self.specialties.push(specialty);
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn license_number(&self) -> &str {
        &self.license_number
    }

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
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
