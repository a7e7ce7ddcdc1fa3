use chrono::{Duration, NaiveDate, NaiveDateTime};
use clinic_common::models::doctor::{Doctor, Specialty};
use clinic_common::models::patient::Patient;
use clinic_common::models::weekday::DayOfWeek;
use clinic_core::clinic::Clinic;
use clinic_core::clock::FixedClock;

pub const PATIENT_ID: &str = "12345678";
pub const LICENSE: &str = "M001";

/// Monday 2 June 2025 at `hour`:00.
pub fn monday_at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 2)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("valid fixture date")
}

/// Same time `weeks` weeks later, which is still a Monday.
pub fn weeks_later(date_time: NaiveDateTime, weeks: i64) -> NaiveDateTime {
    date_time + Duration::weeks(weeks)
}

pub fn issue_time() -> NaiveDateTime {
    monday_at(8)
}

pub fn juan() -> Patient {
    Patient::new(
        "Juan Perez",
        PATIENT_ID,
        NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid birth date"),
    )
}

pub fn house() -> Doctor {
    Doctor::new("Dr. House", LICENSE)
        .with_specialty(Specialty::new("Diagnóstico", [DayOfWeek::Monday]))
}

/// Registry with Juan Perez and Dr. House (Mondays only) and a fixed clock.
pub fn seeded_clinic() -> Clinic {
    let mut clinic = Clinic::with_clock(Box::new(FixedClock(issue_time())));
    clinic.register_patient(juan());
    clinic.register_doctor(house());
    clinic
}
