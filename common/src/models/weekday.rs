//! # Weekday Vocabulary
//!
//! Doctor schedules are keyed by weekday. Calendar weekdays map onto
//! [`DayOfWeek`] through a pure, total conversion that does not depend on the
//! process locale, and every day has one canonical lowercase name.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, Weekday};

use crate::error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Language used to display weekday names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Weekday on which `date_time` falls.
    pub fn of(date_time: &NaiveDateTime) -> Self {
        Self::from(date_time.weekday())
    }

    /// Canonical lowercase name, e.g. `"monday"`.
    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }

    pub fn localized(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.name(),
            Locale::Es => match self {
                DayOfWeek::Monday => "lunes",
                DayOfWeek::Tuesday => "martes",
                DayOfWeek::Wednesday => "miércoles",
                DayOfWeek::Thursday => "jueves",
                DayOfWeek::Friday => "viernes",
                DayOfWeek::Saturday => "sábado",
                DayOfWeek::Sunday => "domingo",
            },
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayOfWeek {
    type Err = InputError;

    /// Accepts English and Spanish names in any case, with or without accents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let day = match s.trim().to_lowercase().as_str() {
            "monday" | "lunes" => DayOfWeek::Monday,
            "tuesday" | "martes" => DayOfWeek::Tuesday,
            "wednesday" | "miércoles" | "miercoles" => DayOfWeek::Wednesday,
            "thursday" | "jueves" => DayOfWeek::Thursday,
            "friday" | "viernes" => DayOfWeek::Friday,
            "saturday" | "sábado" | "sabado" => DayOfWeek::Saturday,
            "sunday" | "domingo" => DayOfWeek::Sunday,
            _ => return Err(InputError::Weekday(s.trim().to_string())),
        };
        Ok(day)
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "es" | "spanish" | "español" => Ok(Locale::Es),
            _ => Err(format!("unsupported locale: {s}")),
        }
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
