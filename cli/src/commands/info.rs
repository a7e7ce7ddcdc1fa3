use colored::*;

use clinic_common::config::Config;
use clinic_common::models::weekday::{DayOfWeek, Locale};

use crate::cprint;
use crate::terminal::{
    colors, format,
    print::{self, GLOBAL_KEY_WIDTH},
};

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    print::print(
        &"Keeps a clinic's patients, doctors, appointments, prescriptions and clinical histories."
            .color(colors::TEXT_DEFAULT)
            .to_string(),
    );
    cprint!();

    GLOBAL_KEY_WIDTH.set(
        DayOfWeek::ALL
            .iter()
            .map(|day| day.name().len())
            .max()
            .unwrap_or(0),
    );

    print::header("accepted weekdays", cfg.quiet);
    for day in DayOfWeek::ALL {
        let value: ColoredString = day.localized(Locale::Es).color(colors::SPECIALTY);
        print::aligned_line(day.name(), value);
    }

    print::header("input formats", cfg.quiet);
    GLOBAL_KEY_WIDTH.set("Date and time".len());
    print::aligned_line("Birth date", format::format_hint(&cfg.date_format));
    print::aligned_line("Date and time", format::format_hint(&cfg.date_time_format));
    print::aligned_line("Lists", "comma-separated");

    print::end_of_program();
    Ok(())
}
