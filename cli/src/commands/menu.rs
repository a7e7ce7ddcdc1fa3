//! # Interactive Menu
//!
//! The text front end of the clinic. It reads raw answers, turns them into
//! values with [`clinic_common::utils::input`] and hands them to the
//! [`Clinic`] registry. Domain and input errors are reported and the menu is
//! shown again; only I/O failures end the session early.

use std::io::{self, BufRead};
use std::str::FromStr;

use colored::*;
use console::Term;

use clinic_common::config::Config;
use clinic_common::error::{ClinicError, InputError};
use clinic_common::models::doctor::{Doctor, Specialty};
use clinic_common::models::patient::Patient;
use clinic_common::utils::input;
use clinic_common::{error, success, warn};
use clinic_core::clinic::Clinic;

use crate::cprint;
use crate::terminal::{colors, format, print};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    RegisterPatient,
    RegisterDoctor,
    ScheduleAppointment,
    AddSpecialty,
    IssuePrescription,
    ShowHistory,
    ListAppointments,
    ListPatients,
    ListDoctors,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 10] = [
        MenuOption::RegisterPatient,
        MenuOption::RegisterDoctor,
        MenuOption::ScheduleAppointment,
        MenuOption::AddSpecialty,
        MenuOption::IssuePrescription,
        MenuOption::ShowHistory,
        MenuOption::ListAppointments,
        MenuOption::ListPatients,
        MenuOption::ListDoctors,
        MenuOption::Exit,
    ];

    pub fn key(self) -> char {
        match self {
            MenuOption::RegisterPatient => '1',
            MenuOption::RegisterDoctor => '2',
            MenuOption::ScheduleAppointment => '3',
            MenuOption::AddSpecialty => '4',
            MenuOption::IssuePrescription => '5',
            MenuOption::ShowHistory => '6',
            MenuOption::ListAppointments => '7',
            MenuOption::ListPatients => '8',
            MenuOption::ListDoctors => '9',
            MenuOption::Exit => '0',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::RegisterPatient => "Register patient",
            MenuOption::RegisterDoctor => "Register doctor",
            MenuOption::ScheduleAppointment => "Schedule appointment",
            MenuOption::AddSpecialty => "Add specialty to doctor",
            MenuOption::IssuePrescription => "Issue prescription",
            MenuOption::ShowHistory => "Show clinical history",
            MenuOption::ListAppointments => "List appointments",
            MenuOption::ListPatients => "List patients",
            MenuOption::ListDoctors => "List doctors",
            MenuOption::Exit => "Exit",
        }
    }
}

impl FromStr for MenuOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        MenuOption::ALL
            .into_iter()
            .find(|option| s.len() == 1 && s.starts_with(option.key()))
            .ok_or_else(|| format!("invalid option: '{s}'"))
    }
}

/// Runs the menu on standard input until the user exits.
pub fn menu(cfg: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut session = MenuSession::new(Clinic::new(), stdin.lock(), cfg);
    session.run()?;
    session.summary();
    print::end_of_program();
    Ok(())
}

pub struct MenuSession<'a, R: BufRead> {
    clinic: Clinic,
    input: R,
    cfg: &'a Config,
    term: Term,
}

impl<'a, R: BufRead> MenuSession<'a, R> {
    pub fn new(clinic: Clinic, input: R, cfg: &'a Config) -> Self {
        Self {
            clinic,
            input,
            cfg,
            term: Term::stdout(),
        }
    }

    pub fn clinic(&self) -> &Clinic {
        &self.clinic
    }

    /// Shows the menu and handles answers until "exit" or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.show_menu();

            let answer: String = match self.ask("Option") {
                Ok(answer) => answer,
                Err(e) if is_end_of_input(&e) => break,
                Err(e) => return Err(e),
            };

            let option: MenuOption = match answer.parse() {
                Ok(option) => option,
                Err(msg) => {
                    warn!("{msg}");
                    continue;
                }
            };

            if option == MenuOption::Exit {
                success!("Goodbye!");
                break;
            }

            match self.dispatch(option) {
                Ok(()) => {}
                Err(e) if is_end_of_input(&e) => break,
                Err(e) => report(e)?,
            }
        }
        Ok(())
    }

    pub fn summary(&self) {
        let patients: ColoredString = format!("{} patients", self.clinic().patients().len())
            .bold()
            .green();
        let appointments: ColoredString =
            format!("{} appointments", self.clinic().appointments().len())
                .bold()
                .yellow();
        let output: String = format!("Session closed: {patients} and {appointments} on record");

        match self.cfg.quiet {
            0 => print::centerln(&output),
            _ => success!("{output}"),
        }
    }

    fn dispatch(&mut self, option: MenuOption) -> anyhow::Result<()> {
        match option {
            MenuOption::RegisterPatient => self.register_patient(),
            MenuOption::RegisterDoctor => self.register_doctor(),
            MenuOption::ScheduleAppointment => self.schedule_appointment(),
            MenuOption::AddSpecialty => self.add_specialty(),
            MenuOption::IssuePrescription => self.issue_prescription(),
            MenuOption::ShowHistory => self.show_history(),
            MenuOption::ListAppointments => {
                self.list_appointments();
                Ok(())
            }
            MenuOption::ListPatients => {
                self.list_patients();
                Ok(())
            }
            MenuOption::ListDoctors => {
                self.list_doctors();
                Ok(())
            }
            MenuOption::Exit => Ok(()),
        }
    }

    fn show_menu(&self) {
        cprint!();
        print::header("clinic menu", self.cfg.quiet);
        for option in MenuOption::ALL {
            print::menu_entry(option.key(), option.label());
        }
    }

    fn ask(&mut self, label: &str) -> anyhow::Result<String> {
        self.term
            .write_str(&format!("{} {}: ", ">".color(colors::SEPARATOR), label))?;
        self.term.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::EndOfInput.into());
        }
        Ok(line.trim().to_string())
    }

    fn ask_specialty(&mut self) -> anyhow::Result<Specialty> {
        let name: String = self.ask("Specialty")?;
        let days = input::parse_days(&self.ask("Days (comma-separated)")?)?;
        Ok(Specialty::new(name, days))
    }

    fn register_patient(&mut self) -> anyhow::Result<()> {
        let name: String = self.ask("Full name")?;
        let national_id: String = self.ask("National ID")?;
        let hint: String = format::format_hint(&self.cfg.date_format);
        let birth_date =
            input::parse_date(&self.ask(&format!("Birth date ({hint})"))?, &self.cfg.date_format)?;

        self.clinic
            .register_patient(Patient::new(name, national_id.as_str(), birth_date));
        success!("Patient {national_id} registered");
        Ok(())
    }

    fn register_doctor(&mut self) -> anyhow::Result<()> {
        let name: String = self.ask("Full name")?;
        let license: String = self.ask("License number")?;
        let count: usize = input::parse_count(&self.ask("How many specialties")?)?;

        let mut doctor = Doctor::new(name, license.as_str());
        for _ in 0..count {
            doctor.add_specialty(self.ask_specialty()?);
        }

        self.clinic.register_doctor(doctor);
        success!("Doctor {license} registered");
        Ok(())
    }

    fn schedule_appointment(&mut self) -> anyhow::Result<()> {
        let patient_id: String = self.ask("Patient ID")?;
        let license: String = self.ask("Doctor license")?;
        let hint: String = format::format_hint(&self.cfg.date_time_format);
        let date_time = input::parse_date_time(
            &self.ask(&format!("Date and time ({hint})"))?,
            &self.cfg.date_time_format,
        )?;

        self.clinic
            .schedule_appointment(&patient_id, &license, date_time)?;
        success!("Appointment booked");
        Ok(())
    }

    fn add_specialty(&mut self) -> anyhow::Result<()> {
        let license: String = self.ask("Doctor license")?;
        if self.clinic.find_doctor(&license).is_none() {
            warn!("Doctor {license} not found");
            return Ok(());
        }

        let specialty: Specialty = self.ask_specialty()?;
        self.clinic.add_specialty_to_doctor(&license, specialty);
        success!("Specialty added to doctor {license}");
        Ok(())
    }

    fn issue_prescription(&mut self) -> anyhow::Result<()> {
        let patient_id: String = self.ask("Patient ID")?;
        let license: String = self.ask("Doctor license")?;
        let medications: Vec<String> = input::split_list(&self.ask("Medications (comma-separated)")?);

        self.clinic
            .issue_prescription(&patient_id, &license, medications)?;
        success!("Prescription issued");
        Ok(())
    }

    fn show_history(&mut self) -> anyhow::Result<()> {
        let patient_id: String = self.ask("Patient ID")?;
        let history = self.clinic.clinical_history(&patient_id)?;

        print::header("clinical history", self.cfg.quiet);
        print::print_status(format::patient(history.patient()));

        let appointments: Vec<String> = history
            .appointments()
            .iter()
            .map(|a| format::appointment(a, &self.clinic, self.cfg))
            .collect();
        print::tree_head(appointments.len(), "Appointments");
        print::as_tree_one_level(&appointments);

        let prescriptions: Vec<String> = history
            .prescriptions()
            .iter()
            .map(|p| format::prescription(p, &self.clinic, self.cfg))
            .collect();
        print::tree_head(prescriptions.len(), "Prescriptions");
        print::as_tree_one_level(&prescriptions);
        Ok(())
    }

    fn list_appointments(&self) {
        let appointments = self.clinic.appointments();
        if appointments.is_empty() {
            warn!("No appointments.");
            return;
        }
        print::header("appointments", self.cfg.quiet);
        for appointment in &appointments {
            print::print_status(format::appointment(appointment, &self.clinic, self.cfg));
        }
    }

    fn list_patients(&self) {
        let patients = self.clinic.patients();
        if patients.is_empty() {
            warn!("No patients.");
            return;
        }
        print::header("patients", self.cfg.quiet);
        for patient in &patients {
            print::print_status(format::patient(patient));
        }
    }

    fn list_doctors(&self) {
        let doctors = self.clinic.doctors();
        if doctors.is_empty() {
            warn!("No doctors.");
            return;
        }
        print::header("doctors", self.cfg.quiet);
        for doctor in &doctors {
            print::print_status(format::doctor(doctor, self.cfg.locale));
        }
    }
}

fn is_end_of_input(e: &anyhow::Error) -> bool {
    matches!(e.downcast_ref::<InputError>(), Some(InputError::EndOfInput))
}

/// Reports domain and input errors; anything else is passed back up.
fn report(e: anyhow::Error) -> anyhow::Result<()> {
    if let Some(clinic_error) = e.downcast_ref::<ClinicError>() {
        error!("{clinic_error}");
        return Ok(());
    }
    if let Some(input_error) = e.downcast_ref::<InputError>() {
        error!("{input_error}");
        return Ok(());
    }
    Err(e)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const REGISTER_JUAN: &str = "1\nJuan Perez\n12345678\n01/01/1990\n";
    const REGISTER_HOUSE: &str = "2\nDr. House\nM001\n1\nDiagnóstico\nmonday\n";

    fn run_script(script: &str) -> Clinic {
        let cfg = Config::default();
        let mut session = MenuSession::new(Clinic::new(), Cursor::new(script.to_string()), &cfg);
        session.run().unwrap();
        session.clinic
    }

    #[test]
    fn test_option_parsing() {
        assert_eq!("1".parse::<MenuOption>(), Ok(MenuOption::RegisterPatient));
        assert_eq!(" 0 ".parse::<MenuOption>(), Ok(MenuOption::Exit));
        assert!("10".parse::<MenuOption>().is_err());
        assert!("x".parse::<MenuOption>().is_err());
        assert!("".parse::<MenuOption>().is_err());
    }

    #[test]
    fn test_register_and_schedule() {
        let script = format!("{REGISTER_JUAN}{REGISTER_HOUSE}3\n12345678\nM001\n02/06/2025 10:00\n0\n");
        let clinic = run_script(&script);

        assert_eq!(clinic.patients().len(), 1);
        assert_eq!(clinic.doctors()[0].specialties().len(), 1);
        assert_eq!(clinic.appointments().len(), 1);
        assert_eq!(clinic.appointments()[0].specialty(), "Diagnóstico");
    }

    #[test]
    fn test_domain_errors_do_not_end_session() {
        let script = format!(
            "{REGISTER_JUAN}{REGISTER_HOUSE}\
             3\n12345678\nM999\n02/06/2025 10:00\n\
             3\n12345678\nM001\n03/06/2025 10:00\n\
             3\n12345678\nM001\n02/06/2025 10:00\n\
             3\n12345678\nM001\n02/06/2025 10:00\n0\n"
        );
        let clinic = run_script(&script);
        assert_eq!(clinic.appointments().len(), 1);
    }

    #[test]
    fn test_bad_input_is_reported_and_skipped() {
        let script = "1\nAna\n111\nnot a date\n2\nDr. X\nM002\nmany\n9\n0\n";
        let clinic = run_script(script);
        assert!(clinic.patients().is_empty());
        assert!(clinic.doctors().is_empty());
    }

    #[test]
    fn test_add_specialty_and_prescription() {
        let script = format!(
            "{REGISTER_JUAN}{REGISTER_HOUSE}\
             4\nM001\nNephrology\nmartes, jueves\n\
             4\nM999\n\
             5\n12345678\nM001\nMedA, MedB\n0\n"
        );
        let clinic = run_script(&script);

        let house = clinic.find_doctor("M001").unwrap();
        assert_eq!(house.specialties().len(), 2);
        assert_eq!(house.specialties()[1].name(), "Nephrology");

        let history = clinic.clinical_history("12345678").unwrap();
        assert_eq!(history.prescriptions()[0].medications(), ["MedA", "MedB"]);
    }

    #[test]
    fn test_end_of_input_closes_session() {
        let clinic = run_script("1\nJuan Perez\n");
        assert!(clinic.patients().is_empty());
    }

    #[test]
    fn test_invalid_option_shows_menu_again() {
        let clinic = run_script(&format!("42\n{REGISTER_JUAN}6\n12345678\n7\n8\n9\n0\n"));
        assert_eq!(clinic.patients().len(), 1);
    }
}
