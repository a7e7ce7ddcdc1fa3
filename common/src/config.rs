use crate::models::weekday::Locale;

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";
pub const DEFAULT_DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M";

#[derive(Debug, Clone)]
pub struct Config {
    /// Skips the banner printed at startup.
    pub no_banner: bool,
    /// Output reduction level. Headers and the banner are hidden above zero.
    pub quiet: u8,
    /// Language used when weekday names are displayed.
    ///
    /// Input always accepts every supported language.
    pub locale: Locale,
    /// `chrono` format used to read and show birth dates.
    pub date_format: String,
    /// `chrono` format used to read and show appointment times.
    pub date_time_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            locale: Locale::default(),
            date_format: String::from(DEFAULT_DATE_FORMAT),
            date_time_format: String::from(DEFAULT_DATE_TIME_FORMAT),
        }
    }
}
