/// Formatting helpers shared by the pages and the player.
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const MONTHS_SHORT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

const MONTHS_LONG: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

// Indexed by `num_days_from_sunday`.
const WEEKDAYS_SHORT: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// Render a number of seconds as `HH:MM:SS`.
pub fn format_time(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Parse the API's publish timestamp. The mock API serves
/// `YYYY-MM-DD HH:MM:SS`, real deployments tend to send RFC 3339.
pub fn parse_published_at(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.date_naive());
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(parsed.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `8 jan 2021`. Unparsable input is returned as-is.
pub fn format_published_at(raw: &str) -> String {
    match parse_published_at(raw) {
        Some(date) => format!(
            "{} {} {}",
            date.day(),
            MONTHS_SHORT[date.month0() as usize],
            date.year()
        ),
        None => raw.to_string(),
    }
}

/// `Qui, 8 abril`, as shown in the page header.
pub fn format_header_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {}",
        WEEKDAYS_SHORT[date.weekday().num_days_from_sunday() as usize],
        date.day(),
        MONTHS_LONG[date.month0() as usize]
    )
}
