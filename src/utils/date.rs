use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// `YYYY-MM-DD`, or the words `today` / `tomorrow`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    match s.trim().to_lowercase().as_str() {
        "today" => Some(today()),
        "tomorrow" => today().succ_opt(),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d").ok(),
    }
}

/// Monday and Sunday of the week containing `day`.
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = day - Duration::days(i64::from(day.weekday().num_days_from_monday()));
    (monday, monday + Duration::days(6))
}
