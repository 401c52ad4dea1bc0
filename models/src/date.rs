use chrono::NaiveDate;

/// Calendar dates travel as plain `YYYY-MM-DD` strings.
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}
