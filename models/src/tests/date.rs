use crate::format_api_date;

use chrono::NaiveDate;

#[test]
fn given_single_digit_month_and_day_when_formatted_then_zero_padded() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();

    assert_eq!(format_api_date(date), "2025-03-04");
}

#[test]
fn given_year_end_date_when_formatted_then_matches_wire_format() {
    let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

    assert_eq!(format_api_date(date), "2024-12-31");
}
