use super::*;

#[test]
fn format_date_keeps_the_calendar_day() {
    assert_eq!(format_date("2024-03-01T10:00:00.000Z"), "2024-03-01");
}

#[test]
fn format_date_passes_short_values_through() {
    assert_eq!(format_date("2024"), "2024");
    assert_eq!(format_date(""), "");
}
