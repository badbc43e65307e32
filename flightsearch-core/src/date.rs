use chrono::NaiveDate;

const DATE_SEPARATOR: u8 = b'/';

/// Parses a `DD/MM/YYYY` travel date.
///
/// The text must be exactly two digits, `/`, two digits, `/`, four digits.
/// Day and month are resolved strictly: `31/04/2030` or `29/02/2026` yield
/// `None` rather than rolling over into the next month.
pub fn parse_travel_date(text: Option<&str>) -> Option<NaiveDate> {
    let bytes = text?.as_bytes();
    if bytes.len() != 10 || bytes[2] != DATE_SEPARATOR || bytes[5] != DATE_SEPARATOR {
        return None;
    }

    let day = digits(&bytes[0..2])?;
    let month = digits(&bytes[3..5])?;
    let year = digits(&bytes[6..10])?;

    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Formats a date the way [`parse_travel_date`] reads it.
pub fn format_travel_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn digits(field: &[u8]) -> Option<u32> {
    field.iter().try_fold(0u32, |acc, b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parses_well_formed_date() {
        assert_eq!(parse_travel_date(Some("23/11/2025")), Some(ymd(2025, 11, 23)));
        assert_eq!(parse_travel_date(Some("01/01/2030")), Some(ymd(2030, 1, 1)));
    }

    #[test]
    fn test_absent_or_empty_is_none() {
        assert_eq!(parse_travel_date(None), None);
        assert_eq!(parse_travel_date(Some("")), None);
    }

    #[test]
    fn test_leap_day_resolution() {
        assert_eq!(parse_travel_date(Some("29/02/2024")), Some(ymd(2024, 2, 29)));
        assert_eq!(parse_travel_date(Some("29/02/2026")), None);
        assert_eq!(parse_travel_date(Some("29/02/2000")), Some(ymd(2000, 2, 29)));
        assert_eq!(parse_travel_date(Some("29/02/2100")), None);
    }

    #[test]
    fn test_out_of_range_fields_are_rejected() {
        assert_eq!(parse_travel_date(Some("31/04/2030")), None);
        assert_eq!(parse_travel_date(Some("00/01/2030")), None);
        assert_eq!(parse_travel_date(Some("15/13/2030")), None);
        assert_eq!(parse_travel_date(Some("15/00/2030")), None);
        assert_eq!(parse_travel_date(Some("32/01/2030")), None);
    }

    #[test]
    fn test_shape_must_match_exactly() {
        for text in [
            "1/1/2030",
            "01/1/2030",
            "01/01/30",
            "01-01-2030",
            "01/01-2030",
            "2030/01/01",
            "01/01/2030 ",
            " 01/01/2030",
            "0a/01/2030",
            "01/01/+030",
            "٠١/٠١/٢٠٣٠",
        ] {
            assert_eq!(parse_travel_date(Some(text)), None, "{text:?} should not parse");
        }
    }

    #[test]
    fn test_parse_is_repeatable() {
        let first = parse_travel_date(Some("14/07/2031"));
        let second = parse_travel_date(Some("14/07/2031"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_matches_parse() {
        let date = ymd(2031, 3, 5);
        assert_eq!(format_travel_date(date), "05/03/2031");
        assert_eq!(parse_travel_date(Some(&format_travel_date(date))), Some(date));
    }
}
