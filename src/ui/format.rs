//! Cell formatting helpers.

use chrono::{DateTime, Local, TimeZone};

/// `DD-MM-YYYY HH:MM` (24-hour) in the local time zone. Input that is not an
/// RFC 3339 timestamp is returned unchanged.
pub fn format_date(iso: &str) -> String {
    format_date_in(iso, &Local)
}

pub fn format_date_in<Tz>(iso: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.with_timezone(tz).format("%d-%m-%Y %H:%M").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn formats_zero_padded_24_hour() {
        assert_eq!(format_date_in("2007-07-09T05:51:59.390Z", &Utc), "09-07-2007 05:51");
        assert_eq!(format_date_in("2019-12-31T23:05:00Z", &Utc), "31-12-2019 23:05");
    }

    #[test]
    fn converts_into_target_zone() {
        let plus2 = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_date_in("2019-12-31T23:05:00Z", &plus2), "01-01-2020 01:05");
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(format_date_in("yesterday", &Utc), "yesterday");
    }
}
