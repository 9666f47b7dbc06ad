//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a `Timestamp` in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_datetime_shape() {
        let ts = Timestamp::from_second(1640995200).unwrap();
        let output = LocalDateTime(&ts).to_string();

        // Date and time portions are fixed width regardless of zone
        let (date, rest) = output.split_once(' ').unwrap();
        assert_eq!(date.len(), 10);
        assert_eq!(&rest[2..3], ":");
        assert_eq!(&rest[5..6], ":");
    }
}
