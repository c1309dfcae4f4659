use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// One accepted spelling of an EXIF date/time string.
///
/// Cameras disagree on whether the value carries its NUL terminator and on
/// whether a 12-hour meridiem marker is appended, so several spellings are
/// accepted. They are tried in the order of [`LAYOUTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// `YYYY:MM:DD HH:MM:SS`
    Plain,
    /// `YYYY:MM:DD HH:MM:SS AM` / `PM`
    Meridiem,
    /// `YYYY:MM:DD HH:MM:SS\0`
    PlainNul,
    /// `YYYY:MM:DD HH:MM:SS PM\0`
    MeridiemNul,
}

/// Candidate layouts, first match wins.
pub const LAYOUTS: [DateLayout; 4] = [
    DateLayout::Plain,
    DateLayout::Meridiem,
    DateLayout::PlainNul,
    DateLayout::MeridiemNul,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Applies the marker to an hour read with a 24-hour field.
    /// `AM` only accepts 0..=12, `PM` shifts morning hours into the afternoon.
    fn adjust(self, hour: u32) -> Option<u32> {
        match self {
            Meridiem::Am if hour > 12 => None,
            Meridiem::Am if hour == 12 => Some(0),
            Meridiem::Am => Some(hour),
            Meridiem::Pm if hour < 12 => Some(hour + 12),
            Meridiem::Pm => Some(hour),
        }
    }
}

/// Reads a layout field by field. Whitespace may precede every field;
/// literals (`:` and NUL) must follow the previous field directly.
struct Fields<'a> {
    rest: &'a str,
}

impl<'a> Fields<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start_matches(char::is_whitespace);
    }

    /// Exactly `width` ASCII digits.
    fn number(&mut self, width: usize) -> Option<u32> {
        self.skip_whitespace();
        let digits = self.rest.get(..width)?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.rest = &self.rest[width..];
        digits.parse().ok()
    }

    fn literal(&mut self, c: char) -> Option<()> {
        self.rest = self.rest.strip_prefix(c)?;
        Some(())
    }

    fn meridiem(&mut self) -> Option<Meridiem> {
        self.skip_whitespace();
        let marker = self.rest.get(..2)?;
        let meridiem = if marker.eq_ignore_ascii_case("AM") {
            Meridiem::Am
        } else if marker.eq_ignore_ascii_case("PM") {
            Meridiem::Pm
        } else {
            return None;
        };
        self.rest = &self.rest[2..];
        Some(meridiem)
    }

    fn finished(&self) -> bool {
        self.rest.is_empty()
    }
}

impl DateLayout {
    fn nul_terminated(self) -> bool {
        matches!(self, DateLayout::PlainNul | DateLayout::MeridiemNul)
    }

    fn has_meridiem(self) -> bool {
        matches!(self, DateLayout::Meridiem | DateLayout::MeridiemNul)
    }

    /// Parses `s` if it is spelled exactly like this layout.
    ///
    /// Any amount of whitespace, including none, may come before each field
    /// and the meridiem marker. Nothing may follow the last field, so
    /// trailing whitespace is rejected. Years before 1 are rejected.
    pub fn parse(self, s: &str) -> Option<NaiveDateTime> {
        let mut fields = Fields::new(s);

        let year = fields.number(4)?;
        fields.literal(':')?;
        let month = fields.number(2)?;
        fields.literal(':')?;
        let day = fields.number(2)?;
        let hour = fields.number(2)?;
        fields.literal(':')?;
        let minute = fields.number(2)?;
        fields.literal(':')?;
        let second = fields.number(2)?;

        let hour = if self.has_meridiem() {
            fields.meridiem()?.adjust(hour)?
        } else {
            hour
        };
        if self.nul_terminated() {
            fields.literal('\0')?;
        }
        if !fields.finished() {
            return None;
        }

        let date = NaiveDate::from_ymd_opt(year as i32, month, day)?;
        if date.year() < 1 {
            return None;
        }
        let time = NaiveTime::from_hms_opt(hour, minute, second)?;
        Some(NaiveDateTime::new(date, time))
    }
}

/// Returns the first layout of [`LAYOUTS`] that accepts `s`, with the parsed value.
pub fn match_layout(s: &str) -> Option<(DateLayout, NaiveDateTime)> {
    LAYOUTS
        .iter()
        .find_map(|layout| layout.parse(s).map(|dt| (*layout, dt)))
}

/// Tolerant EXIF date/time parsing. Strings no layout accepts yield `None`.
pub fn parse_exif_datetime(s: &str) -> Option<NaiveDateTime> {
    match match_layout(s) {
        Some((_, dt)) => Some(dt),
        None => {
            if !s.is_empty() {
                log::debug!("Unrecognised EXIF date/time: {:?}", s);
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .unwrap()
    }

    #[test]
    fn test_plain() {
        assert_eq!(
            parse_exif_datetime("2016:03:21 14:30:00"),
            Some(dt(2016, 3, 21, 14, 30, 0))
        );
    }

    #[test]
    fn test_nul_terminated() {
        assert_eq!(
            parse_exif_datetime("2016:03:21 14:30:00\0"),
            Some(dt(2016, 3, 21, 14, 30, 0))
        );
        assert_eq!(
            parse_exif_datetime("2016:03:21 02:30:00 PM\0"),
            Some(dt(2016, 3, 21, 14, 30, 0))
        );
    }

    #[test]
    fn test_meridiem() {
        assert_eq!(
            parse_exif_datetime("2016:03:21 02:30:00 PM"),
            Some(dt(2016, 3, 21, 14, 30, 0))
        );
        assert_eq!(
            parse_exif_datetime("2016:03:21 14:30:00 PM"),
            Some(dt(2016, 3, 21, 14, 30, 0))
        );
        assert_eq!(
            parse_exif_datetime("2016:03:21 12:05:00 AM"),
            Some(dt(2016, 3, 21, 0, 5, 0))
        );
        assert_eq!(
            parse_exif_datetime("2016:03:21 12:05:00 PM"),
            Some(dt(2016, 3, 21, 12, 5, 0))
        );
        assert_eq!(
            parse_exif_datetime("2016:03:21 09:15:00 am"),
            Some(dt(2016, 3, 21, 9, 15, 0))
        );
        assert_eq!(parse_exif_datetime("2016:03:21 14:30:00 AM"), None);
    }

    #[test]
    fn test_inner_whitespace() {
        assert_eq!(
            parse_exif_datetime("2016:03:21   14:30:00"),
            Some(dt(2016, 3, 21, 14, 30, 0))
        );
        assert_eq!(
            parse_exif_datetime("2016:03:21 02:30:00\t PM"),
            Some(dt(2016, 3, 21, 14, 30, 0))
        );
    }

    #[test]
    fn test_rejects_everything_else() {
        assert_eq!(parse_exif_datetime("not a date"), None);
        assert_eq!(parse_exif_datetime(""), None);
        assert_eq!(parse_exif_datetime("\0"), None);
        assert_eq!(parse_exif_datetime("0000:00:00 00:00:00"), None);
        assert_eq!(parse_exif_datetime("    :  :     :  :  "), None);
        assert_eq!(parse_exif_datetime("2016:02:30 14:30:00"), None);
        assert_eq!(parse_exif_datetime("2016:03:21 24:00:00"), None);
        assert_eq!(parse_exif_datetime("2016:03:21"), None);
        assert_eq!(parse_exif_datetime("2016-03-21 14:30:00"), None);
        assert_eq!(parse_exif_datetime("2016:3:21 14:30:00"), None);
        assert_eq!(parse_exif_datetime("2016 :03:21 14:30:00"), None);
        assert_eq!(parse_exif_datetime("2016:03:21 14:30:00 \0"), None);
        assert_eq!(parse_exif_datetime("2016:03:21 14:30:00 "), None);
        assert_eq!(parse_exif_datetime("2016:03:21 14:30:00\0\0"), None);
        assert_eq!(parse_exif_datetime("2016:03:21 14:30:00 XM"), None);
        assert_eq!(parse_exif_datetime("2016:03:21 14:30:00 PM extra"), None);
    }

    #[test]
    fn test_whitespace_before_any_field() {
        let expected = Some(dt(2016, 3, 21, 14, 30, 0));
        assert_eq!(parse_exif_datetime(" 2016:03:21 14:30:00"), expected);
        assert_eq!(parse_exif_datetime("2016: 03:21 14:30:00"), expected);
        assert_eq!(parse_exif_datetime("2016:03: 21  14: 30: 00"), expected);
        assert_eq!(parse_exif_datetime("2016:03:21 02:30:00PM"), expected);
        assert_eq!(parse_exif_datetime("2016:03:21 02:30:00PM\0"), expected);
        assert_eq!(
            match_layout("2016:03:21 02:30:00PM").map(|(l, _)| l),
            Some(DateLayout::Meridiem)
        );
    }

    #[test]
    fn test_year_zero_is_rejected() {
        assert_eq!(parse_exif_datetime("0000:01:01 00:00:00"), None);
        assert_eq!(parse_exif_datetime("0000:01:01 00:00:00\0"), None);
        assert_eq!(
            parse_exif_datetime("0001:01:01 00:00:00"),
            Some(dt(1, 1, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_layout_priority() {
        assert_eq!(
            match_layout("2016:03:21 14:30:00").map(|(l, _)| l),
            Some(DateLayout::Plain)
        );
        assert_eq!(
            match_layout("2016:03:21 02:30:00 PM").map(|(l, _)| l),
            Some(DateLayout::Meridiem)
        );
        assert_eq!(
            match_layout("2016:03:21 14:30:00\0").map(|(l, _)| l),
            Some(DateLayout::PlainNul)
        );
        assert_eq!(
            match_layout("2016:03:21 02:30:00 PM\0").map(|(l, _)| l),
            Some(DateLayout::MeridiemNul)
        );
    }

    #[test]
    fn test_nul_variant_does_not_match_plain_layout() {
        assert_eq!(DateLayout::Plain.parse("2016:03:21 14:30:00\0"), None);
        assert_eq!(DateLayout::Meridiem.parse("2016:03:21 02:30:00 PM\0"), None);
        assert_eq!(DateLayout::PlainNul.parse("2016:03:21 14:30:00"), None);
    }
}
