// Fixed-pattern timestamps.
// Both formats read `2014-12-09T13:50:51.644Z` style text into DateTime<FixedOffset>.
// chrono's strftime items never consult the host locale or time zone, so the parser is
// fully described by the pattern below; nothing ambient leaks in.
//
// Parsing items used:
// %3f: exactly three fraction digits, no leading dot (the dot is a literal in the pattern).
// %#z: offset as `Z`, `+hhmm` or `+hh:mm` (parsing only).
// Formatting items used:
// %z: `+hhmm`, %:z: `+hh:mm`.

use chrono::{DateTime, Datelike, FixedOffset};
use thiserror::Error;

// Rfc822 (`Z`) and Iso8601Full (`ZZZZZ`) both read the offset with %#z on purpose:
// `Z`, `+hhmm` and `+hh:mm` are all accepted for either format, only the written form differs.
const RFC822_PARSE: &str = "%Y-%m-%dT%H:%M:%S.%3f%#z";
const ISO8601_PARSE: &str = "%Y-%m-%dT%H:%M:%S.%3f%#z";
const RFC822_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%3f%z";
const ISO8601_ZULU_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%3fZ";
const ISO8601_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%3f%:z";

#[derive(Error, Debug)]
pub enum TimestampError {
    #[error("year must be exactly four digits (`yyyy`)")]
    Year,
    #[error(transparent)]
    Pattern(#[from] chrono::ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `yyyy-MM-dd'T'HH:mm:ss.SSSZ`, offset written without a colon.
    #[default]
    Rfc822,
    /// `yyyy-MM-dd'T'HH:mm:ss.SSSZZZZZ`, offset written as `Z` or `+hh:mm`.
    Iso8601Full,
}

impl DateFormat {
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Rfc822 => "yyyy-MM-dd'T'HH:mm:ss.SSSZ",
            Self::Iso8601Full => "yyyy-MM-dd'T'HH:mm:ss.SSSZZZZZ",
        }
    }

    /// Reads `raw`; the year must be four digits, the range `format` can write back.
    pub fn parse(&self, raw: &str) -> Result<DateTime<FixedOffset>, TimestampError> {
        // %Y alone takes a sign and any digit count
        let bytes = raw.as_bytes();
        if bytes.len() < 5 || !bytes[..4].iter().all(u8::is_ascii_digit) || bytes[4] != b'-' {
            return Err(TimestampError::Year);
        }
        let pattern = match self {
            Self::Rfc822 => RFC822_PARSE,
            Self::Iso8601Full => ISO8601_PARSE,
        };
        Ok(DateTime::parse_from_str(raw, pattern)?)
    }

    /// Writes `ts` with this format, or `None` when the year doesn't fit `yyyy`.
    pub fn format(&self, ts: &DateTime<FixedOffset>) -> Option<String> {
        if !(0..=9999).contains(&ts.year()) {
            return None;
        }
        let fmt = match self {
            Self::Rfc822 => RFC822_FORMAT,
            Self::Iso8601Full if ts.offset().local_minus_utc() == 0 => ISO8601_ZULU_FORMAT,
            Self::Iso8601Full => ISO8601_OFFSET_FORMAT,
        };
        Some(ts.format(fmt).to_string())
    }
}
