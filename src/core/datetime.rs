//! Date-and-or-time codec for birthday and anniversary values.

use std::fmt;

/// A vCard date-and-or-time value: structured (`date` and/or `time`
/// components) or free text (`circa 1900`).
///
/// Invariants on a valid card: a textual value carries empty `date`/`time`
/// and `is_utc` false; a structured value carries an empty `text` and at
/// least one of `date`/`time` non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateAndOrTime {
    /// Whether the time component is in UTC.
    pub is_utc: bool,
    /// Whether this is a free-text value.
    pub is_text: bool,
    /// Date component, `YYYYMMDD`, or empty when unspecified.
    pub date: String,
    /// Time component, `HHMMSS`, or empty when unspecified.
    pub time: String,
    /// Free-text value, or empty when structured.
    pub text: String,
}

impl DateAndOrTime {
    /// Creates a free-text value.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            is_text: true,
            text: text.into(),
            ..Self::default()
        }
    }

    /// Creates a date-only value.
    #[must_use]
    pub fn date(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }

    /// Creates a time-only value.
    #[must_use]
    pub fn time(time: impl Into<String>, is_utc: bool) -> Self {
        Self {
            is_utc,
            time: time.into(),
            ..Self::default()
        }
    }

    /// Creates a combined date-and-time value.
    #[must_use]
    pub fn date_time(date: impl Into<String>, time: impl Into<String>, is_utc: bool) -> Self {
        Self {
            is_utc,
            date: date.into(),
            time: time.into(),
            ..Self::default()
        }
    }

    /// Decodes a raw value segment into its components.
    ///
    /// `is_text` is the tokenizer's text marker (`VALUE=text` parameter):
    /// when set, the raw value is kept verbatim as text. Otherwise the
    /// micro-grammar applies: a leading `T` marks a time-only value, an
    /// embedded `T` separates date from time (with an optional trailing `Z`
    /// for UTC), and anything else is a date.
    #[must_use]
    pub fn decode(raw: &str, is_text: bool) -> Self {
        if is_text {
            return Self::text(raw);
        }

        if let Some(rest) = raw.strip_prefix('T') {
            return Self::time(take_chars(rest, 6), false);
        }

        if let Some(pos) = raw.find('T') {
            let after = &raw[pos + 1..];
            let is_utc = after.chars().nth(6) == Some('Z');
            return Self::date_time(&raw[..pos], take_chars(after, 6), is_utc);
        }

        Self::date(take_chars(raw, 8))
    }

    /// Encodes the value segment back to wire form, the exact inverse of
    /// [`decode`](Self::decode).
    ///
    /// A textual value is emitted verbatim (the serializer adds the
    /// `VALUE=text` parameter). Structured values take one of three shapes:
    /// `date`, `dateTtime`, or `Ttime`, with a trailing `Z` when the value
    /// is UTC and a time component is present.
    #[must_use]
    pub fn encode(&self) -> String {
        if self.is_text {
            return self.text.clone();
        }

        let mut out = String::new();
        out.push_str(&self.date);
        if !self.time.is_empty() {
            out.push('T');
            out.push_str(&self.time);
            if self.is_utc {
                out.push('Z');
            }
        }
        out
    }
}

impl fmt::Display for DateAndOrTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_text {
            write!(f, "{} (text)", self.text)
        } else {
            f.write_str(&self.encode())
        }
    }
}

/// Returns the first `n` characters of `s`.
fn take_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}
