//! Declared input types and the filters that classify candidate values.

/// What kind of text a widget accepts. Fixed at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputType {
    #[default]
    Text,
    Integer,
    Number,
}

impl InputType {
    pub const fn filter(self) -> InputFilter {
        match self {
            InputType::Text => InputFilter::Unfiltered,
            InputType::Integer => InputFilter::DigitsOnly,
            InputType::Number => InputFilter::DecimalNumberToken,
        }
    }
}

/// Pure classifier deciding whether a candidate value may be committed.
///
/// A rejected candidate is not an error: the frame's edit is dropped and the
/// previous value stays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputFilter {
    /// Every candidate is accepted.
    Unfiltered,
    /// Zero or more ASCII digits. The empty string is accepted so a field
    /// can be cleared with backspace.
    DigitsOnly,
    /// One numeric token (`12`, `12.5` or `.5`), optionally with a single
    /// leading and/or trailing space.
    DecimalNumberToken,
}

impl InputFilter {
    pub fn accept(self, candidate: &str) -> bool {
        match self {
            InputFilter::Unfiltered => true,
            InputFilter::DigitsOnly => candidate.bytes().all(|b| b.is_ascii_digit()),
            InputFilter::DecimalNumberToken => is_decimal_token(candidate),
        }
    }
}

fn is_digit_run(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal_token(candidate: &str) -> bool {
    let body = candidate.strip_prefix(' ').unwrap_or(candidate);
    let body = body.strip_suffix(' ').unwrap_or(body);

    match body.split_once('.') {
        None => is_digit_run(body),
        Some((int, frac)) => (int.is_empty() || is_digit_run(int)) && is_digit_run(frac),
    }
}
