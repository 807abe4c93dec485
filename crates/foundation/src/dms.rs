//! Fixed-width degrees/minutes/seconds angles as published in FRA point tables.
//!
//! Layout: one direction letter followed by zero-padded digits with no
//! separators.
//!
//! - `N`/`S` (latitude): `DD MM SS...`
//! - `E`/`W` (longitude): `DDD MM SS...`
//!
//! The seconds field runs to the end of the string and is read from its
//! leading digit run, so `N4045195` decodes with 195 seconds and `N404519.5`
//! with 19 seconds. Strings that do not start with a direction letter are
//! accepted when they parse as a bare decimal number.

/// Shortest string the decoder will look at (after trimming).
pub const MIN_LEN: usize = 5;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }

    /// Number of digits used for the degrees field.
    pub fn degree_digits(self) -> usize {
        match self {
            Hemisphere::North | Hemisphere::South => 2,
            Hemisphere::East | Hemisphere::West => 3,
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DmsField {
    Degrees,
    Minutes,
    Seconds,
}

impl std::fmt::Display for DmsField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DmsField::Degrees => write!(f, "degrees"),
            DmsField::Minutes => write!(f, "minutes"),
            DmsField::Seconds => write!(f, "seconds"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    TooShort,
    InvalidDirection(char),
    MalformedNumeric { field: DmsField, value: String },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::TooShort => {
                write!(f, "coordinate shorter than {MIN_LEN} characters")
            }
            DecodeError::InvalidDirection(c) => {
                write!(f, "invalid direction code {c:?} (expected N, S, E or W)")
            }
            DecodeError::MalformedNumeric { field, value } => {
                write!(f, "malformed {field} field: {value:?}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decodes a direction-prefixed DMS string into signed decimal degrees.
pub fn decode(raw: &str) -> Result<f64, DecodeError> {
    let s = raw.trim();
    if s.chars().count() < MIN_LEN {
        return Err(DecodeError::TooShort);
    }

    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return Err(DecodeError::TooShort);
    };
    let Some(hemisphere) = Hemisphere::from_char(first) else {
        // Already decimal?
        return s
            .parse::<f64>()
            .map_err(|_| DecodeError::InvalidDirection(first));
    };

    let digits = chars.as_str();
    let deg_end = hemisphere.degree_digits();
    let min_end = deg_end + 2;

    let degrees = fixed_field(digits, 0, deg_end, DmsField::Degrees)?;
    let minutes = fixed_field(digits, deg_end, min_end, DmsField::Minutes)?;
    let seconds = leading_digits_field(digits.get(min_end..).unwrap_or(""))?;

    let value = degrees as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0;
    Ok(hemisphere.sign() * value)
}

fn fixed_field(
    digits: &str,
    start: usize,
    end: usize,
    field: DmsField,
) -> Result<u32, DecodeError> {
    let malformed = || DecodeError::MalformedNumeric {
        field,
        value: digits.get(start..).unwrap_or(digits).to_string(),
    };
    let part = digits.get(start..end).ok_or_else(malformed)?;
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::MalformedNumeric {
            field,
            value: part.to_string(),
        });
    }
    part.parse::<u32>().map_err(|_| malformed())
}

fn leading_digits_field(rest: &str) -> Result<u64, DecodeError> {
    let run = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    let malformed = || DecodeError::MalformedNumeric {
        field: DmsField::Seconds,
        value: rest.to_string(),
    };
    if run == 0 {
        return Err(malformed());
    }
    rest[..run].parse::<u64>().map_err(|_| malformed())
}
