use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::picture::Picture;

const MAX_PRECISION: u8 = 99;
const DEFAULT_DECIMALS: u8 = 2;
const DEFAULT_EXPONENTIAL_DECIMALS: u8 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSpecError {
    UnknownSpecifier(char),
    InvalidPrecision(String),
    InvalidPicture(String),
}

impl Display for FormatSpecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatSpecError::UnknownSpecifier(letter) => {
                write!(f, "unknown format specifier '{letter}'")
            }
            FormatSpecError::InvalidPrecision(spec) => {
                write!(f, "invalid precision in format specifier {spec:?}")
            }
            FormatSpecError::InvalidPicture(picture) => {
                write!(f, "invalid custom number format {picture:?}")
            }
        }
    }
}

impl std::error::Error for FormatSpecError {}

/// How a single number is laid out, parsed from specifiers such as `"F2"`
/// or custom pictures such as `"#,##0.00"`.
///
/// A string starting with a letter is a one-letter specifier with an
/// optional precision, anything else is a [`Picture`]. Letter case only matters for the exponent character of [`General`],
/// [`RoundTrip`] and [`Exponential`].
///
/// [`General`]: NumberFormat::General
/// [`RoundTrip`]: NumberFormat::RoundTrip
/// [`Exponential`]: NumberFormat::Exponential
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberFormat {
    /// Shortest round-trip digits, or `precision` significant digits.
    General {
        precision: Option<u8>,
        uppercase: bool,
    },
    RoundTrip {
        uppercase: bool,
    },
    /// Fixed number of decimals.
    Fixed(u8),
    /// Fixed number of decimals with grouped integer digits.
    Number(u8),
    /// One integer digit, `precision` decimals and a three digit exponent.
    Exponential {
        precision: u8,
        uppercase: bool,
    },
    /// The value times a hundred, grouped, followed by the percent suffix.
    Percent(u8),
    /// Grouped fixed decimals placed in the locale currency pattern. Without a
    /// precision the locale currency decimals are used.
    Currency(Option<u8>),
    Custom(Picture),
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::General {
            precision: None,
            uppercase: true,
        }
    }
}

impl FromStr for NumberFormat {
    type Err = FormatSpecError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let mut chars = spec.chars();
        let Some(letter) = chars.next() else {
            return Ok(NumberFormat::default());
        };
        if !letter.is_ascii_alphabetic() {
            return Picture::parse(spec).map(NumberFormat::Custom);
        }
        let uppercase = letter.is_ascii_uppercase();
        if !matches!(letter.to_ascii_uppercase(), 'G' | 'R' | 'F' | 'N' | 'E' | 'P' | 'C') {
            return Err(FormatSpecError::UnknownSpecifier(letter));
        }

        let precision = parse_precision(chars.as_str())
            .ok_or_else(|| FormatSpecError::InvalidPrecision(spec.to_owned()))?;
        let format = match letter.to_ascii_uppercase() {
            'G' => NumberFormat::General {
                precision,
                uppercase,
            },
            'R' if precision.is_none() => NumberFormat::RoundTrip { uppercase },
            'R' => return Err(FormatSpecError::InvalidPrecision(spec.to_owned())),
            'F' => NumberFormat::Fixed(precision.unwrap_or(DEFAULT_DECIMALS)),
            'N' => NumberFormat::Number(precision.unwrap_or(DEFAULT_DECIMALS)),
            'E' => NumberFormat::Exponential {
                precision: precision.unwrap_or(DEFAULT_EXPONENTIAL_DECIMALS),
                uppercase,
            },
            'P' => NumberFormat::Percent(precision.unwrap_or(DEFAULT_DECIMALS)),
            _ => NumberFormat::Currency(precision),
        };
        Ok(format)
    }
}

/// `Some(None)` for an absent precision, `None` when `text` is not a valid one.
fn parse_precision(text: &str) -> Option<Option<u8>> {
    if text.is_empty() {
        return Some(None);
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<u8>()
        .ok()
        .filter(|precision| *precision <= MAX_PRECISION)
        .map(Some)
}

impl Display for NumberFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let letter = |upper: char, uppercase: bool| {
            if uppercase {
                upper
            } else {
                upper.to_ascii_lowercase()
            }
        };
        match *self {
            NumberFormat::General {
                precision: None,
                uppercase,
            } => write!(f, "{}", letter('G', uppercase)),
            NumberFormat::General {
                precision: Some(precision),
                uppercase,
            } => write!(f, "{}{precision}", letter('G', uppercase)),
            NumberFormat::RoundTrip { uppercase } => write!(f, "{}", letter('R', uppercase)),
            NumberFormat::Fixed(precision) => write!(f, "F{precision}"),
            NumberFormat::Number(precision) => write!(f, "N{precision}"),
            NumberFormat::Exponential {
                precision,
                uppercase,
            } => write!(f, "{}{precision}", letter('E', uppercase)),
            NumberFormat::Percent(precision) => write!(f, "P{precision}"),
            NumberFormat::Currency(None) => write!(f, "C"),
            NumberFormat::Currency(Some(precision)) => write!(f, "C{precision}"),
            NumberFormat::Custom(ref picture) => write!(f, "{picture}"),
        }
    }
}
