use std::fmt::Display;

use crate::{
    locale::Locale,
    number_format::NumberFormat,
    picture::{Part, Picture},
};

/// Floating point types that can be written with a [`NumberFormat`].
pub trait FormatFloat: Copy + Display {
    /// Significant digits below which the general format stays positional
    /// when no precision is requested.
    const GENERAL_PRECISION: i32;

    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_sign_negative(self) -> bool;

    /// Absolute value in `{:e}` notation: every digit of the exact binary
    /// value when `exact` is set, the shortest round-trip digits otherwise.
    fn magnitude_digits(self, exact: bool) -> String;
}

macro_rules! impl_format_float {
    (
        $ty:ty,
        general_precision: $general:expr,
        exact_digits: $exact:expr,
        mantissa_bits: $mantissa:expr,
        exponent_mask: $mask:expr,
        exponent_bias: $bias:expr
    ) => {
        impl FormatFloat for $ty {
            const GENERAL_PRECISION: i32 = $general;

            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }

            fn is_infinite(self) -> bool {
                <$ty>::is_infinite(self)
            }

            fn is_sign_negative(self) -> bool {
                <$ty>::is_sign_negative(self)
            }

            fn magnitude_digits(self, exact: bool) -> String {
                if !exact {
                    return format!("{:e}", self.abs());
                }

                // Ties only round half away from zero when every digit of the
                // binary value is known, so the request covers all of them.
                // A value of m * 2^e with odd m has -e fraction digits when e < 0.
                let bits = self.to_bits();
                let fraction = bits & ((1 << $mantissa) - 1);
                let biased = i32::try_from((bits >> $mantissa) & $mask).unwrap_or_default();
                let (significand, mut exponent) = if biased == 0 {
                    (fraction, 1 - $bias)
                } else {
                    (fraction | (1 << $mantissa), biased - $bias)
                };
                exponent += i32::try_from(significand.trailing_zeros()).unwrap_or_default();

                let binary_integer_bits = exponent + $mantissa + 1;
                let integer_digits = if binary_integer_bits > 0 {
                    binary_integer_bits * 30_103 / 100_000 + 1
                } else {
                    0
                };
                let fraction_digits = (-exponent).max(0);
                let digits = (integer_digits + fraction_digits).clamp(1, $exact);
                format!("{:.*e}", usize::try_from(digits - 1).unwrap_or_default(), self.abs())
            }
        }
    };
}

// The longest exact decimal expansions hold 112 (f32) and 767 (f64) significant digits.
impl_format_float!(
    f32,
    general_precision: 7,
    exact_digits: 112,
    mantissa_bits: 23,
    exponent_mask: 0xff,
    exponent_bias: 150
);
impl_format_float!(
    f64,
    general_precision: 15,
    exact_digits: 767,
    mantissa_bits: 52,
    exponent_mask: 0x7ff,
    exponent_bias: 1075
);

/// A non-negative decimal `0.d₁d₂d₃… × 10^scale` without trailing zero digits.
///
/// Zero has no digits and a scale of `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Digits {
    digits: Vec<u8>,
    scale: i32,
}

impl Digits {
    /// Reads Rust's `{:e}` output such as `1.25e-3`.
    fn from_scientific(text: &str) -> Self {
        let mut digits = Vec::new();
        let mut exponent = 0i32;
        let mut negative_exponent = false;
        let mut in_exponent = false;
        for c in text.chars() {
            match c {
                'e' | 'E' => in_exponent = true,
                '-' if in_exponent => negative_exponent = true,
                '0'..='9' => {
                    let digit = c as u8 - b'0';
                    if in_exponent {
                        exponent = exponent * 10 + i32::from(digit);
                    } else {
                        digits.push(digit);
                    }
                }
                _ => {}
            }
        }
        if negative_exponent {
            exponent = -exponent;
        }

        let mut number = Self {
            digits,
            scale: exponent + 1,
        };
        number.trim();
        number
    }

    fn trim(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.scale = 0;
        }
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    fn len(&self) -> i32 {
        i32::try_from(self.digits.len()).unwrap_or(i32::MAX)
    }

    /// ASCII digit at `index`, `'0'` outside the stored digits.
    fn digit(&self, index: i32) -> char {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.digits.get(index))
            .map_or('0', |digit| char::from(b'0' + digit))
    }

    /// Multiplies by `10^places`.
    fn shift(&mut self, places: i32) {
        if !self.is_zero() {
            self.scale += places;
        }
    }

    /// Keeps the first `keep` significant digits, rounding half away from zero.
    fn round(&mut self, keep: i32) {
        let Ok(keep) = usize::try_from(keep) else {
            self.digits.clear();
            self.scale = 0;
            return;
        };
        if keep >= self.digits.len() {
            return;
        }

        let round_up = self.digits[keep] >= 5;
        self.digits.truncate(keep);
        if round_up {
            let mut index = keep;
            loop {
                if index == 0 {
                    self.digits.insert(0, 1);
                    self.scale += 1;
                    break;
                }
                index -= 1;
                if self.digits[index] == 9 {
                    self.digits[index] = 0;
                } else {
                    self.digits[index] += 1;
                    break;
                }
            }
        }
        self.trim();
    }
}

/// Writes `value` with `format` under the conventions of `locale`.
///
/// `None` selects the general format with round-trip digits. `NaN` and the
/// infinities are written with the locale symbols whatever the format.
pub fn format_number<T: FormatFloat>(
    value: T,
    format: Option<&NumberFormat>,
    locale: &Locale,
) -> String {
    if value.is_nan() {
        return locale.nan_symbol().to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() {
            locale.negative_infinity_symbol().to_owned()
        } else {
            locale.positive_infinity_symbol().to_owned()
        };
    }

    let default = NumberFormat::default();
    let format = format.unwrap_or(&default);
    let exact = || Digits::from_scientific(&value.magnitude_digits(true));
    let mut out = String::new();
    match *format {
        NumberFormat::General {
            precision: None | Some(0),
            uppercase,
        }
        | NumberFormat::RoundTrip { uppercase } => {
            let digits = Digits::from_scientific(&value.magnitude_digits(false));
            let max_digits = digits.len().max(T::GENERAL_PRECISION);
            write_general(&mut out, &digits, max_digits, uppercase, locale);
        }
        NumberFormat::General {
            precision: Some(precision),
            uppercase,
        } => {
            let mut digits = exact();
            let precision = i32::from(precision);
            digits.round(precision);
            write_general(&mut out, &digits, precision, uppercase, locale);
        }
        NumberFormat::Fixed(decimals) => {
            let mut digits = exact();
            let decimals = i32::from(decimals);
            digits.round(digits.scale + decimals);
            write_fixed(&mut out, &digits, decimals, false, locale);
        }
        NumberFormat::Number(decimals) => {
            let mut digits = exact();
            let decimals = i32::from(decimals);
            digits.round(digits.scale + decimals);
            write_fixed(&mut out, &digits, decimals, true, locale);
        }
        NumberFormat::Exponential {
            precision,
            uppercase,
        } => {
            let mut digits = exact();
            let decimals = i32::from(precision);
            digits.round(decimals + 1);
            write_exponential(&mut out, &digits, decimals, uppercase, locale);
        }
        NumberFormat::Percent(decimals) => {
            let mut digits = exact();
            let decimals = i32::from(decimals);
            digits.shift(2);
            digits.round(digits.scale + decimals);
            write_fixed(&mut out, &digits, decimals, true, locale);
            out.push_str(locale.percent_suffix());
        }
        NumberFormat::Currency(decimals) => {
            let mut digits = exact();
            let decimals = i32::from(decimals.unwrap_or(locale.currency_decimals()));
            digits.round(digits.scale + decimals);
            write_fixed(&mut out, &digits, decimals, true, locale);
            return apply_currency_pattern(&out, value.is_sign_negative(), locale);
        }
        NumberFormat::Custom(ref picture) => write_picture(&mut out, exact(), picture, locale),
    }

    if value.is_sign_negative() {
        out.insert_str(0, locale.negative_sign());
    }
    out
}

fn apply_currency_pattern(number: &str, negative: bool, locale: &Locale) -> String {
    let pattern = if negative {
        locale.currency_negative_pattern()
    } else {
        locale.currency_positive_pattern()
    };
    let mut out = String::new();
    for c in pattern.chars() {
        match c {
            'n' => out.push_str(number),
            '$' => out.push_str(locale.currency_symbol()),
            '-' => out.push_str(locale.negative_sign()),
            literal => out.push(literal),
        }
    }
    out
}

fn write_picture(out: &mut String, mut digits: Digits, picture: &Picture, locale: &Locale) {
    digits.shift(picture.shift);
    let mut exponent = 0;
    if picture.scientific {
        let integer_places = picture.integer_places.max(1);
        digits.round(integer_places + picture.fraction_places);
        if !digits.is_zero() {
            exponent = digits.scale - integer_places;
            digits.scale = integer_places;
        }
    } else {
        digits.round(digits.scale + picture.fraction_places);
    }

    let padding = usize::try_from(picture.min_integer_digits - digits.scale.max(0)).unwrap_or(0);
    let integer: Vec<char> = std::iter::repeat('0')
        .take(padding)
        .chain((0..digits.scale).map(|index| digits.digit(index)))
        .collect();
    let integer_len = i32::try_from(integer.len()).unwrap_or(i32::MAX);
    let group_size = i32::try_from(locale.group_size()).unwrap_or(0);
    let grouped = picture.grouped && !picture.scientific && group_size > 0;
    let write_integer = |out: &mut String, from: i32, to: i32| {
        for position in from.max(0)..to {
            if let Some(digit) = usize::try_from(position).ok().and_then(|p| integer.get(p)) {
                out.push(*digit);
            }
            let remaining = integer_len - 1 - position;
            if grouped && remaining > 0 && remaining % group_size == 0 {
                out.push_str(locale.group_separator());
            }
        }
    };

    let significant_fraction = (digits.len() - digits.scale).clamp(0, picture.fraction_places);
    let visible_fraction = significant_fraction.max(picture.min_fraction_digits);
    let first_position = integer_len - picture.integer_places;
    let mut integer_index = 0;
    let mut fraction_index = 0;
    for part in &picture.parts {
        match part {
            Part::Integer => {
                let position = first_position + integer_index;
                let from = if integer_index == 0 { 0 } else { position };
                write_integer(out, from, position + 1);
                integer_index += 1;
            }
            Part::Point => {
                if picture.integer_places == 0 {
                    write_integer(out, 0, integer_len);
                }
                if visible_fraction > 0 {
                    out.push_str(locale.decimal_separator());
                }
            }
            Part::Fraction => {
                if fraction_index < visible_fraction {
                    out.push(digits.digit(digits.scale + fraction_index));
                }
                fraction_index += 1;
            }
            Part::Percent => out.push('%'),
            Part::Exponent {
                uppercase,
                always_sign,
                min_digits,
            } => {
                out.push(if *uppercase { 'E' } else { 'e' });
                if exponent < 0 {
                    out.push_str(locale.negative_sign());
                } else if *always_sign {
                    out.push_str(locale.positive_sign());
                }
                let width = *min_digits;
                out.push_str(&format!("{:0width$}", exponent.unsigned_abs()));
            }
            Part::Literal(text) => out.push_str(text),
        }
    }
}

fn write_fixed(out: &mut String, digits: &Digits, decimals: i32, grouped: bool, locale: &Locale) {
    let integer: String = if digits.scale > 0 {
        (0..digits.scale).map(|index| digits.digit(index)).collect()
    } else {
        String::from("0")
    };

    let group_size = locale.group_size();
    if grouped && group_size > 0 {
        for (index, digit) in integer.chars().enumerate() {
            if index > 0 && (integer.len() - index) % group_size == 0 {
                out.push_str(locale.group_separator());
            }
            out.push(digit);
        }
    } else {
        out.push_str(&integer);
    }

    if decimals > 0 {
        out.push_str(locale.decimal_separator());
        out.extend((0..decimals).map(|index| digits.digit(digits.scale + index)));
    }
}

/// Positional notation unless the decimal point falls beyond `max_digits`
/// or more than three zeros follow it.
fn write_general(
    out: &mut String,
    digits: &Digits,
    max_digits: i32,
    uppercase: bool,
    locale: &Locale,
) {
    let scientific = digits.scale > max_digits || digits.scale < -3;
    let mut position = if scientific { 1 } else { digits.scale };
    let mut next = 0;

    if position > 0 {
        while position > 0 {
            out.push(digits.digit(next));
            next += 1;
            position -= 1;
        }
    } else {
        out.push('0');
    }

    if next < digits.len() || position < 0 {
        out.push_str(locale.decimal_separator());
        while position < 0 {
            out.push('0');
            position += 1;
        }
        while next < digits.len() {
            out.push(digits.digit(next));
            next += 1;
        }
    }

    if scientific {
        write_exponent(out, digits.scale - 1, uppercase, 2, locale);
    }
}

fn write_exponential(
    out: &mut String,
    digits: &Digits,
    decimals: i32,
    uppercase: bool,
    locale: &Locale,
) {
    out.push(digits.digit(0));
    if decimals > 0 {
        out.push_str(locale.decimal_separator());
        out.extend((1..=decimals).map(|index| digits.digit(index)));
    }
    let exponent = if digits.is_zero() { 0 } else { digits.scale - 1 };
    write_exponent(out, exponent, uppercase, 3, locale);
}

fn write_exponent(
    out: &mut String,
    exponent: i32,
    uppercase: bool,
    min_digits: usize,
    locale: &Locale,
) {
    out.push(if uppercase { 'E' } else { 'e' });
    if exponent < 0 {
        out.push_str(locale.negative_sign());
    } else {
        out.push_str(locale.positive_sign());
    }
    out.push_str(&format!("{:0min_digits$}", exponent.unsigned_abs()));
}
