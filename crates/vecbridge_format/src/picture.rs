use std::fmt::{Display, Formatter};

use crate::number_format::FormatSpecError;

/// One element of a custom picture, in writing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Part {
    /// `0` or `#` before the decimal point.
    Integer,
    Point,
    /// `0` or `#` after the decimal point.
    Fraction,
    Percent,
    Exponent {
        uppercase: bool,
        always_sign: bool,
        min_digits: usize,
    },
    Literal(String),
}

/// A custom numeric format such as `#,##0.00`, `0.###` or `0.0E+00`.
///
/// `0` always writes a digit, `#` only a significant one. A `,` between
/// integer placeholders groups the integer digits, while commas right before
/// the decimal point divide the value by a thousand each. `%` multiplies by a
/// hundred. Text in quotes and characters after `\` are copied as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    source: String,
    pub(crate) parts: Vec<Part>,
    pub(crate) integer_places: i32,
    pub(crate) min_integer_digits: i32,
    pub(crate) fraction_places: i32,
    pub(crate) min_fraction_digits: i32,
    pub(crate) grouped: bool,
    /// Power of ten applied to the value before rounding.
    pub(crate) shift: i32,
    pub(crate) scientific: bool,
}

impl Picture {
    pub(crate) fn parse(source: &str) -> Result<Self, FormatSpecError> {
        let invalid = || FormatSpecError::InvalidPicture(source.to_owned());
        let mut picture = Picture {
            source: source.to_owned(),
            parts: Vec::new(),
            integer_places: 0,
            min_integer_digits: 0,
            fraction_places: 0,
            min_fraction_digits: 0,
            grouped: false,
            shift: 0,
            scientific: false,
        };
        let mut first_zero = None;
        let mut pending_commas = 0;
        let mut in_fraction = false;

        let mut chars = source.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '0' | '#' if in_fraction => {
                    picture.fraction_places += 1;
                    if c == '0' {
                        picture.min_fraction_digits = picture.fraction_places;
                    }
                    picture.parts.push(Part::Fraction);
                }
                '0' | '#' => {
                    if pending_commas > 0 {
                        picture.grouped = true;
                        pending_commas = 0;
                    }
                    if c == '0' && first_zero.is_none() {
                        first_zero = Some(picture.integer_places);
                    }
                    picture.integer_places += 1;
                    picture.parts.push(Part::Integer);
                }
                '.' if !in_fraction => {
                    in_fraction = true;
                    picture.shift -= 3 * pending_commas;
                    pending_commas = 0;
                    picture.parts.push(Part::Point);
                }
                ',' => {
                    if !in_fraction && picture.integer_places > 0 {
                        pending_commas += 1;
                    }
                }
                '%' => {
                    picture.shift += 2;
                    picture.parts.push(Part::Percent);
                }
                'E' | 'e' if !picture.scientific => {
                    let mut exponent = chars.clone();
                    let sign = exponent.next_if(|&sign| sign == '+' || sign == '-');
                    let mut min_digits = 0;
                    while exponent.next_if_eq(&'0').is_some() {
                        min_digits += 1;
                    }
                    if min_digits == 0 {
                        picture.push_literal(c);
                    } else {
                        chars = exponent;
                        picture.scientific = true;
                        picture.parts.push(Part::Exponent {
                            uppercase: c == 'E',
                            always_sign: sign == Some('+'),
                            min_digits,
                        });
                    }
                }
                '\'' | '"' => loop {
                    match chars.next() {
                        Some(end) if end == c => break,
                        Some(quoted) => picture.push_literal(quoted),
                        None => return Err(invalid()),
                    }
                },
                '\\' => picture.push_literal(chars.next().ok_or_else(invalid)?),
                ';' => return Err(invalid()),
                literal => picture.push_literal(literal),
            }
        }
        if !in_fraction {
            picture.shift -= 3 * pending_commas;
        }
        picture.min_integer_digits =
            first_zero.map_or(0, |index| picture.integer_places - index);
        Ok(picture)
    }

    fn push_literal(&mut self, c: char) {
        if let Some(Part::Literal(text)) = self.parts.last_mut() {
            text.push(c);
        } else {
            self.parts.push(Part::Literal(c.to_string()));
        }
    }
}

impl Display for Picture {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Picture {
        Picture::parse(source).unwrap()
    }

    #[test]
    fn fixed_decimals() {
        let picture = parse("0.00");

        assert_eq!(
            picture.parts,
            vec![Part::Integer, Part::Point, Part::Fraction, Part::Fraction]
        );
        assert_eq!(picture.min_integer_digits, 1);
        assert_eq!(picture.fraction_places, 2);
        assert_eq!(picture.min_fraction_digits, 2);
        assert!(!picture.grouped);
    }

    #[test]
    fn optional_decimals() {
        let picture = parse("0.0##");

        assert_eq!(picture.fraction_places, 3);
        assert_eq!(picture.min_fraction_digits, 1);
    }

    #[test]
    fn group_separator_between_placeholders() {
        let picture = parse("#,##0.0");

        assert!(picture.grouped);
        assert_eq!(picture.integer_places, 4);
        assert_eq!(picture.min_integer_digits, 1);
        assert_eq!(picture.shift, 0);
    }

    #[test]
    fn trailing_commas_scale_down() {
        let picture = parse("#,##0,,");

        assert!(picture.grouped);
        assert_eq!(picture.shift, -6);
        assert_eq!(parse("0,.0").shift, -3);
    }

    #[test]
    fn percent_scales_up() {
        let picture = parse("0.0%");

        assert_eq!(picture.shift, 2);
        assert_eq!(picture.parts.last(), Some(&Part::Percent));
    }

    #[test]
    fn exponent() {
        let picture = parse("0.00E+000");

        assert!(picture.scientific);
        assert_eq!(
            picture.parts.last(),
            Some(&Part::Exponent {
                uppercase: true,
                always_sign: true,
                min_digits: 3
            })
        );
    }

    #[test]
    fn exponent_letter_without_digits_is_literal() {
        let picture = parse("0 Eur");

        assert!(!picture.scientific);
        assert_eq!(
            picture.parts,
            vec![Part::Integer, Part::Literal(String::from(" Eur"))]
        );
    }

    #[test]
    fn quoted_and_escaped_literals() {
        let picture = parse("'#'0\\%\"x\"");

        assert_eq!(
            picture.parts,
            vec![
                Part::Literal(String::from("#")),
                Part::Integer,
                Part::Literal(String::from("%x")),
            ]
        );
        assert_eq!(picture.shift, 0);
    }

    #[test]
    fn invalid_pictures() {
        for source in ["0.00;(0.00)", "'0.0", "0\\"] {
            assert_eq!(
                Picture::parse(source),
                Err(FormatSpecError::InvalidPicture(source.to_owned()))
            );
        }
    }

    #[test]
    fn display_is_source() {
        assert_eq!(parse("#,##0.##").to_string(), "#,##0.##");
    }
}
