#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Locale-aware text output for the `vecbridge_math` vectors.
//!
//! Numbers are written with one-letter format specifiers (`G`, `R`, `F`,
//! `N`, `E`, `P`, `C`) or custom pictures such as `#,##0.00`, and a
//! [`Locale`] supplying separators and symbols.

pub mod locale;
pub mod number;
pub mod number_format;
pub mod picture;
pub mod vector;

pub use locale::Locale;
pub use number::{format_number, FormatFloat};
pub use number_format::{FormatSpecError, NumberFormat};
pub use picture::Picture;
pub use vector::ComponentFormat;
