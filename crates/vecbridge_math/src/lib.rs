#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod number_traits;
pub mod quaternion;
pub mod vector;

pub use number_traits::{Float, NumericOps, One, Zero};
