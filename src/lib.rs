#![warn(clippy::pedantic)]

pub use vecbridge_format as format;
pub use vecbridge_math as math;
pub use vecbridge_simd as simd;

pub use vecbridge_simd::glam;
