use log::info;
use vecbridge::{
    format::{ComponentFormat, FormatSpecError, Locale, NumberFormat},
    glam::{Quat, Vec3},
    simd::{ToGraphics, ToSimd},
};

/// Prints a few vectors with the format specifier given as first argument.
fn main() -> Result<(), FormatSpecError> {
    env_logger::init();

    let spec = std::env::args().nth(1).unwrap_or_else(|| String::from("F2"));
    let format: NumberFormat = spec.parse()?;
    info!("Formatting with {format} under locale {:?}", Locale::current().name());

    let position = Vec3::new(1.0, 2.5, -1234.5678).to_graphics();
    println!("{}", position.format_with_spec(None));
    println!("{}", position.format_with_spec(Some(&format)));
    for locale in [Locale::INVARIANT, Locale::EN_US, Locale::DE_DE, Locale::FR_FR] {
        println!(
            "{:>6} {}",
            locale.name(),
            position.format_with_spec_and_locale(Some(&format), &locale)
        );
    }

    let rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2).to_graphics();
    println!("{rotation}");

    let back = position.to_simd();
    info!("Round trip preserved the vector: {}", back.to_graphics().exact_eq(&position));
    Ok(())
}
