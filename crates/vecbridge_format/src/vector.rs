use vecbridge_math::vector::{Vector2, Vector3, Vector4};

use crate::{
    locale::Locale,
    number::{format_number, FormatFloat},
    number_format::NumberFormat,
};

/// Labelled `X:.. Y:.. Z:..` text output for vectors.
pub trait ComponentFormat {
    /// Formats every component with `format` under [`Locale::current`].
    ///
    /// Without a format the plain `Display` form such as `(1, 2, 3)` is
    /// returned instead of the labelled one.
    fn format_with_spec(&self, format: Option<&NumberFormat>) -> String;

    /// Formats every component in the general format of `locale`.
    fn format_with_locale(&self, locale: &Locale) -> String;

    /// Formats every component with `format` under `locale`, falling back to
    /// [`ComponentFormat::format_with_locale`] without a format.
    fn format_with_spec_and_locale(
        &self,
        format: Option<&NumberFormat>,
        locale: &Locale,
    ) -> String;
}

fn labelled<T: FormatFloat>(
    components: &[(char, T)],
    format: Option<&NumberFormat>,
    locale: &Locale,
) -> String {
    components
        .iter()
        .map(|&(label, value)| format!("{label}:{}", format_number(value, format, locale)))
        .collect::<Vec<_>>()
        .join(" ")
}

macro_rules! component_format {
    ($name:ident, ($($dim:ident : $label:literal),*)) => {
        impl<T> ComponentFormat for $name<T>
        where
            T: FormatFloat,
        {
            fn format_with_spec(&self, format: Option<&NumberFormat>) -> String {
                match format {
                    Some(format) => self.format_with_spec_and_locale(Some(format), Locale::current()),
                    None => self.to_string(),
                }
            }

            fn format_with_locale(&self, locale: &Locale) -> String {
                labelled(&[$(($label, self.$dim)),*], None, locale)
            }

            fn format_with_spec_and_locale(
                &self,
                format: Option<&NumberFormat>,
                locale: &Locale,
            ) -> String {
                match format {
                    Some(format) => labelled(&[$(($label, self.$dim)),*], Some(format), locale),
                    None => self.format_with_locale(locale),
                }
            }
        }
    };
}

component_format!(Vector2, (x: 'X', y: 'Y'));
component_format!(Vector3, (x: 'X', y: 'Y', z: 'Z'));
component_format!(Vector4, (x: 'X', y: 'Y', z: 'Z', w: 'W'));
