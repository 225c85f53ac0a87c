use std::sync::OnceLock;

use log::{debug, warn};

/// Environment variables consulted for the current locale, in priority order.
const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

static CURRENT: OnceLock<Locale> = OnceLock::new();

/// Presets searched by [`Locale::from_name`], first match wins.
static KNOWN: [Locale; 6] = [
    Locale::EN_US,
    Locale::EN_GB,
    Locale::DE_DE,
    Locale::FR_FR,
    Locale::ES_ES,
    Locale::JA_JP,
];

/// Numeric formatting conventions of a language and region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    name: &'static str,
    decimal_separator: &'static str,
    group_separator: &'static str,
    group_size: usize,
    negative_sign: &'static str,
    positive_sign: &'static str,
    nan_symbol: &'static str,
    positive_infinity_symbol: &'static str,
    negative_infinity_symbol: &'static str,
    percent_suffix: &'static str,
    currency_symbol: &'static str,
    currency_decimals: u8,
    currency_positive_pattern: &'static str,
    currency_negative_pattern: &'static str,
}

impl Locale {
    /// Culture-independent conventions, always available.
    pub const INVARIANT: Locale = Locale {
        name: "",
        decimal_separator: ".",
        group_separator: ",",
        group_size: 3,
        negative_sign: "-",
        positive_sign: "+",
        nan_symbol: "NaN",
        positive_infinity_symbol: "Infinity",
        negative_infinity_symbol: "-Infinity",
        percent_suffix: " %",
        currency_symbol: "\u{a4}",
        currency_decimals: 2,
        currency_positive_pattern: "$n",
        currency_negative_pattern: "($n)",
    };

    pub const EN_US: Locale =
        Locale::regional("en-US", ".", ",", "%").currency("$", 2, "$n", "-$n");
    pub const EN_GB: Locale =
        Locale::regional("en-GB", ".", ",", "%").currency("\u{a3}", 2, "$n", "-$n");
    pub const DE_DE: Locale =
        Locale::regional("de-DE", ",", ".", "\u{a0}%").currency("\u{20ac}", 2, "n $", "-n $");
    pub const FR_FR: Locale = Locale::regional("fr-FR", ",", "\u{202f}", "\u{a0}%")
        .currency("\u{20ac}", 2, "n $", "-n $");
    pub const ES_ES: Locale =
        Locale::regional("es-ES", ",", ".", "\u{a0}%").currency("\u{20ac}", 2, "n $", "-n $");
    pub const JA_JP: Locale =
        Locale::regional("ja-JP", ".", ",", "%").currency("\u{ffe5}", 0, "$n", "-$n");

    const fn regional(
        name: &'static str,
        decimal_separator: &'static str,
        group_separator: &'static str,
        percent_suffix: &'static str,
    ) -> Locale {
        Locale {
            name,
            decimal_separator,
            group_separator,
            group_size: 3,
            negative_sign: "-",
            positive_sign: "+",
            nan_symbol: "NaN",
            positive_infinity_symbol: "∞",
            negative_infinity_symbol: "-∞",
            percent_suffix,
            currency_symbol: "\u{a4}",
            currency_decimals: 2,
            currency_positive_pattern: "$n",
            currency_negative_pattern: "-$n",
        }
    }

    /// Currency patterns use `$` for the symbol, `n` for the number and `-`
    /// for the negative sign.
    const fn currency(
        mut self,
        symbol: &'static str,
        decimals: u8,
        positive_pattern: &'static str,
        negative_pattern: &'static str,
    ) -> Locale {
        self.currency_symbol = symbol;
        self.currency_decimals = decimals;
        self.currency_positive_pattern = positive_pattern;
        self.currency_negative_pattern = negative_pattern;
        self
    }

    /// Looks a locale up by name.
    ///
    /// Both `de-DE` and POSIX spellings such as `de_DE.UTF-8` or
    /// `de_DE@euro` are accepted, case-insensitively. When the region is
    /// unknown the first locale of the same language is used, `C` and
    /// `POSIX` name the invariant locale.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Locale> {
        let name = name
            .split(|c: char| c == '.' || c == '@')
            .next()
            .unwrap_or_default()
            .trim();
        if name.is_empty() {
            return None;
        }
        if name.eq_ignore_ascii_case("C") || name.eq_ignore_ascii_case("POSIX") {
            return Some(Locale::INVARIANT);
        }

        let name = name.replace('_', "-");
        let language = name.split('-').next().unwrap_or_default();
        KNOWN
            .iter()
            .find(|locale| locale.name.eq_ignore_ascii_case(&name))
            .or_else(|| {
                KNOWN
                    .iter()
                    .find(|locale| locale.language().eq_ignore_ascii_case(language))
            })
            .copied()
    }

    /// The locale configured for this process.
    ///
    /// Resolved once from the first non-empty of `LC_ALL`, `LC_NUMERIC` and
    /// `LANG`. Missing or unknown values select [`Locale::INVARIANT`].
    #[must_use]
    pub fn current() -> &'static Locale {
        CURRENT.get_or_init(|| Self::resolve(|variable| std::env::var(variable).ok()))
    }

    pub(crate) fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Locale {
        let Some((variable, value)) = LOCALE_VARIABLES.iter().find_map(|&variable| {
            lookup(variable)
                .filter(|value| !value.is_empty())
                .map(|value| (variable, value))
        }) else {
            debug!("No locale configured, using the invariant locale");
            return Locale::INVARIANT;
        };

        if let Some(locale) = Self::from_name(&value) {
            debug!("Using locale {:?} from {variable}={value}", locale.name);
            locale
        } else {
            warn!("Unknown locale {value:?} in {variable}, using the invariant locale");
            Locale::INVARIANT
        }
    }

    #[must_use]
    pub const fn with_decimal_separator(mut self, decimal_separator: &'static str) -> Self {
        self.decimal_separator = decimal_separator;
        self
    }

    #[must_use]
    pub const fn with_group_separator(mut self, group_separator: &'static str) -> Self {
        self.group_separator = group_separator;
        self
    }

    /// Digits per group in the integer part, `0` disables grouping.
    #[must_use]
    pub const fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    #[must_use]
    pub const fn with_currency_symbol(mut self, currency_symbol: &'static str) -> Self {
        self.currency_symbol = currency_symbol;
        self
    }

    #[must_use]
    pub const fn with_currency_decimals(mut self, currency_decimals: u8) -> Self {
        self.currency_decimals = currency_decimals;
        self
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn language(&self) -> &'static str {
        self.name.split('-').next().unwrap_or_default()
    }

    #[must_use]
    pub fn decimal_separator(&self) -> &'static str {
        self.decimal_separator
    }

    #[must_use]
    pub fn group_separator(&self) -> &'static str {
        self.group_separator
    }

    #[must_use]
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    #[must_use]
    pub fn negative_sign(&self) -> &'static str {
        self.negative_sign
    }

    #[must_use]
    pub fn positive_sign(&self) -> &'static str {
        self.positive_sign
    }

    #[must_use]
    pub fn nan_symbol(&self) -> &'static str {
        self.nan_symbol
    }

    #[must_use]
    pub fn positive_infinity_symbol(&self) -> &'static str {
        self.positive_infinity_symbol
    }

    #[must_use]
    pub fn negative_infinity_symbol(&self) -> &'static str {
        self.negative_infinity_symbol
    }

    #[must_use]
    pub fn percent_suffix(&self) -> &'static str {
        self.percent_suffix
    }

    #[must_use]
    pub fn currency_symbol(&self) -> &'static str {
        self.currency_symbol
    }

    /// Decimals of the currency format when no precision is given.
    #[must_use]
    pub fn currency_decimals(&self) -> u8 {
        self.currency_decimals
    }

    #[must_use]
    pub fn currency_positive_pattern(&self) -> &'static str {
        self.currency_positive_pattern
    }

    #[must_use]
    pub fn currency_negative_pattern(&self) -> &'static str {
        self.currency_negative_pattern
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::INVARIANT
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn environment(variables: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let variables: HashMap<String, String> = variables
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |variable| variables.get(variable).cloned()
    }

    #[test]
    fn from_name_bcp47() {
        assert_eq!(Locale::from_name("de-DE"), Some(Locale::DE_DE));
        assert_eq!(Locale::from_name("fr-fr"), Some(Locale::FR_FR));
    }

    #[test]
    fn from_name_posix() {
        assert_eq!(Locale::from_name("de_DE.UTF-8"), Some(Locale::DE_DE));
        assert_eq!(Locale::from_name("es_ES@euro"), Some(Locale::ES_ES));
        assert_eq!(Locale::from_name("en_GB.ISO-8859-1"), Some(Locale::EN_GB));
    }

    #[test]
    fn from_name_language_fallback() {
        assert_eq!(Locale::from_name("en"), Some(Locale::EN_US));
        assert_eq!(Locale::from_name("es_MX.UTF-8"), Some(Locale::ES_ES));
    }

    #[test]
    fn from_name_c_and_posix() {
        assert_eq!(Locale::from_name("C"), Some(Locale::INVARIANT));
        assert_eq!(Locale::from_name("C.UTF-8"), Some(Locale::INVARIANT));
        assert_eq!(Locale::from_name("POSIX"), Some(Locale::INVARIANT));
    }

    #[test]
    fn from_name_unknown() {
        assert_eq!(Locale::from_name("xx_YY"), None);
        assert_eq!(Locale::from_name(""), None);
    }

    #[test]
    fn resolve_prefers_lc_all() {
        let lookup = environment(&[("LC_ALL", "fr_FR.UTF-8"), ("LANG", "de_DE.UTF-8")]);

        assert_eq!(Locale::resolve(lookup), Locale::FR_FR);
    }

    #[test]
    fn resolve_skips_empty_variables() {
        let lookup = environment(&[("LC_ALL", ""), ("LC_NUMERIC", "ja_JP.UTF-8")]);

        assert_eq!(Locale::resolve(lookup), Locale::JA_JP);
    }

    #[test]
    fn resolve_without_configuration() {
        assert_eq!(Locale::resolve(environment(&[])), Locale::INVARIANT);
    }

    #[test]
    fn resolve_unknown_locale() {
        let lookup = environment(&[("LANG", "tlh_KL.UTF-8")]);

        assert_eq!(Locale::resolve(lookup), Locale::INVARIANT);
    }

    #[test]
    fn builder_overrides_separators() {
        let locale = Locale::INVARIANT
            .with_decimal_separator(",")
            .with_group_separator("'")
            .with_group_size(0);

        assert_eq!(locale.decimal_separator(), ",");
        assert_eq!(locale.group_separator(), "'");
        assert_eq!(locale.group_size(), 0);
        assert_eq!(locale.nan_symbol(), "NaN");
    }

    #[test]
    fn builder_overrides_currency() {
        let locale = Locale::DE_DE
            .with_currency_symbol("CHF")
            .with_currency_decimals(3);

        assert_eq!(locale.currency_symbol(), "CHF");
        assert_eq!(locale.currency_decimals(), 3);
        assert_eq!(locale.currency_positive_pattern(), "n $");
    }

    #[test]
    fn currency_conventions() {
        assert_eq!(Locale::INVARIANT.currency_symbol(), "\u{a4}");
        assert_eq!(Locale::INVARIANT.currency_negative_pattern(), "($n)");
        assert_eq!(Locale::EN_US.currency_negative_pattern(), "-$n");
        assert_eq!(Locale::JA_JP.currency_decimals(), 0);
    }

    #[test]
    fn current_is_resolved_once() {
        let first = Locale::current();
        let from_threads: Vec<usize> = (0..4)
            .map(|_| std::thread::spawn(|| std::ptr::from_ref(Locale::current()) as usize))
            .map(|handle| handle.join().unwrap())
            .collect();

        assert!(std::ptr::eq(first, Locale::current()));
        for address in from_threads {
            assert_eq!(address, std::ptr::from_ref(first) as usize);
        }
    }
}
