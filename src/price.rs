//! Price amounts, price display variants and the formatter capability.

use core::fmt;
use core::str::FromStr;

use crate::error::PriceError;

/// Largest number of fractional digits a [`PriceAmount`] can carry.
pub const MAX_SCALE: u8 = 18;

/// A non-negative fixed-point decimal amount (`minor / 10^scale`).
///
/// Trailing fractional zeros are stripped on construction, so `4.99` and
/// `4.990` are the same value and compare equal.
///
/// ```rust
/// use purchase_table::PriceAmount;
///
/// let amount: PriceAmount = "4.990".parse().unwrap();
/// assert_eq!(amount, PriceAmount::new(499, 2));
/// assert_eq!(amount.to_string(), "4.99");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceAmount {
    minor: u64,
    scale: u8,
}

impl PriceAmount {
    /// Create an amount of `minor / 10^scale`.
    ///
    /// # Panics
    ///
    /// Panics if `scale` exceeds [`MAX_SCALE`].
    pub fn new(minor: u64, scale: u8) -> Self {
        assert!(
            scale <= MAX_SCALE,
            "price scale {scale} exceeds {MAX_SCALE} fractional digits"
        );
        let (mut minor, mut scale) = (minor, scale);
        while scale > 0 && minor % 10 == 0 {
            minor /= 10;
            scale -= 1;
        }
        Self { minor, scale }
    }

    /// An amount with no fractional part.
    pub fn whole(units: u64) -> Self {
        Self::new(units, 0)
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    /// The amount expressed in units of `10^-digits`, rounded half-up.
    pub fn rescaled(&self, digits: u8) -> u128 {
        let minor = u128::from(self.minor);
        if self.scale <= digits {
            minor * 10u128.pow(u32::from(digits - self.scale))
        } else {
            let divisor = 10u128.pow(u32::from(self.scale - digits));
            (minor + divisor / 2) / divisor
        }
    }
}

impl fmt::Display for PriceAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.minor);
        }
        let unit = 10u64.pow(u32::from(self.scale));
        write!(
            f,
            "{}.{:0width$}",
            self.minor / unit,
            self.minor % unit,
            width = usize::from(self.scale)
        )
    }
}

impl FromStr for PriceAmount {
    type Err = PriceError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        if trimmed.starts_with('-') {
            return Err(PriceError::Negative(text.to_string()));
        }

        let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction)
        {
            return Err(PriceError::Malformed(text.to_string()));
        }

        let fraction = fraction.trim_end_matches('0');
        if fraction.len() > usize::from(MAX_SCALE) {
            return Err(PriceError::Precision {
                text: text.to_string(),
                max: MAX_SCALE,
            });
        }

        let digits = format!("{whole}{fraction}");
        let minor = if digits.is_empty() {
            0
        } else {
            digits
                .parse::<u64>()
                .map_err(|_| PriceError::Overflow(text.to_string()))?
        };

        // fraction.len() <= MAX_SCALE, checked above
        Ok(Self::new(minor, fraction.len() as u8))
    }
}

/// How a row's price is presented on its action control.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PriceDisplay {
    /// Rendered as the configured free label.
    Free,
    /// Rendered through the [`PriceFormatter`] with `locale` in effect.
    Localized { amount: PriceAmount, locale: String },
}

impl PriceDisplay {
    /// Parse `amount` and pair it with a locale tag.
    pub fn localized(amount: &str, locale: impl Into<String>) -> Result<Self, PriceError> {
        Ok(Self::Localized {
            amount: amount.parse()?,
            locale: locale.into(),
        })
    }
}

/// Locale-aware currency formatting capability.
///
/// The formatter is mutable shared state: callers set the active locale and
/// then format. Use [`LocaleScope`] to keep a locale change confined to a
/// single formatting call.
#[cfg_attr(test, mockall::automock)]
pub trait PriceFormatter {
    /// The currently active locale tag.
    fn locale(&self) -> String;

    fn set_locale(&mut self, tag: &str);

    /// Format `amount` using the active locale.
    fn format(&self, amount: &PriceAmount) -> String;
}

/// Guard that activates a locale on a formatter and restores the previous
/// locale when dropped.
pub struct LocaleScope<'a, F: PriceFormatter + ?Sized> {
    formatter: &'a mut F,
    previous: String,
}

impl<'a, F: PriceFormatter + ?Sized> LocaleScope<'a, F> {
    pub fn enter(formatter: &'a mut F, tag: &str) -> Self {
        let previous = formatter.locale();
        formatter.set_locale(tag);
        Self {
            formatter,
            previous,
        }
    }

    pub fn format(&self, amount: &PriceAmount) -> String {
        self.formatter.format(amount)
    }
}

impl<F: PriceFormatter + ?Sized> Drop for LocaleScope<'_, F> {
    fn drop(&mut self) {
        self.formatter.set_locale(&self.previous);
    }
}

#[derive(Debug)]
struct LocaleRules {
    symbol: &'static str,
    symbol_first: bool,
    spaced: bool,
    decimal: char,
    group: &'static str,
    fraction_digits: u8,
}

const fn prefix(symbol: &'static str) -> LocaleRules {
    LocaleRules {
        symbol,
        symbol_first: true,
        spaced: false,
        decimal: '.',
        group: ",",
        fraction_digits: 2,
    }
}

const fn euro_suffix(group: &'static str) -> LocaleRules {
    LocaleRules {
        symbol: "€",
        symbol_first: false,
        spaced: true,
        decimal: ',',
        group,
        fraction_digits: 2,
    }
}

const GENERIC: LocaleRules = prefix("¤");

static LOCALES: &[(&str, LocaleRules)] = &[
    ("en_US", prefix("$")),
    ("en_CA", prefix("$")),
    ("en_AU", prefix("$")),
    ("en_GB", prefix("£")),
    ("de_DE", euro_suffix(".")),
    ("es_ES", euro_suffix(".")),
    ("it_IT", euro_suffix(".")),
    ("fr_FR", euro_suffix(" ")),
    (
        "ja_JP",
        LocaleRules {
            symbol: "¥",
            symbol_first: true,
            spaced: false,
            decimal: '.',
            group: ",",
            fraction_digits: 0,
        },
    ),
];

/// A small table-driven [`PriceFormatter`] for hosts without a platform
/// currency formatter.
///
/// Locale tags are accepted with either separator (`en_US` or `en-US`).
/// Unknown locales use the generic currency sign with `en_US` separators.
///
/// ```rust
/// use purchase_table::{CurrencyFormatter, PriceAmount, PriceFormatter};
///
/// let mut formatter = CurrencyFormatter::new("en-US");
/// assert_eq!(formatter.format(&PriceAmount::new(123450, 2)), "$1,234.50");
///
/// formatter.set_locale("de_DE");
/// assert_eq!(formatter.format(&PriceAmount::new(999, 2)), "9,99 €");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    locale: String,
}

impl CurrencyFormatter {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
        }
    }

    fn rules(&self) -> &'static LocaleRules {
        let tag = self.locale.replace('-', "_");
        LOCALES
            .iter()
            .find(|(name, _)| *name == tag)
            .map_or(&GENERIC, |(_, rules)| rules)
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new("en_US")
    }
}

impl PriceFormatter for CurrencyFormatter {
    fn locale(&self) -> String {
        self.locale.clone()
    }

    fn set_locale(&mut self, tag: &str) {
        self.locale = tag.to_string();
    }

    fn format(&self, amount: &PriceAmount) -> String {
        let rules = self.rules();
        let value = amount.rescaled(rules.fraction_digits);
        let unit = 10u128.pow(u32::from(rules.fraction_digits));

        let mut number = group_digits(value / unit, rules.group);
        if rules.fraction_digits > 0 {
            number.push(rules.decimal);
            number.push_str(&format!(
                "{:0width$}",
                value % unit,
                width = usize::from(rules.fraction_digits)
            ));
        }

        let space = if rules.spaced { " " } else { "" };
        if rules.symbol_first {
            format!("{}{space}{number}", rules.symbol)
        } else {
            format!("{number}{space}{}", rules.symbol)
        }
    }
}

fn group_digits(value: u128, separator: &str) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
